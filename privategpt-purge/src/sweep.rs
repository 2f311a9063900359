//! Startup sweep of volatile directories for residual artifacts.
//!
//! Only filenames are inspected, never file contents. Matching on a name
//! substring is inherently approximate — renamed residuals are missed and
//! an unrelated user file carrying the substring would be destroyed; this
//! is an accepted limitation of the heuristic.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Filename substrings that mark an entry as ours (matched
/// case-insensitively, so `PrivateGPT` variants are covered).
pub const SIGNATURES: [&str; 2] = ["privategpt", "private-gpt"];

/// Files at or above this size are deleted without a zero-overwrite
/// pass, to bound sweep latency. Deletion is guaranteed either way;
/// secure overwrite is not, for very large residuals.
pub const OVERWRITE_CEILING: u64 = 10 * 1024 * 1024;

/// The fixed set of volatile locations to sweep: the app's private data
/// directory (when the shell provides one), the system temp directory,
/// and on Windows the local-appdata temp directory.
pub fn default_locations(user_data_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(dir) = user_data_dir {
        locations.push(dir.to_path_buf());
    }
    locations.push(std::env::temp_dir());
    #[cfg(windows)]
    if let Some(local_app_data) = std::env::var_os("LOCALAPPDATA") {
        locations.push(PathBuf::from(local_app_data).join("Temp"));
    }
    locations
}

fn matches_signature(name: &str) -> bool {
    let lower = name.to_lowercase();
    SIGNATURES.iter().any(|sig| lower.contains(sig))
}

/// Destroys every top-level entry under `locations` whose name carries a
/// product signature. Returns the number of entries destroyed.
///
/// Every failure is contained: an unreadable location is skipped, a
/// locked or permission-denied entry is logged and the sweep moves on.
/// Never propagates an error to the caller.
pub fn sweep(locations: &[PathBuf]) -> usize {
    let mut destroyed = 0;

    for location in locations {
        let entries = match fs::read_dir(location) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("skipping sweep location {}: {e}", location.display());
                continue;
            }
        };

        for entry in entries {
            let Ok(entry) = entry else { continue };
            let name = entry.file_name();
            if !matches_signature(&name.to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            match destroy_entry(&path) {
                Ok(()) => {
                    destroyed += 1;
                    info!("purged residual artifact {}", path.display());
                }
                Err(e) => warn!("failed to purge {}: {e}", path.display()),
            }
        }
    }

    destroyed
}

/// Removes one matched entry: directories recursively, files with a
/// zero-overwrite pass when they are small enough.
fn destroy_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;

    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        let size = metadata.len();
        if size > 0 && size < OVERWRITE_CEILING {
            // Zero the contents so the unlinked blocks hold nothing.
            fs::write(path, vec![0u8; size as usize])?;
        }
        fs::remove_file(path)?;
    }

    Ok(())
}
