//! Purge orchestration state machine.

use std::path::{Path, PathBuf};

use privategpt_session::SessionManager;
use tracing::info;

use crate::sweep::{default_locations, sweep};

/// Environment variable scrubbed during shutdown in case the shell
/// stashed session material there.
const SESSION_ENV_VAR: &str = "PRIVATEGPT_SESSION";

/// Purge lifecycle states.
///
/// Legal transitions are `Idle → StartupSweeping → Idle` on launch and
/// `Idle → ShuttingDown → Terminated` on exit; nothing else. Purge is
/// not reentrant — a trigger arriving in any non-`Idle` state is a
/// no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurgeState {
    Idle,
    StartupSweeping,
    ShuttingDown,
    Terminated,
}

/// Orchestrates the startup disk sweep and the shutdown memory purge.
///
/// The shell wires [`shutdown`] to its normal-quit, last-window-closed,
/// and termination-signal paths; it runs synchronously and is idempotent
/// so multiple exit paths may race to call it.
///
/// [`shutdown`]: PurgeController::shutdown
pub struct PurgeController {
    state: PurgeState,
    locations: Vec<PathBuf>,
}

impl PurgeController {
    /// Controller over the default volatile locations, plus the app's
    /// private data directory when the shell can provide it.
    pub fn new(user_data_dir: Option<&Path>) -> Self {
        Self::with_locations(default_locations(user_data_dir))
    }

    /// Controller over an explicit location list.
    pub fn with_locations(locations: Vec<PathBuf>) -> Self {
        Self {
            state: PurgeState::Idle,
            locations,
        }
    }

    pub fn state(&self) -> PurgeState {
        self.state
    }

    /// Phase one: destroy residual artifacts from earlier runs.
    ///
    /// Returns the number of entries destroyed, for diagnostics. Runs
    /// blocking filesystem I/O; the shell should keep it off the path
    /// that services user interaction. No-op outside `Idle`.
    pub fn startup_sweep(&mut self) -> usize {
        if self.state != PurgeState::Idle {
            return 0;
        }
        self.state = PurgeState::StartupSweeping;
        info!("running startup purge");

        let destroyed = sweep(&self.locations);

        info!("startup purge complete, entries destroyed: {destroyed}");
        self.state = PurgeState::Idle;
        destroyed
    }

    /// Phase two: scrub and empty both stores, rotate the session key,
    /// and drop any session material from the environment.
    ///
    /// Completes synchronously before returning, so a signal handler may
    /// call it immediately before `process::exit` with no cleanup
    /// opportunity afterwards. A second trigger while one is in
    /// progress, or after termination, is a no-op.
    pub fn shutdown(&mut self, session: &mut SessionManager) {
        if self.state != PurgeState::Idle {
            return;
        }
        self.state = PurgeState::ShuttingDown;
        info!("running shutdown purge");

        session.purge();

        // The process is single-threaded on every shutdown path that
        // reaches here, which is what makes the env mutation sound.
        unsafe {
            std::env::remove_var(SESSION_ENV_VAR);
        }

        info!("shutdown purge complete");
        self.state = PurgeState::Terminated;
    }
}
