//! Dual-phase purge for PrivateGPT.
//!
//! Phase one runs at launch: sweep a fixed set of volatile directories
//! for residual artifacts a crashed or killed previous run left behind,
//! and destroy them. Phase two runs at exit: empty both encrypted stores
//! and rotate the session key, synchronously, so it is safe to invoke
//! from a termination-signal path where no later cleanup will run.
//!
//! Sweep failures are contained per entry and logged; best-effort
//! cleanup must never block startup, and purge failures must never block
//! exit.

mod controller;
mod sweep;

pub use controller::{PurgeController, PurgeState};
pub use sweep::{default_locations, sweep, OVERWRITE_CEILING, SIGNATURES};
