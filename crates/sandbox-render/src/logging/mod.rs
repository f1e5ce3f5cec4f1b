//! Logger setup over the `log` facade.
//!
//! The library itself only emits through `log`; hosts that already install a
//! logger can skip this module.

mod init;

pub use init::{init_logging, LoggingConfig};
