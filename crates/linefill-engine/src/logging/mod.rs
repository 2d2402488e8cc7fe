//! Logger setup for binaries.
//!
//! Library code only talks to the `log` facade; `init_logging` installs the
//! `env_logger` backend and decides which filter it runs with.

mod init;

pub use init::{init_logging, LoggingConfig};
