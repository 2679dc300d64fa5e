//! Host inputs consulted when picking a network interface naming scheme.
//!
//! - [`cmdline`]: the kernel command line (`/proc/cmdline`)
//! - [`env`]: process environment variables

pub use error::{Error, Result};

pub mod cmdline;
pub mod env;
mod error;
