#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod config;
mod host;
pub mod utils;

pub use config::*;
pub use host::TracingHost;
