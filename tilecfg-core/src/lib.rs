//! Data model of a declarative tiling window manager configuration.
//!
//! Everything in here is built once and handed to a [`Host`], the window manager engine that
//! actually owns windows, screens and input. Nothing is executed while a configuration is being
//! declared: key and mouse bindings carry a [`Command`] that only runs on dispatch.
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]
mod command;
pub mod errors;
mod host;
pub mod models;
pub mod text;
pub mod utils;

#[macro_use]
extern crate lazy_static;

pub use command::{Command, LayoutCommand, WindowCommand};
pub use host::Host;
pub use models::{Bindings, Keybind, MouseAction};
pub use text::{shorten, ShortenPolicy, TextShortener};
pub use utils::child_process;
pub use utils::modmask_lookup::{Button, ModMask};
