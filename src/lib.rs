#![warn(rust_2018_idioms, missing_debug_implementations)]
mod domain;
mod io;
#[cfg(test)]
mod log_capture;
mod menu;
mod payment;
pub mod program;

pub use crate::domain::*;
pub use crate::io::*;
pub use crate::menu::*;
pub use crate::payment::*;
pub use crate::program::*;
