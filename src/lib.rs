// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod error;

pub mod directory;
pub mod favorites;
pub mod gui;
pub mod progress;
pub mod session;
pub mod show;
pub mod store;

pub use error::{Error, Result};
pub use show::Show;
