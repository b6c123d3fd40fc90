//! Sonos remote control for the command line and BitBar-style menu bars
//!
//! The binary parses its arguments into an [`cli::Invocation`] and hands it
//! to [`app::run`] together with a [`controller::SpeakerController`]. With no
//! target it prints a BitBar menu of every zone; with one it performs a single
//! action on that speaker or its group.

pub mod actions;
pub mod address;
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod topology;

pub use app::run;
pub use error::{BarError, ControllerError};
