//! utter CLI library
//!
//! This library provides the command-line interface for utter text
//! segmentation and TTS request planning.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
