//! Facility CLI - command line front end for the facility management service
//!
//! The binary parses [`cli::Cli`], loads [`config::Configuration`],
//! initializes logging and dispatches to [`commands::App`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
