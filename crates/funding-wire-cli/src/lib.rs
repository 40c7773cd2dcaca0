//! funding-wire-cli
//!
//! Command-line front end for the funding wire codec.

pub mod config;
pub mod commands;
