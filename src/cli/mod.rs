//! CLI infrastructure for the pitch-perfect toolkit
//!
//! This module provides the command-line interface for aggregating league
//! data and solving pitcher-batter matchups.

pub mod commands;
pub mod output;
