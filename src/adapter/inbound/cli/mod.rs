//! CLI module graph.

pub mod classify;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod examples;
pub mod interactive;
pub mod operator;
pub mod outcome;
pub mod output;
pub mod render;
pub mod run;
