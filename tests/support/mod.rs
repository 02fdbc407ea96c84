#![allow(dead_code)]

pub mod architecture;
pub mod config;
pub mod provider;
