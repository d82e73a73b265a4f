//! Integration test suite modules

mod cli;
mod config;
mod navigation;
mod render;
