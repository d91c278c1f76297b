//! Configuration and file management for the debug console
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod paths;

pub use app_config::{AppConfig, ConfigSource, LineSeparator};
pub use paths::{app_config_path, cache_dir, config_dir};
