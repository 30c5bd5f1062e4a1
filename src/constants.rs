//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::ops::RangeInclusive;

/// Default server origin (the backend's stock port)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Collection path appended to the server origin
pub const API_BASE_PATH: &str = "/api/students";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "rollcall.log";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "ROLLCALL_BASE_URL";

/// Accepted student ages
pub const AGE_RANGE: RangeInclusive<i32> = 5..=100;

/// Application name
pub const APP_NAME: &str = "Student Record Management System";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
