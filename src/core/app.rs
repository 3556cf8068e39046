//! Application identity from Cargo.toml.
//!
//! Single source of truth for the app name, version, and vendor used across the codebase.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vendor / organization used for platform directories.
pub const VENDOR: &str = "polymorphl";

/// Title shown at the top of the chat screen.
pub const TITLE: &str = "Groq Chat App";
