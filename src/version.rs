//! PGDL toolchain version information.
//!
//! The version is exposed as a single constant so the CLI and any embedding host report the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The PGDL toolchain version string (for example, `0.1.0`).
pub const PGDL_VERSION: &str = env!("CARGO_PKG_VERSION");
