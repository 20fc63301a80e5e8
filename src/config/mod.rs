//! Rule file loading
//!
//! A rule file is parsed into [`raw::RawConfig`] (plain strings), then every
//! pattern is compiled into a [`crate::domain::Config`]. Compilation is
//! all-or-nothing.

pub mod error;
pub mod loader;
pub mod raw;

pub use error::ConfigError;
pub use loader::load_config;
