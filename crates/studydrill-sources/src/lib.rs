//! studydrill-sources — document source implementations.
//!
//! Implements the `DocumentSource` trait for the filesystem and HTTP, plus
//! an in-memory mock for tests, and loads the `studydrill.toml`
//! configuration that selects between them.

pub mod config;
pub mod fs;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config, load_config_from, SourceConfig, StudydrillConfig};
pub use fs::FsSource;
pub use http::HttpSource;
pub use mock::MockSource;
