pub mod config;
pub mod defaults;
pub mod processing;
pub mod reader;
pub mod transform;

// Re-export main types for convenient access
pub use config::{
    ConfigFile, LineBreaksConfig, LineBreaksConfigBuilder, WordList,
    DEFAULT_LANG, DEFAULT_MARKER, UNICODE_NBSP,
};
pub use transform::{LineBreaks, ShortcutMap, TransformStats};

// Re-export CLI processing helpers for integration tests and benchmarks
pub use processing::{process_files, process_text, write_stats, InputStats, ProcessingOptions};
