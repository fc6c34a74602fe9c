pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::session::FormSession;
pub use utils::error::{Result, TranscriptError};
