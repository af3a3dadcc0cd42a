//! Configuration and shared data types

pub mod config;
pub mod models;

// Re-export the main types for convenience
pub use config::{ApiCredential, AppConfig};
pub use models::{Message, Page, Role};
