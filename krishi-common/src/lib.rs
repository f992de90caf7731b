//! # Krishi Common Library
//!
//! Shared code for the Krishi advisory services including:
//! - Error type and result alias
//! - Configuration loading (CLI → ENV → TOML → default)
//! - Event types (KrishiEvent enum) and EventBus
//! - Server-Sent Events helpers
//! - Language catalog and the injected user context

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod language;
pub mod sse;

pub use error::{Error, Result};
pub use language::Language;
