//! Platform-specific integrations.
//!
//! - [`clipboard`] - Cross-platform clipboard access

pub mod clipboard;

pub use clipboard::ClipboardManager;
