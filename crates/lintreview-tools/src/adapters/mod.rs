//! Tool adapters.
//!
//! Each adapter wraps an external tool and provides:
//! - Dependency detection
//! - File matching
//! - Output parsing to problems

pub mod flake8;

pub use flake8::Flake8;
