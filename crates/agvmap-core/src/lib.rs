//! # AGVMap Core
//!
//! Foundation crate for the AGVMap facility map editor.
//! Provides the shared constants, the error taxonomy, and the theme
//! manager used across the editor crates.

pub mod constants;
pub mod error;
pub mod theme;

pub use error::{ApiError, CanvasError, Error, Result};
pub use theme::{ThemeManager, ThemeMode, ThemeSubscriptionId};
