//! Core, DOM-free primitives and helpers for the Web UI.
pub mod error;
pub mod landing;
pub mod logic;
pub mod settings;
pub mod thresholds;
