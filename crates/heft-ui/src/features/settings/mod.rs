//! Settings feature slice.
//!
//! # Design
//! - The hook owns fetching; views only read its handle.
//! - Threshold derivation stays in `core::thresholds` so it is testable off-wasm.

mod hook;
mod view;

pub(crate) use view::SizeLimitsPage;
