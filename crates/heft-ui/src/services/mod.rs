//! HTTP client helpers (REST).

pub(crate) mod api;
