//! Feature slices: the marketing landing page and the size limits view.

pub(crate) mod landing;
pub(crate) mod settings;
