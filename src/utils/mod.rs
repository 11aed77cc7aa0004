//! Shared utility functions.
//!
//! - `html`: HTML escaping for safe rendering
//! - `format`: Human-readable sizes
//! - `mime`: Accepted image formats and content sniffing

mod format;
mod html;
mod mime;

pub use format::format_size;
pub use html::html_escape;
pub use mime::{accept_attribute, is_accepted_image, sniff_image_mime, ACCEPTED_EXTENSIONS};
