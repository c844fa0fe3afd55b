//! Pending uploads
//!
//! A [`FileReference`] holds the bytes of a file the Bot API has never seen,
//! loaded eagerly from memory, disk or a URL, together with a display name and
//! a MIME type. It turns into an [`UploadPart`] when a multipart request is
//! assembled.

pub mod mime;
pub mod reference;

pub use reference::{FileOrigin, FileReference, UploadPart};
