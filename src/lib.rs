//! Typed bindings for a Telegram-style Bot API.
//!
//! Every entity the API exchanges is a typed record that can be validated
//! from, and serialized back to, a plain JSON dictionary. Media items that
//! carry local files are split into JSON fields plus multipart uploads joined
//! by `attach://` placeholders before they are sent.

#[macro_use]
pub mod object;

pub mod client;
pub mod config;
pub mod error;
pub mod files;
pub mod media;
pub mod route;
pub mod types;

pub use error::{Error, Result};
