//! HTTP Status Codes.
//!
//! Every standard status code from the HTTP RFCs, WebDAV extensions
//! included, as a named constant:
//!
//! ```
//! use http_status::{Class, StatusCode};
//!
//! assert_eq!(StatusCode::NOT_FOUND, 404);
//! assert_eq!(StatusCode::NOT_FOUND.class(), Class::ClientError);
//! assert_eq!(Class::of(999), Class::Unknown);
//! ```
#![warn(missing_debug_implementations)]

mod class;
mod status;

#[cfg(feature = "serde")]
mod serde;

pub use class::Class;
pub use status::{StatusCode, UnknownStatusName};
