//! # jsondiff-core
//!
//! Comparison engine for JSON documents: resolves dotted node paths,
//! computes structural differences between an expected and an actual
//! document, and renders them as deterministic, human-readable reports.
//!
//! The crate operates on already-parsed [`serde_json::Value`] trees and
//! never mutates its inputs. Turning raw text into values is the caller's
//! concern; the only fatal error this crate defines is a malformed input
//! document ([`DocumentError`]).
mod diff;
mod error;
pub mod messages;
mod paths;
mod resolve;
mod types;

pub use diff::{compare, Difference, DifferenceKind};
pub use error::DocumentError;
pub use paths::{Location, LocationSegment};
pub use resolve::{resolve, Resolved};
pub use types::JsonType;
