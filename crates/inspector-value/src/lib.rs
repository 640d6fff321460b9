//! # Inspector values
//!
//! A runtime value model that mirrors what a dynamic host hands to a
//! debugging printer: primitives, ordinary objects, and host objects whose
//! only reliable description is their structure.
//!
//! Nothing in this crate decides what a value *is*. Recognizers in
//! `inspector-kernel` answer that by probing the surface exposed here:
//!
//! ```text
//! Value                 ← undefined, null, boolean, number, string, symbol, object
//!     │
//! Object                ← class tag, constructor, ancestry, methods
//!     │
//! properties / hidden   ← own enumerable members vs. inherited/internal ones
//!     │
//! elements / slot       ← indexed members and host-internal state
//! ```
//!
//! Builders in [`intrinsics`] and [`host`] mint values with the same shape a
//! browser-like host would present, so recognizers can be tested without one.

pub mod host;
pub mod intrinsics;
pub mod json;
pub mod object;
pub mod value;

pub use host::{DocumentBuilder, ElementBuilder, element_class};
pub use intrinsics::{ErrorBuilder, ErrorType, TypedArrayKind};
pub use object::{Object, Singleton, Slot};
pub use value::Value;
