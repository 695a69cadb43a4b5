//! Filter Normalizer subsystem for roomlet
//!
//! Converts a raw, possibly partially-malformed filter request into a
//! canonical [`FilterSpec`], or rejects it.
//!
//! # Normalization Rules (strict)
//!
//! 1. `locationId` is mandatory; missing or empty rejects the request
//! 2. Set-valued filters are kept only when non-empty; empty means
//!    "no constraint", never "match nothing"
//! 3. Rent bounds are parsed independently; an unparsable or negative
//!    bound is dropped without affecting the other
//! 4. Boolean filters are kept only when explicitly supplied
//! 5. Unrecognized sort options normalize to `Newest`
//! 6. Page clamps to >= 1; page size is capped server-side
//!
//! The normalizer is a pure transform: no I/O, no shared state.

mod errors;
mod normalizer;
mod request;
mod spec;

pub use errors::{NormalizeError, NormalizeResult};
pub use normalizer::{Normalizer, PageLimits};
pub use request::{FilterRequest, RawFilters, RawRentRange};
pub use spec::{FilterSpec, RentBounds, SortOption};
