//! Query Executor subsystem for roomlet
//!
//! Consumes plans and produces result envelopes.
//!
//! # Execution Flow (strict order)
//!
//! 1. Issue the total-count read and the paged fetch concurrently over
//!    the same predicate
//! 2. Resolve location summaries for the returned page (read-side join)
//! 3. Assemble pagination metadata from the count
//!
//! # Invariants
//!
//! - Deterministic: identical plans over an unchanged store yield
//!   identical envelopes, same order and counts
//! - Page length never exceeds the plan limit
//! - A location with no records is an empty success, not an error
//!
//! The count and the fetch are independent reads; a write landing between
//! them can make totalCount and the page disagree by the concurrent write
//! volume. That staleness window is accepted.

mod envelope;
mod errors;
mod executor;
mod filters;
mod sorter;

pub use envelope::{Pagination, ResultEnvelope};
pub use errors::{ExecutorError, ExecutorResult};
pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use sorter::ListingSorter;
