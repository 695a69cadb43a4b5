//! Query Planner subsystem for roomlet
//!
//! Translates a canonical [`FilterSpec`](crate::normalizer::FilterSpec)
//! into a deterministic, bounded [`QueryPlan`].
//!
//! # Design Principles
//!
//! - Deterministic: same spec → same plan
//! - Bounded: every plan carries an explicit skip/limit
//! - Open-world: a filter absent from the spec contributes no predicate;
//!   records pass regardless of that field's value
//!
//! Predicate order within a plan is fixed (location first, then field
//! filters, then range, then booleans, then text search) so that plans
//! compare equal across identical requests.

mod ast;
mod planner;

pub use ast::{Predicate, QueryPlan, SetField, SortDirection, SortKey, SortSpec};
pub use planner::QueryPlanner;
