//! # Query Executor
//!
//! Runs a canonical spec end to end: plan, concurrent count + fetch,
//! location join, envelope assembly.

use std::sync::Arc;

use tracing::debug;

use crate::model::{ListingView, LocationSummary};
use crate::normalizer::FilterSpec;
use crate::planner::{QueryPlan, QueryPlanner};
use crate::store::ListingStore;

use super::envelope::{Pagination, ResultEnvelope};
use super::errors::ExecutorResult;

/// Executes filter specifications against a listing store.
pub struct QueryExecutor<S> {
    store: Arc<S>,
}

impl<S> Clone for QueryExecutor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ListingStore> QueryExecutor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Executes a spec and assembles the result envelope.
    ///
    /// A location id referencing nothing is not an error: it yields an
    /// empty page with totalCount 0. Storage failures propagate
    /// unchanged; no retries happen here.
    pub async fn execute(&self, spec: &FilterSpec) -> ExecutorResult<ResultEnvelope> {
        let plan = QueryPlanner::plan(spec);
        debug!(
            predicates = plan.predicates.len(),
            skip = plan.skip,
            limit = plan.limit,
            "executing filter query"
        );

        // Independent reads over the same predicate. Not transactional:
        // a concurrent write may make count and page disagree by at most
        // the concurrent write volume.
        let (count, page) = tokio::join!(
            self.store.count_matches(&plan),
            self.store.fetch_page(&plan)
        );
        let count = count?;
        let page = page?;

        let location = self.resolve_location(&plan).await?;
        let data = page
            .into_iter()
            .map(|listing| ListingView {
                listing,
                location: location.clone(),
            })
            .collect();

        Ok(ResultEnvelope {
            data,
            pagination: Pagination::compute(count, spec.page, spec.page_size),
        })
    }

    /// Read-side join: the plan is scoped to one location, so a single
    /// lookup covers the whole page.
    async fn resolve_location(&self, plan: &QueryPlan) -> ExecutorResult<Option<LocationSummary>> {
        let Some(id) = plan.location_id() else {
            return Ok(None);
        };
        let location = self.store.get_location(id).await?;
        Ok(location.as_ref().map(LocationSummary::from))
    }
}
