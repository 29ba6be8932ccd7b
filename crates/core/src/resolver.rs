//! Pipeline orchestration: locate, filter, select, and the inverse lookup.
//!
//! ```text
//!  ResourcePath + Hints
//!        │
//!        ▼
//!  ┌───────────┐   ┌──────────────────┐   ┌───────────┐
//!  │  Locator  │──▶│ CandidateFilter  │──▶│ Selector  │──▶ preferred candidates
//!  └───────────┘   └──────────────────┘   └───────────┘
//!
//!  Url + Hints ──▶ PrefixStripper[] (from the locator tree) ──▶ ResourcePath
//! ```

use crate::selector::Selector;
use respath_api::{
    Candidate, CandidateFilter, Hints, Locator, PrefixStripper, ResourcePath, Result, Tracer, Url,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Filter that keeps every candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughFilter;

impl CandidateFilter for PassThroughFilter {
    fn filter(
        &self,
        _path: &ResourcePath,
        candidates: Vec<Candidate>,
        _hints: &Hints,
        _tracer: &Tracer,
    ) -> Vec<Candidate> {
        candidates
    }
}

/// A configured resolution pipeline.
///
/// Immutable once built; share it behind an `Arc` and call it from any thread.
#[derive(Clone)]
pub struct ResourceResolver {
    locator: Arc<dyn Locator>,
    filter: Arc<dyn CandidateFilter>,
    selector: Selector,
}

impl ResourceResolver {
    pub fn new(locator: Arc<dyn Locator>, selector: Selector) -> Self {
        Self {
            locator,
            filter: Arc::new(PassThroughFilter),
            selector,
        }
    }

    pub fn with_filter(mut self, filter: Arc<dyn CandidateFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn locator(&self) -> &Arc<dyn Locator> {
        &self.locator
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Every candidate the locator tree produces, in configured order.
    pub fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Vec<Candidate>> {
        tracer.scope("locate", |t| {
            Ok(self.locator.locate(path, hints, t)?.collect())
        })
    }

    /// Preferred subset of `candidates`; must be called with a non-empty list
    /// to get a meaningful answer.
    pub fn select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer) -> Vec<Candidate> {
        tracer.scope("select", |t| self.selector.select(candidates, hints, t))
    }

    /// Full pipeline with a caller-supplied tracer.
    pub fn resolve_with(
        &self,
        path: &ResourcePath,
        hints: &Hints,
        tracer: &Tracer,
    ) -> Result<Vec<Candidate>> {
        tracer.trace(|| format!("resolving {} with hints {:?}", path, hints.keys()));

        let located = self.locate(path, hints, tracer)?;
        let located_count = located.len();
        let filtered = tracer.scope("filter", |t| self.filter.filter(path, located, hints, t));

        if filtered.is_empty() {
            debug!("No candidates for {} ({} located)", path, located_count);
            tracer.trace(|| format!("nothing left for {} after filtering", path));
            return Ok(Vec::new());
        }

        let selected = self.select(&filtered, hints, tracer);
        debug!(
            "Resolved {}: {} located, {} filtered, {} selected",
            path,
            located_count,
            filtered.len(),
            selected.len()
        );
        Ok(selected)
    }

    pub fn resolve_all(&self, path: &ResourcePath, hints: &Hints) -> Result<Vec<Candidate>> {
        self.resolve_with(path, hints, &Tracer::disabled())
    }

    /// The single preferred candidate, if any.
    pub fn resolve(&self, path: &ResourcePath, hints: &Hints) -> Result<Option<Candidate>> {
        Ok(self.resolve_all(path, hints)?.into_iter().next())
    }

    /// Like [`Self::resolve_all`], also returning the recorded decision trace.
    pub fn resolve_traced(&self, path: &ResourcePath, hints: &Hints) -> (Result<Vec<Candidate>>, Tracer) {
        let tracer = Tracer::recording();
        let result = self.resolve_with(path, hints, &tracer);
        (result, tracer)
    }

    pub fn prefix_strippers(&self, hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        self.locator.prefix_strippers(hints)
    }

    /// Best-effort recovery of the resource path a URL was resolved from.
    pub fn reverse(&self, url: &Url, hints: &Hints) -> Option<ResourcePath> {
        let text = url.as_str();
        let found = self
            .prefix_strippers(hints)
            .iter()
            .find_map(|stripper| stripper.strip(text));

        match &found {
            Some(path) => trace!("Reversed {} to {}", text, path),
            None => trace!("No stripper recognises {}", text),
        }
        found
    }
}
