//! Select phase: narrowing located candidates to the preferred subset.
//!
//! Strategies implement the permissive [`SelectStrategy`] contract, where an
//! empty answer means "no opinion". [`Selector`] wraps a strategy and turns
//! that into the outward guarantee: a non-empty input always yields a
//! non-empty subset of it.

mod combined;
mod component_priority;
mod noop;
mod servlet_library;

pub use combined::CombinedSelector;
pub use component_priority::HighestComponentPrioritySelector;
pub use noop::NoOpSelector;
pub use servlet_library::FirstServletLibraryResourceSelector;

use respath_api::{Candidate, Hints, SelectStrategy, Tracer};
use std::sync::Arc;

/// Enforces the selection invariant around a [`SelectStrategy`].
#[derive(Clone)]
pub struct Selector {
    strategy: Arc<dyn SelectStrategy>,
}

impl Selector {
    pub fn new(strategy: impl SelectStrategy + 'static) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }

    pub fn from_arc(strategy: Arc<dyn SelectStrategy>) -> Self {
        Self { strategy }
    }

    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// Preferred subset of `candidates`.
    ///
    /// An empty input is returned as is without consulting the strategy.
    pub fn select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer) -> Vec<Candidate> {
        if candidates.is_empty() {
            return Vec::new();
        }

        tracer.scope(self.strategy.name(), |t| {
            let selected: Vec<Candidate> = self
                .strategy
                .do_select(candidates, hints, t)
                .into_iter()
                .filter(|c| candidates.contains(c))
                .collect();

            if selected.is_empty() {
                t.trace(|| format!("no opinion, keeping all {}", candidates.len()));
                candidates.to_vec()
            } else {
                t.trace(|| {
                    let urls: Vec<&str> = selected.iter().map(Candidate::as_str).collect();
                    format!("kept {} of {}: {:?}", selected.len(), candidates.len(), urls)
                });
                selected
            }
        })
    }
}
