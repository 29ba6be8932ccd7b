use super::Selector;
use respath_api::{Candidate, Hints, SelectStrategy, Tracer};
use tracing::warn;

/// Applies child selectors in configured order while more than one
/// candidate remains.
#[derive(Clone, Default)]
pub struct CombinedSelector {
    selectors: Vec<Selector>,
}

impl CombinedSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        if selectors.is_empty() {
            warn!("Combined selector configured without children");
        }
        Self { selectors }
    }

    /// Append a child selector
    pub fn add_selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}

impl SelectStrategy for CombinedSelector {
    fn name(&self) -> &str {
        "combined"
    }

    fn do_select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer) -> Vec<Candidate> {
        let mut current = candidates.to_vec();
        for (i, selector) in self.selectors.iter().enumerate() {
            if current.len() <= 1 {
                tracer.trace(|| {
                    format!(
                        "single candidate left, skipping {} selector(s)",
                        self.selectors.len() - i
                    )
                });
                break;
            }
            current = selector.select(&current, hints, tracer);
        }
        current
    }
}
