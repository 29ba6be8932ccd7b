use respath_api::{
    Candidate, Candidates, Hints, Locator, PrefixStripper, ResourcePath, Result, Tracer,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs child locators in configured order and concatenates their results.
///
/// Duplicates are kept. The first failing child aborts the whole call;
/// candidates gathered from earlier children are discarded.
#[derive(Clone, Default)]
pub struct CombinedLocator {
    locators: Vec<Arc<dyn Locator>>,
}

impl CombinedLocator {
    pub fn new(locators: Vec<Arc<dyn Locator>>) -> Self {
        if locators.is_empty() {
            warn!("Combined locator configured without children");
        }
        Self { locators }
    }

    /// Append a child locator
    pub fn add_locator(mut self, locator: Arc<dyn Locator>) -> Self {
        self.locators.push(locator);
        self
    }

    pub fn locators(&self) -> &[Arc<dyn Locator>] {
        &self.locators
    }
}

impl Locator for CombinedLocator {
    fn name(&self) -> &str {
        "combined"
    }

    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates> {
        let mut all: Vec<Candidate> = Vec::new();

        for locator in &self.locators {
            let found: Vec<Candidate> = tracer.scope(locator.name(), |t| {
                let found: Vec<Candidate> = locator.locate(path, hints, t)?.collect();
                t.trace(|| {
                    let urls: Vec<&str> = found.iter().map(Candidate::as_str).collect();
                    format!("located {:?}", urls)
                });
                Ok::<_, respath_api::ResolveError>(found)
            })?;
            all.extend(found);
        }

        debug!(
            "Located {} candidate(s) for {} across {} locator(s)",
            all.len(),
            path,
            self.locators.len()
        );
        Ok(Box::new(all.into_iter()))
    }

    fn prefix_strippers(&self, hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        self.locators
            .iter()
            .flat_map(|locator| locator.prefix_strippers(hints))
            .collect()
    }
}
