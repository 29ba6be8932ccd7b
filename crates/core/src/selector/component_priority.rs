use crate::url_shape::is_archive_entry;
use respath_api::{Candidate, Hints, SelectStrategy, Tracer};

/// Prefers candidates served from the archives of the highest-priority
/// components.
///
/// Components are scanned by descending priority. Once a candidate matched
/// at priority P, the remaining components at P are still scanned so every
/// tied winner is kept; the scan stops at the first lower priority.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighestComponentPrioritySelector;

impl HighestComponentPrioritySelector {
    pub fn new() -> Self {
        Self
    }
}

impl SelectStrategy for HighestComponentPrioritySelector {
    fn name(&self) -> &str {
        "highest-component-priority"
    }

    fn do_select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer) -> Vec<Candidate> {
        let Some(components) = hints.components() else {
            tracer.trace(|| "no components hinted".to_string());
            return Vec::new();
        };

        let mut unmatched: Vec<&Candidate> = candidates.iter().collect();
        let mut selected = Vec::new();
        let mut matched_priority: Option<i32> = None;

        for component in components.iter() {
            if matched_priority.is_some_and(|p| component.priority() < p) {
                break;
            }

            let prefix = component.archive_prefix();
            let (hits, rest): (Vec<&Candidate>, Vec<&Candidate>) = unmatched
                .into_iter()
                .partition(|c| is_archive_entry(c.as_str(), &prefix));
            unmatched = rest;

            if !hits.is_empty() {
                tracer.trace(|| {
                    format!(
                        "{} candidate(s) from component {} (priority {})",
                        hits.len(),
                        component.name(),
                        component.priority()
                    )
                });
                matched_priority = Some(component.priority());
                selected.extend(hits.into_iter().cloned());
            }
        }

        selected
    }
}
