use respath_api::{Candidate, Hints, SelectStrategy, Tracer};

/// Keeps every candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSelector;

impl SelectStrategy for NoOpSelector {
    fn name(&self) -> &str {
        "no-op"
    }

    fn do_select(&self, candidates: &[Candidate], _hints: &Hints, _tracer: &Tracer) -> Vec<Candidate> {
        candidates.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selector;
    use crate::selector::tests::candidates;

    #[test]
    fn test_returns_input_verbatim() {
        let input = candidates(&["file:///b", "file:///a", "file:///b"]);
        assert_eq!(
            NoOpSelector.do_select(&input, &Hints::empty(), &Tracer::disabled()),
            input
        );
        assert_eq!(
            Selector::new(NoOpSelector).select(&input, &Hints::empty(), &Tracer::disabled()),
            input
        );
    }
}
