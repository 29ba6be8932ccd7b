//! Strategy traits for the locate, filter and select phases.
//!
//! Implementations are configured once and shared across threads, so they
//! must not keep per-call state. Everything a call needs arrives through the
//! arguments.

use crate::error::Result;
use crate::hints::Hints;
use crate::models::{Candidate, Candidates, ResourcePath};
use crate::trace::Tracer;
use std::fmt::Debug;
use std::sync::Arc;

/// Produces candidate locations for a path.
pub trait Locator: Send + Sync {
    /// Name for logging and traces.
    fn name(&self) -> &str;

    /// Candidates for `path`, possibly none.
    ///
    /// Errors are reserved for configuration defects and I/O failures;
    /// a missing hint just means nothing is contributed.
    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates>;

    /// Rules that undo what this locator produces.
    fn prefix_strippers(&self, _hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        Vec::new()
    }
}

/// Narrowing step behind the selector decorator in `respath-core`.
pub trait SelectStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Preferred subset of `candidates`.
    ///
    /// An empty result means "no opinion"; the caller then keeps the full input.
    fn do_select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer)
    -> Vec<Candidate>;
}

/// Recovers a logical path from a URL of a known shape.
pub trait PrefixStripper: Send + Sync + Debug {
    fn strip(&self, url: &str) -> Option<ResourcePath>;
}

/// Content-based elimination of candidates between locate and select.
pub trait CandidateFilter: Send + Sync {
    fn filter(
        &self,
        path: &ResourcePath,
        candidates: Vec<Candidate>,
        hints: &Hints,
        tracer: &Tracer,
    ) -> Vec<Candidate>;
}
