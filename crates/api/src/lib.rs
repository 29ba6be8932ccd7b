pub mod collaborator;
pub mod error;
pub mod hints;
pub mod models;
pub mod strategy;
pub mod trace;

// Re-export commonly used types
pub use collaborator::{ClassLoader, SyntheticUrlSchemeFactory, WebContainerContext};
pub use error::{BoxError, ResolveError, Result};
pub use hints::{HintKey, Hints, HintsBuilder};
pub use models::*;
pub use strategy::{CandidateFilter, Locator, PrefixStripper, SelectStrategy};
pub use trace::{TraceEntry, Tracer};
pub use url::Url;
