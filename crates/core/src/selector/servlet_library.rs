use crate::url_shape::is_library_entry;
use respath_api::{Candidate, Hints, SelectStrategy, Tracer};
use std::borrow::Cow;

/// Prefers the candidate served from the highest-precedence library of the
/// web application.
///
/// The library order is either configured statically or taken from the
/// hinted web container. A library only matches when its file name sits
/// directly in `/WEB-INF/lib/` right before the archive separator, so
/// `library.jar` never matches `libraryX.jar` or `my-library.jar`.
#[derive(Debug, Default, Clone)]
pub struct FirstServletLibraryResourceSelector {
    libraries: Option<Vec<String>>,
}

impl FirstServletLibraryResourceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_libraries(libraries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            libraries: Some(libraries.into_iter().map(Into::into).collect()),
        }
    }

    fn libraries<'a>(&'a self, hints: &Hints) -> Option<Cow<'a, [String]>> {
        if let Some(libraries) = &self.libraries {
            return Some(Cow::Borrowed(libraries.as_slice()));
        }
        hints
            .web_context()
            .and_then(|context| context.ordered_libraries())
            .map(Cow::Owned)
    }
}

impl SelectStrategy for FirstServletLibraryResourceSelector {
    fn name(&self) -> &str {
        "first-servlet-library"
    }

    fn do_select(&self, candidates: &[Candidate], hints: &Hints, tracer: &Tracer) -> Vec<Candidate> {
        let Some(libraries) = self.libraries(hints) else {
            tracer.trace(|| "no library order available".to_string());
            return Vec::new();
        };

        for library in libraries.iter() {
            if let Some(candidate) = candidates
                .iter()
                .find(|c| is_library_entry(c.as_str(), library))
            {
                tracer.trace(|| format!("{} is served by library {}", candidate, library));
                return vec![candidate.clone()];
            }
        }

        tracer.trace(|| format!("none of {} libraries matched", libraries.len()));
        Vec::new()
    }
}
