use std::fmt;
use url::Url;

/// A physical resource location produced by a locator.
///
/// No provenance is attached; selectors inspect [`Candidate::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    url: Url,
}

impl Candidate {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(text: &str) -> Result<Self, url::ParseError> {
        Url::parse(text).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl From<Url> for Candidate {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Lazily consumed candidate sequence returned by locators.
pub type Candidates = Box<dyn Iterator<Item = Candidate> + Send>;

pub fn no_candidates() -> Candidates {
    Box::new(std::iter::empty())
}
