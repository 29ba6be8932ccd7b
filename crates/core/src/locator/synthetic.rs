use crate::stripper::SyntheticPrefixStripper;
use respath_api::{
    Candidate, Candidates, Hints, Locator, PrefixStripper, ResolveError, ResourcePath, Result,
    Tracer, Url, no_candidates,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Schemes the URL parser handles without a factory.
const STANDARD_SCHEMES: &[&str] = &["file", "jar", "http", "https"];

/// A declared virtual entry: the URL text is `prefix` followed by the
/// class-loader relative form of `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSpec {
    prefix: String,
    path: ResourcePath,
}

impl SyntheticSpec {
    /// `prefix` must start with a URL scheme, e.g. `test:` or `mem:/fixtures/`.
    pub fn new(prefix: impl Into<String>, path: ResourcePath) -> Result<Self> {
        let prefix = prefix.into();
        let Some(scheme) = scheme_of(&prefix) else {
            return Err(ResolveError::configuration(format!(
                "synthetic prefix {:?} does not start with a URL scheme",
                prefix
            )));
        };
        // parsed URLs carry a lowercase scheme; the prefix must match them
        let prefix = format!("{}{}", scheme.to_ascii_lowercase(), &prefix[scheme.len()..]);
        Ok(Self { prefix, path })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    pub fn scheme(&self) -> &str {
        scheme_of(&self.prefix).unwrap_or_default()
    }

    pub fn url_text(&self) -> String {
        format!("{}{}", self.prefix, self.path.as_relative())
    }
}

fn scheme_of(prefix: &str) -> Option<&str> {
    let (scheme, _) = prefix.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Serves candidates from a fixed table of [`SyntheticSpec`]s.
///
/// Specs sharing a path all contribute, in declared order.
#[derive(Debug, Clone, Default)]
pub struct SyntheticLocator {
    specs: HashMap<ResourcePath, Vec<SyntheticSpec>>,
    prefixes: Vec<String>,
}

impl SyntheticLocator {
    pub fn new(specs: impl IntoIterator<Item = SyntheticSpec>) -> Self {
        let mut locator = Self::default();
        for spec in specs {
            if !locator.prefixes.iter().any(|p| p == spec.prefix()) {
                locator.prefixes.push(spec.prefix.clone());
            }
            locator
                .specs
                .entry(spec.path.clone())
                .or_default()
                .push(spec);
        }
        locator
    }

    pub fn specs_for(&self, path: &ResourcePath) -> &[SyntheticSpec] {
        self.specs.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    fn build_url(spec: &SyntheticSpec, hints: &Hints) -> Result<Url> {
        let text = spec.url_text();
        let scheme = spec.scheme();

        match hints.scheme_factory() {
            Some(factory) if !STANDARD_SCHEMES.contains(&scheme) => {
                factory.create_url(scheme, &text).map_err(|message| {
                    ResolveError::configuration(format!(
                        "cannot create synthetic URL {:?}: {}",
                        text, message
                    ))
                })
            }
            _ => Url::parse(&text).map_err(|e| ResolveError::malformed_url(text.as_str(), e)),
        }
    }
}

impl Locator for SyntheticLocator {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates> {
        let specs = self.specs_for(path);
        if specs.is_empty() {
            tracer.trace(|| format!("no synthetic entry for {}", path));
            return Ok(no_candidates());
        }

        let candidates = specs
            .iter()
            .map(|spec| Self::build_url(spec, hints).map(Candidate::new))
            .collect::<Result<Vec<_>>>()?;
        tracer.trace(|| format!("{} synthetic entr(ies) for {}", candidates.len(), path));
        Ok(Box::new(candidates.into_iter()))
    }

    fn prefix_strippers(&self, _hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        if self.prefixes.is_empty() {
            return Vec::new();
        }
        vec![Arc::new(SyntheticPrefixStripper::new(self.prefixes.clone()))]
    }
}
