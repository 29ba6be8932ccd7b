use crate::stripper::{ArchivePrefixStripper, BaseUrlPrefixStripper};
use respath_api::{
    Candidate, Candidates, Hints, Locator, PrefixStripper, ResolveError, ResourcePath, Result,
    Tracer, no_candidates,
};
use std::sync::Arc;
use tracing::debug;

/// Asks the hinted [`respath_api::ClassLoader`] for every location of a path.
///
/// The loader's own enumeration order is kept; parent/child precedence is its concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassLoaderLocator;

impl ClassLoaderLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Locator for ClassLoaderLocator {
    fn name(&self) -> &str {
        "class-loader"
    }

    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates> {
        let Some(loader) = hints.class_loader() else {
            tracer.trace(|| "no class loader hinted".to_string());
            return Ok(no_candidates());
        };

        let relative = path.as_relative();
        let urls = loader
            .resources(&relative)
            .map_err(|e| ResolveError::lookup(path, self.name(), e))?;

        debug!(
            "Class loader {} has {} location(s) for {}",
            loader.name(),
            urls.len(),
            relative
        );
        tracer.trace(|| {
            format!(
                "{} resolved {} location(s) for {}",
                loader.name(),
                urls.len(),
                relative
            )
        });

        Ok(Box::new(urls.into_iter().map(Candidate::new)))
    }

    fn prefix_strippers(&self, hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        let Some(loader) = hints.class_loader() else {
            return Vec::new();
        };

        let mut strippers: Vec<Arc<dyn PrefixStripper>> = vec![Arc::new(ArchivePrefixStripper)];
        let roots: Vec<String> = loader.roots().into_iter().map(String::from).collect();
        if !roots.is_empty() {
            strippers.push(Arc::new(BaseUrlPrefixStripper::relative(roots)));
        }
        strippers
    }
}
