//! Builds the strategy tree described by a [`ResolverConfig`].

use super::{LocatorConfig, ResolverConfig, SelectorConfig, SyntheticSpecConfig};
use crate::locator::{
    ClassLoaderLocator, CombinedLocator, SyntheticLocator, SyntheticSpec, WebContainerLocator,
    WebContainerWebLocator,
};
use crate::resolver::ResourceResolver;
use crate::selector::{
    CombinedSelector, FirstServletLibraryResourceSelector, HighestComponentPrioritySelector,
    NoOpSelector, Selector,
};
use respath_api::{CandidateFilter, Locator, ResolveError, ResourcePath, Result};
use std::sync::Arc;
use tracing::debug;

/// Turns configuration into a ready [`ResourceResolver`].
pub struct ResolverBuilder {
    config: ResolverConfig,
    filter: Option<Arc<dyn CandidateFilter>>,
}

impl ResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            filter: None,
        }
    }

    /// Plug in the external filter phase
    pub fn with_filter(mut self, filter: Arc<dyn CandidateFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(self) -> Result<ResourceResolver> {
        let locator = build_locator(&self.config.locator)?;
        let selector = build_selector(&self.config.selector)?;
        debug!(
            "Built resolver with locator {} and selector {}",
            locator.name(),
            selector.name()
        );

        let resolver = ResourceResolver::new(locator, selector);
        Ok(match self.filter {
            Some(filter) => resolver.with_filter(filter),
            None => resolver,
        })
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

pub fn build_locator(config: &LocatorConfig) -> Result<Arc<dyn Locator>> {
    Ok(match config {
        LocatorConfig::Combined { children } => {
            if children.is_empty() {
                return Err(ResolveError::configuration(
                    "combined locator needs at least one child",
                ));
            }
            let locators = children
                .iter()
                .map(build_locator)
                .collect::<Result<Vec<_>>>()?;
            Arc::new(CombinedLocator::new(locators))
        }
        LocatorConfig::ClassLoader => Arc::new(ClassLoaderLocator::new()),
        LocatorConfig::WebContainer { base_dir } => {
            Arc::new(WebContainerLocator::with_base_dir(base_dir)?)
        }
        LocatorConfig::WebContainerWeb => Arc::new(WebContainerWebLocator::new()),
        LocatorConfig::Synthetic { specs } => {
            let specs = specs
                .iter()
                .map(build_spec)
                .collect::<Result<Vec<_>>>()?;
            Arc::new(SyntheticLocator::new(specs))
        }
    })
}

fn build_spec(config: &SyntheticSpecConfig) -> Result<SyntheticSpec> {
    let path = if config.web {
        ResourcePath::of_web_path(&config.path)?
    } else {
        ResourcePath::of_path(&config.path)?
    };
    SyntheticSpec::new(config.prefix.as_str(), path)
}

pub fn build_selector(config: &SelectorConfig) -> Result<Selector> {
    Ok(match config {
        SelectorConfig::Combined { children } => {
            if children.is_empty() {
                return Err(ResolveError::configuration(
                    "combined selector needs at least one child",
                ));
            }
            let selectors = children
                .iter()
                .map(build_selector)
                .collect::<Result<Vec<_>>>()?;
            Selector::new(CombinedSelector::new(selectors))
        }
        SelectorConfig::NoOp => Selector::new(NoOpSelector),
        SelectorConfig::FirstServletLibrary { libraries } => match libraries {
            Some(libraries) => Selector::new(FirstServletLibraryResourceSelector::with_libraries(
                libraries.iter().cloned(),
            )),
            None => Selector::new(FirstServletLibraryResourceSelector::new()),
        },
        SelectorConfig::HighestComponentPriority => {
            Selector::new(HighestComponentPrioritySelector::new())
        }
    })
}
