//! Per-call context carrying optional collaborators.

use crate::collaborator::{ClassLoader, SyntheticUrlSchemeFactory, WebContainerContext};
use crate::models::PrioritizedComponents;
use std::fmt;
use std::sync::Arc;

/// The closed set of keys a [`Hints`] value can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKey {
    ClassLoader,
    WebContainerContext,
    PrioritizedComponents,
    SyntheticUrlSchemeFactory,
}

/// Immutable hint bag. Cloning only bumps reference counts.
#[derive(Clone, Default)]
pub struct Hints {
    class_loader: Option<Arc<dyn ClassLoader>>,
    web_context: Option<Arc<dyn WebContainerContext>>,
    components: Option<Arc<PrioritizedComponents>>,
    scheme_factory: Option<Arc<dyn SyntheticUrlSchemeFactory>>,
}

impl Hints {
    pub fn builder() -> HintsBuilder {
        HintsBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn class_loader(&self) -> Option<&Arc<dyn ClassLoader>> {
        self.class_loader.as_ref()
    }

    pub fn web_context(&self) -> Option<&Arc<dyn WebContainerContext>> {
        self.web_context.as_ref()
    }

    pub fn components(&self) -> Option<&Arc<PrioritizedComponents>> {
        self.components.as_ref()
    }

    pub fn scheme_factory(&self) -> Option<&Arc<dyn SyntheticUrlSchemeFactory>> {
        self.scheme_factory.as_ref()
    }

    pub fn contains(&self, key: HintKey) -> bool {
        match key {
            HintKey::ClassLoader => self.class_loader.is_some(),
            HintKey::WebContainerContext => self.web_context.is_some(),
            HintKey::PrioritizedComponents => self.components.is_some(),
            HintKey::SyntheticUrlSchemeFactory => self.scheme_factory.is_some(),
        }
    }

    /// Keys with a value, in declaration order.
    pub fn keys(&self) -> Vec<HintKey> {
        [
            HintKey::ClassLoader,
            HintKey::WebContainerContext,
            HintKey::PrioritizedComponents,
            HintKey::SyntheticUrlSchemeFactory,
        ]
        .into_iter()
        .filter(|key| self.contains(*key))
        .collect()
    }
}

impl fmt::Debug for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hints")
            .field("class_loader", &self.class_loader.as_ref().map(|c| c.name()))
            .field("web_context", &self.web_context.is_some())
            .field("components", &self.components.as_ref().map(|c| c.len()))
            .field("scheme_factory", &self.scheme_factory.is_some())
            .finish()
    }
}

#[derive(Default)]
pub struct HintsBuilder {
    hints: Hints,
}

impl HintsBuilder {
    pub fn class_loader(mut self, class_loader: Arc<dyn ClassLoader>) -> Self {
        self.hints.class_loader = Some(class_loader);
        self
    }

    pub fn web_context(mut self, context: Arc<dyn WebContainerContext>) -> Self {
        self.hints.web_context = Some(context);
        self
    }

    pub fn components(mut self, components: PrioritizedComponents) -> Self {
        self.hints.components = Some(Arc::new(components));
        self
    }

    pub fn scheme_factory(mut self, factory: Arc<dyn SyntheticUrlSchemeFactory>) -> Self {
        self.hints.scheme_factory = Some(factory);
        self
    }

    pub fn build(self) -> Hints {
        self.hints
    }
}
