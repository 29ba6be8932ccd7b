use url::Url;

/// A packaged, priority-ranked part of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    archive_url: Url,
    priority: i32,
}

impl Component {
    pub fn new(name: impl Into<String>, archive_url: Url, priority: i32) -> Self {
        Self {
            name: name.into(),
            archive_url,
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the component archive itself, e.g. `file:///lib/mods.jar`.
    pub fn archive_url(&self) -> &Url {
        &self.archive_url
    }

    /// Higher is more preferred.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Prefix every resource URL served from this archive starts with.
    pub fn archive_prefix(&self) -> String {
        format!("jar:{}", self.archive_url)
    }
}

/// Components ordered by descending priority.
///
/// Components sharing a priority keep the order they were supplied in.
#[derive(Debug, Clone, Default)]
pub struct PrioritizedComponents {
    components: Vec<Component>,
}

impl PrioritizedComponents {
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        let mut components: Vec<Component> = components.into_iter().collect();
        components.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { components }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromIterator<Component> for PrioritizedComponents {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PrioritizedComponents {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
