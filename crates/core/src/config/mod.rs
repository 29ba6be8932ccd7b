//! Declarative description of a resolution pipeline.
//!
//! The tree mirrors the strategy objects one to one and is turned into a
//! [`crate::ResourceResolver`] by [`ResolverBuilder`]:
//!
//! ```json
//! {
//!   "locator": { "type": "combined", "children": [
//!     { "type": "web_container_web" },
//!     { "type": "class_loader" },
//!     { "type": "synthetic", "specs": [{ "prefix": "test:", "path": "foo" }] }
//!   ]},
//!   "selector": { "type": "highest_component_priority" }
//! }
//! ```

mod builder;

pub use builder::ResolverBuilder;

use crate::url_shape::CLASSES_DIR;
use respath_api::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocatorConfig {
    Combined {
        children: Vec<LocatorConfig>,
    },
    ClassLoader,
    WebContainer {
        #[serde(default = "default_base_dir")]
        base_dir: String,
    },
    WebContainerWeb,
    Synthetic {
        #[serde(default)]
        specs: Vec<SyntheticSpecConfig>,
    },
}

fn default_base_dir() -> String {
    CLASSES_DIR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticSpecConfig {
    pub prefix: String,
    pub path: String,
    /// Declare a web path instead of a plain one.
    #[serde(default)]
    pub web: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectorConfig {
    Combined {
        children: Vec<SelectorConfig>,
    },
    NoOp,
    FirstServletLibrary {
        /// Static library order; taken from the web container when absent.
        #[serde(default)]
        libraries: Option<Vec<String>>,
    },
    HighestComponentPriority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_locator")]
    pub locator: LocatorConfig,
    #[serde(default = "default_selector")]
    pub selector: SelectorConfig,
}

fn default_locator() -> LocatorConfig {
    LocatorConfig::Combined {
        children: vec![
            LocatorConfig::WebContainerWeb,
            LocatorConfig::WebContainer {
                base_dir: default_base_dir(),
            },
            LocatorConfig::ClassLoader,
        ],
    }
}

fn default_selector() -> SelectorConfig {
    SelectorConfig::Combined {
        children: vec![
            SelectorConfig::HighestComponentPriority,
            SelectorConfig::FirstServletLibrary { libraries: None },
        ],
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            locator: default_locator(),
            selector: default_selector(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::InvalidConfig {
            origin: "<inline>".to_string(),
            source: Box::new(e),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ResolveError::InvalidConfig {
            origin: origin.clone(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&content).map_err(|e| ResolveError::InvalidConfig {
            origin,
            source: Box::new(e),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ResolveError::InvalidConfig {
            origin: "<serialize>".to_string(),
            source: Box::new(e),
        })
    }
}
