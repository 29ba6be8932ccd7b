//! Resource resolution pipeline.
//!
//! A [`ResourceResolver`] locates every physical candidate for a logical
//! [`respath_api::ResourcePath`], lets an external filter drop some of them,
//! and selects the preferred subset. It can also map a resolved URL back to
//! its logical path.

pub mod config;
pub mod locator;
pub mod logging;
pub mod resolver;
pub mod selector;
pub mod stripper;
pub mod url_shape;

pub use config::{LocatorConfig, ResolverBuilder, ResolverConfig, SelectorConfig};
pub use resolver::{PassThroughFilter, ResourceResolver};
pub use selector::Selector;
