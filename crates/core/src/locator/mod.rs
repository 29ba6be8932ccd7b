//! Locate phase: strategies producing candidate URLs for a resource path.
//!
//! ```text
//! CombinedLocator
//!   ├── WebContainerWebLocator   (web paths at the application root)
//!   ├── WebContainerLocator      (below /WEB-INF/classes)
//!   ├── ClassLoaderLocator       (every classpath location)
//!   └── SyntheticLocator         (declared virtual entries)
//! ```

mod class_loader;
mod combined;
mod synthetic;
mod web_container;

pub use class_loader::ClassLoaderLocator;
pub use combined::CombinedLocator;
pub use synthetic::{SyntheticLocator, SyntheticSpec};
pub use web_container::{WebContainerLocator, WebContainerWebLocator};
