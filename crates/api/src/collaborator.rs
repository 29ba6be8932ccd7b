//! Boundaries to the environment a resolution runs in.
//!
//! Implementations are supplied per call through [`crate::Hints`]; none of
//! them are required. Filesystem-backed versions live in `respath-archive`.

use std::io;
use url::Url;

/// An enumerable resource search path, e.g. the classpath of an application.
pub trait ClassLoader: Send + Sync {
    /// Name for logging and traces.
    fn name(&self) -> &str;

    /// Every location this loader knows for `relative`, in its own precedence order.
    fn resources(&self, relative: &str) -> io::Result<Vec<Url>>;

    /// Base locations relative resource names are resolved against.
    fn roots(&self) -> Vec<Url> {
        Vec::new()
    }
}

/// Single-resource lookups inside a deployed web application.
pub trait WebContainerContext: Send + Sync {
    /// Native URL text of the resource at `path` (absolute within the application).
    fn resource(&self, path: &str) -> io::Result<Option<String>>;

    /// Native URL text of the directory at `path`, if the container can tell.
    fn base_url(&self, _path: &str) -> Option<String> {
        None
    }

    /// Archive file names from the library directory, highest precedence first.
    fn ordered_libraries(&self) -> Option<Vec<String>> {
        None
    }
}

/// Builds URLs for the non-standard schemes used by synthetic entries.
pub trait SyntheticUrlSchemeFactory: Send + Sync {
    fn create_url(&self, scheme: &str, text: &str) -> Result<Url, String>;
}
