//! Prefix strippers used to turn a resolved URL back into a resource path.
//!
//! Reversal is best effort: it serves diagnostics and link generation, and
//! a URL no rule recognises simply has no logical path.

use crate::url_shape::{PRIVATE_DIR, archive_parts};
use respath_api::{PrefixStripper, ResourcePath};

/// Unwraps `jar:<archive>!/<entry>` to `<entry>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchivePrefixStripper;

impl PrefixStripper for ArchivePrefixStripper {
    fn strip(&self, url: &str) -> Option<ResourcePath> {
        let (_, entry) = archive_parts(url)?;
        ResourcePath::from_relative(entry).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Remainder is a class-loader relative name.
    Relative,
    /// Remainder is a path inside the web application.
    Web,
}

/// Removes one of several base URLs.
#[derive(Debug, Clone)]
pub struct BaseUrlPrefixStripper {
    bases: Vec<String>,
    mode: StripMode,
}

impl BaseUrlPrefixStripper {
    pub fn new(bases: impl IntoIterator<Item = String>, mode: StripMode) -> Self {
        Self {
            bases: bases.into_iter().collect(),
            mode,
        }
    }

    pub fn relative(bases: impl IntoIterator<Item = String>) -> Self {
        Self::new(bases, StripMode::Relative)
    }

    pub fn web(bases: impl IntoIterator<Item = String>) -> Self {
        Self::new(bases, StripMode::Web)
    }

    pub fn bases(&self) -> &[String] {
        &self.bases
    }
}

impl PrefixStripper for BaseUrlPrefixStripper {
    fn strip(&self, url: &str) -> Option<ResourcePath> {
        self.bases.iter().find_map(|base| {
            let rest = url.strip_prefix(base.as_str())?;
            // the base must end on a segment boundary
            let rest = if base.ends_with('/') {
                rest
            } else {
                rest.strip_prefix('/')?
            };
            match self.mode {
                StripMode::Relative => ResourcePath::from_relative(rest).ok(),
                StripMode::Web if is_private(rest) => None,
                StripMode::Web => ResourcePath::of_web_path(rest).ok(),
            }
        })
    }
}

/// Web paths never point into the application's private directory.
fn is_private(rest: &str) -> bool {
    let rest = rest.trim_start_matches('/');
    rest == PRIVATE_DIR
        || rest
            .strip_prefix(PRIVATE_DIR)
            .is_some_and(|tail| tail.starts_with('/'))
}

/// Removes a declared synthetic prefix.
#[derive(Debug, Clone)]
pub struct SyntheticPrefixStripper {
    prefixes: Vec<String>,
}

impl SyntheticPrefixStripper {
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }
}

impl PrefixStripper for SyntheticPrefixStripper {
    fn strip(&self, url: &str) -> Option<ResourcePath> {
        self.prefixes.iter().find_map(|prefix| {
            let rest = url.strip_prefix(prefix.as_str())?;
            ResourcePath::from_relative(rest).ok()
        })
    }
}
