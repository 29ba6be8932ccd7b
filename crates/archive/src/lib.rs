//! Filesystem-backed collaborators for the resolver.
//!
//! [`ArchiveClassLoader`] enumerates resources over directories and jar
//! archives; [`DirectoryWebContext`] serves an exploded web application.

mod class_loader;
mod web_context;

pub use class_loader::{ArchiveClassLoader, ClassPathEntry};
pub use web_context::DirectoryWebContext;

use std::io;
use std::path::Path;
use url::Url;

pub(crate) fn file_url(path: &Path) -> io::Result<Url> {
    Url::from_file_path(path).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not an absolute path", path.display()),
        )
    })
}

pub(crate) fn directory_url(path: &Path) -> io::Result<Url> {
    Url::from_directory_path(path).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not an absolute path", path.display()),
        )
    })
}

/// Join a `/`-separated relative resource name onto `base`.
pub(crate) fn join_relative(base: &Path, relative: &str) -> std::path::PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}
