//! Textual URL shapes the selectors and strippers recognise.
//!
//! Provenance of a candidate is not stored anywhere; it is read back from
//! the URL text. Encoded separators inside the URL defeat these checks.

/// Scheme prefix of URLs pointing into an archive.
pub const ARCHIVE_SCHEME: &str = "jar:";
/// Separates the archive location from the entry inside it.
pub const ARCHIVE_SEPARATOR: &str = "!/";
/// Library directory of a web application.
pub const LIBRARY_DIR: &str = "/WEB-INF/lib/";
/// Private directory of a web application, never served as a web path.
pub const PRIVATE_DIR: &str = "WEB-INF";
/// Classes directory of a web application.
pub const CLASSES_DIR: &str = "/WEB-INF/classes";

/// Split `jar:<archive>!/<entry>` into `(archive, entry)`.
pub fn archive_parts(url: &str) -> Option<(&str, &str)> {
    url.strip_prefix(ARCHIVE_SCHEME)?
        .split_once(ARCHIVE_SEPARATOR)
}

/// Whether `url` is an entry of the library `library` in the library directory.
pub fn is_library_entry(url: &str, library: &str) -> bool {
    let Some((archive, _)) = archive_parts(url) else {
        return false;
    };
    archive
        .strip_suffix(library)
        .is_some_and(|head| head.ends_with(LIBRARY_DIR))
}

/// Whether `url` is an entry of the archive whose URL is `archive_prefix`.
pub fn is_archive_entry(url: &str, archive_prefix: &str) -> bool {
    url.strip_prefix(archive_prefix)
        .is_some_and(|rest| rest.starts_with(ARCHIVE_SEPARATOR))
}
