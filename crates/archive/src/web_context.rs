use crate::{directory_url, file_url, join_relative};
use respath_api::WebContainerContext;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const LIBRARY_DIR: &str = "WEB-INF/lib";

/// An exploded web application on disk.
#[derive(Debug, Clone)]
pub struct DirectoryWebContext {
    root: PathBuf,
    libraries: Option<Vec<String>>,
}

impl DirectoryWebContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            libraries: None,
        }
    }

    /// Fix the library precedence instead of listing `WEB-INF/lib`.
    pub fn with_libraries(mut self, libraries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.libraries = Some(libraries.into_iter().map(Into::into).collect());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan_libraries(&self) -> Option<Vec<String>> {
        let lib_dir = self.root.join(LIBRARY_DIR);
        if !lib_dir.is_dir() {
            return None;
        }

        let mut names: Vec<String> = WalkDir::new(&lib_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| name.ends_with(".jar"))
            .collect();
        names.sort();
        Some(names)
    }
}

impl WebContainerContext for DirectoryWebContext {
    fn resource(&self, path: &str) -> io::Result<Option<String>> {
        let candidate = join_relative(&self.root, path);
        if !candidate.is_file() {
            return Ok(None);
        }
        Ok(Some(file_url(&candidate)?.to_string()))
    }

    fn base_url(&self, path: &str) -> Option<String> {
        let dir = join_relative(&self.root, path);
        if !dir.is_dir() {
            return None;
        }
        directory_url(&dir).ok().map(|url| url.to_string())
    }

    fn ordered_libraries(&self) -> Option<Vec<String>> {
        self.libraries.clone().or_else(|| self.scan_libraries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn webapp() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("WEB-INF/classes/conf")).unwrap();
        std::fs::create_dir_all(root.join("WEB-INF/lib")).unwrap();
        std::fs::create_dir_all(root.join("css")).unwrap();
        std::fs::write(root.join("WEB-INF/classes/conf/app.properties"), "x").unwrap();
        std::fs::write(root.join("css/site.css"), "x").unwrap();
        std::fs::write(root.join("WEB-INF/lib/zeta.jar"), "x").unwrap();
        std::fs::write(root.join("WEB-INF/lib/alpha.jar"), "x").unwrap();
        std::fs::write(root.join("WEB-INF/lib/README"), "x").unwrap();
        dir
    }

    #[test]
    fn test_resource_lookup() {
        let dir = webapp();
        let context = DirectoryWebContext::new(dir.path());

        let found = context
            .resource("/WEB-INF/classes/conf/app.properties")
            .unwrap()
            .unwrap();
        assert!(found.starts_with("file:///"));
        assert!(found.ends_with("/WEB-INF/classes/conf/app.properties"));

        assert_eq!(context.resource("/css/missing.css").unwrap(), None);
        assert_eq!(context.resource("/css").unwrap(), None);
    }

    #[test]
    fn test_base_url_has_trailing_slash() {
        let dir = webapp();
        let context = DirectoryWebContext::new(dir.path());

        let base = context.base_url("/WEB-INF/classes/").unwrap();
        assert!(base.ends_with("/WEB-INF/classes/"));
        assert!(context.base_url("/").unwrap().ends_with('/'));
        assert_eq!(context.base_url("/nope/"), None);
    }

    #[test]
    fn test_library_order() {
        let dir = webapp();
        let scanned = DirectoryWebContext::new(dir.path());
        assert_eq!(
            scanned.ordered_libraries(),
            Some(vec!["alpha.jar".to_string(), "zeta.jar".to_string()])
        );

        let fixed = DirectoryWebContext::new(dir.path()).with_libraries(["zeta.jar", "alpha.jar"]);
        assert_eq!(
            fixed.ordered_libraries(),
            Some(vec!["zeta.jar".to_string(), "alpha.jar".to_string()])
        );

        let empty = tempdir().unwrap();
        assert_eq!(DirectoryWebContext::new(empty.path()).ordered_libraries(), None);
    }
}
