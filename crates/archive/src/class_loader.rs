use crate::{directory_url, file_url, join_relative};
use respath_api::ClassLoader;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;
use walkdir::WalkDir;
use zip::ZipArchive;
use zip::result::ZipError;

/// One element of a class path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPathEntry {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClassPathEntry {
    /// Directories stay directories, anything else is read as a zip archive.
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            ClassPathEntry::Directory(path)
        } else {
            ClassPathEntry::Archive(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ClassPathEntry::Directory(path) | ClassPathEntry::Archive(path) => path,
        }
    }

    fn find(&self, relative: &str) -> io::Result<Option<Url>> {
        match self {
            ClassPathEntry::Directory(dir) => {
                let candidate = join_relative(dir, relative);
                if candidate.is_file() {
                    file_url(&candidate).map(Some)
                } else {
                    Ok(None)
                }
            }
            ClassPathEntry::Archive(archive) => find_in_archive(archive, relative),
        }
    }
}

fn find_in_archive(path: &Path, relative: &str) -> io::Result<Option<Url>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(io::Error::other)?;

    let present = match archive.by_name(relative) {
        Ok(entry) => !entry.is_dir(),
        Err(ZipError::FileNotFound) => false,
        Err(e) => return Err(io::Error::other(e)),
    };
    if !present {
        return Ok(None);
    }

    let text = format!("jar:{}!/{}", file_url(path)?, relative);
    Url::parse(&text)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// A class loader over directories and jar archives with parent-first
/// delegation.
pub struct ArchiveClassLoader {
    name: String,
    entries: Vec<ClassPathEntry>,
    parent: Option<Arc<dyn ClassLoader>>,
}

impl ArchiveClassLoader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Arc<dyn ClassLoader>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn add_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.entries.push(ClassPathEntry::Directory(dir.into()));
        self
    }

    pub fn add_archive(mut self, archive: impl Into<PathBuf>) -> Self {
        self.entries.push(ClassPathEntry::Archive(archive.into()));
        self
    }

    pub fn add_entry(mut self, entry: ClassPathEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append every `*.jar` directly inside `dir`, sorted by file name.
    pub fn add_library_dir(mut self, dir: &Path) -> Self {
        let mut jars: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("jar"))
            .collect();
        jars.sort();
        debug!("Found {} archives in {}", jars.len(), dir.display());

        self.entries
            .extend(jars.into_iter().map(ClassPathEntry::Archive));
        self
    }

    pub fn entries(&self) -> &[ClassPathEntry] {
        &self.entries
    }
}

impl ClassLoader for ArchiveClassLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self, relative: &str) -> io::Result<Vec<Url>> {
        let mut found = match &self.parent {
            Some(parent) => parent.resources(relative)?,
            None => Vec::new(),
        };

        for entry in &self.entries {
            if let Some(url) = entry.find(relative)? {
                trace!("{}: {} found in {}", self.name, relative, entry.path().display());
                found.push(url);
            }
        }
        Ok(found)
    }

    fn roots(&self) -> Vec<Url> {
        let mut roots = self
            .parent
            .as_ref()
            .map(|parent| parent.roots())
            .unwrap_or_default();

        roots.extend(self.entries.iter().filter_map(|entry| match entry {
            ClassPathEntry::Directory(dir) => directory_url(dir).ok(),
            ClassPathEntry::Archive(_) => None,
        }));
        roots
    }
}
