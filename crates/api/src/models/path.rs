use std::fmt;
use std::sync::Arc;

/// Directory inside library archives that holds web resources.
pub const WEB_RESOURCES_DIR: &str = "META-INF/resources";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPathError {
    #[error("resource path is empty")]
    Empty,
    #[error("resource path {path:?} contains illegal character {character:?}")]
    IllegalCharacter { path: String, character: char },
    #[error("resource path {path:?} contains traversal segment {segment:?}")]
    Traversal { path: String, segment: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathKind {
    /// Resolved against class loaders and the container's classes directory.
    Plain,
    /// Rooted at the web application, e.g. `/css/site.css`.
    Web,
}

/// Normalized logical resource path.
///
/// The stored form never starts or ends with a slash and contains no empty,
/// `.` or `..` segments. Two paths are equal only if both the normalized
/// text and the [`PathKind`] match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath {
    path: Arc<str>,
    kind: PathKind,
}

impl ResourcePath {
    /// Create a plain resource path, e.g. `config/messages.properties`.
    pub fn of_path(raw: &str) -> Result<Self, InvalidPathError> {
        Ok(Self {
            path: normalize(raw)?.into(),
            kind: PathKind::Plain,
        })
    }

    /// Create a web path, e.g. `/css/site.css`.
    pub fn of_web_path(raw: &str) -> Result<Self, InvalidPathError> {
        Ok(Self {
            path: normalize(raw)?.into(),
            kind: PathKind::Web,
        })
    }

    /// Parse a class-loader relative form as produced by [`Self::as_relative`].
    ///
    /// Anything below [`WEB_RESOURCES_DIR`] becomes a web path again.
    pub fn from_relative(raw: &str) -> Result<Self, InvalidPathError> {
        let normalized = normalize(raw)?;
        let web = normalized
            .strip_prefix(WEB_RESOURCES_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty());

        Ok(match web {
            Some(rest) => Self {
                path: rest.into(),
                kind: PathKind::Web,
            },
            None => Self {
                path: normalized.into(),
                kind: PathKind::Plain,
            },
        })
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn is_web(&self) -> bool {
        self.kind == PathKind::Web
    }

    /// The normalized text without any leading slash.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Form used to query class loaders.
    pub fn as_relative(&self) -> String {
        match self.kind {
            PathKind::Plain => self.path.to_string(),
            PathKind::Web => format!("{}/{}", WEB_RESOURCES_DIR, self.path),
        }
    }

    pub fn as_absolute(&self) -> String {
        format!("/{}", self.as_relative())
    }

    /// Path inside the web application, only defined for web paths.
    pub fn as_web_path(&self) -> Option<String> {
        match self.kind {
            PathKind::Plain => None,
            PathKind::Web => Some(format!("/{}", self.path)),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PathKind::Plain => write!(f, "/{}", self.path),
            PathKind::Web => write!(f, "web:/{}", self.path),
        }
    }
}

fn is_illegal(c: char) -> bool {
    c == '\\' || c == ':' || c.is_control()
}

fn normalize(raw: &str) -> Result<String, InvalidPathError> {
    if let Some(character) = raw.chars().find(|c| is_illegal(*c)) {
        return Err(InvalidPathError::IllegalCharacter {
            path: raw.to_string(),
            character,
        });
    }

    let mut segments = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" => continue,
            "." | ".." => {
                return Err(InvalidPathError::Traversal {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                });
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(InvalidPathError::Empty);
    }
    Ok(segments.join("/"))
}
