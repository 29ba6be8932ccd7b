use crate::stripper::BaseUrlPrefixStripper;
use crate::url_shape::CLASSES_DIR;
use respath_api::{
    Candidate, Candidates, Hints, Locator, PrefixStripper, ResolveError, ResourcePath, Result,
    Tracer, Url, WebContainerContext, no_candidates,
};
use std::sync::Arc;
use tracing::debug;

/// Looks a path up below a directory of the web application, by default
/// the classes directory.
#[derive(Debug, Clone)]
pub struct WebContainerLocator {
    base_dir: String,
}

impl WebContainerLocator {
    pub fn new() -> Self {
        Self {
            base_dir: CLASSES_DIR.to_string(),
        }
    }

    /// `base_dir` is absolute within the application; `/` means the root.
    pub fn with_base_dir(base_dir: &str) -> Result<Self> {
        let trimmed = base_dir.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self {
                base_dir: String::new(),
            });
        }
        if !base_dir.starts_with('/') {
            return Err(ResolveError::configuration(format!(
                "web container base directory {:?} must start with '/'",
                base_dir
            )));
        }
        let normalized = ResourcePath::of_path(trimmed)?;
        Ok(Self {
            base_dir: format!("/{}", normalized.as_str()),
        })
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }
}

impl Default for WebContainerLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator for WebContainerLocator {
    fn name(&self) -> &str {
        "web-container"
    }

    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates> {
        let Some(context) = hints.web_context() else {
            tracer.trace(|| "no web container context hinted".to_string());
            return Ok(no_candidates());
        };
        let lookup = format!("{}{}", self.base_dir, path.as_absolute());
        lookup_single(context.as_ref(), &lookup, path, self.name(), tracer)
    }

    fn prefix_strippers(&self, hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        let dir = format!("{}/", self.base_dir);
        base_url_stripper(hints, &dir, |bases| BaseUrlPrefixStripper::relative(bases))
    }
}

/// Looks web paths up at the root of the web application.
///
/// Plain paths are not eligible and yield nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebContainerWebLocator;

impl WebContainerWebLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Locator for WebContainerWebLocator {
    fn name(&self) -> &str {
        "web-container-web"
    }

    fn locate(&self, path: &ResourcePath, hints: &Hints, tracer: &Tracer) -> Result<Candidates> {
        let Some(web_path) = path.as_web_path() else {
            tracer.trace(|| format!("{} is not a web path", path));
            return Ok(no_candidates());
        };
        let Some(context) = hints.web_context() else {
            tracer.trace(|| "no web container context hinted".to_string());
            return Ok(no_candidates());
        };
        lookup_single(context.as_ref(), &web_path, path, self.name(), tracer)
    }

    fn prefix_strippers(&self, hints: &Hints) -> Vec<Arc<dyn PrefixStripper>> {
        base_url_stripper(hints, "/", |bases| BaseUrlPrefixStripper::web(bases))
    }
}

fn lookup_single(
    context: &dyn WebContainerContext,
    lookup: &str,
    path: &ResourcePath,
    locator: &str,
    tracer: &Tracer,
) -> Result<Candidates> {
    let native = context
        .resource(lookup)
        .map_err(|e| ResolveError::lookup(path, locator, e))?;

    let Some(text) = native else {
        tracer.trace(|| format!("{} not found", lookup));
        return Ok(no_candidates());
    };

    let url = Url::parse(&text).map_err(|e| ResolveError::malformed_url(text.as_str(), e))?;
    debug!("Web container resolved {} to {}", lookup, url);
    tracer.trace(|| format!("{} resolved to {}", lookup, url));
    Ok(Box::new(std::iter::once(Candidate::new(url))))
}

fn base_url_stripper(
    hints: &Hints,
    dir: &str,
    make: fn(Vec<String>) -> BaseUrlPrefixStripper,
) -> Vec<Arc<dyn PrefixStripper>> {
    hints
        .web_context()
        .and_then(|context| context.base_url(dir))
        .map(|base| Arc::new(make(vec![base])) as Arc<dyn PrefixStripper>)
        .into_iter()
        .collect()
}
