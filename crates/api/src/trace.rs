//! Diagnostic record of resolution decisions.
//!
//! A [`Tracer`] lives for one call. The disabled variant never runs the
//! message closures handed to it, so callers can trace freely:
//!
//! ```
//! use respath_api::Tracer;
//!
//! let tracer = Tracer::recording();
//! tracer.scope("locate", |t| t.trace(|| format!("found {} candidates", 2)));
//! assert_eq!(tracer.entries()[0].scope, "locate");
//! ```

use serde::Serialize;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// Nesting level, 0 for entries outside any scope.
    pub depth: usize,
    /// Innermost scope name, empty outside any scope.
    pub scope: String,
    pub message: String,
}

#[derive(Debug, Default)]
struct TraceLog {
    scopes: Vec<String>,
    entries: Vec<TraceEntry>,
}

#[derive(Debug, Default)]
pub struct Tracer {
    log: Option<RefCell<TraceLog>>,
}

impl Tracer {
    pub fn disabled() -> Self {
        Self { log: None }
    }

    pub fn recording() -> Self {
        Self {
            log: Some(RefCell::new(TraceLog::default())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log.is_some()
    }

    pub fn trace<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        let Some(log) = &self.log else {
            return;
        };

        let message = message();
        let mut log = log.borrow_mut();
        let depth = log.scopes.len();
        let scope = log.scopes.last().cloned().unwrap_or_default();
        tracing::trace!(target: "respath::trace", depth, scope = %scope, "{}", message);
        log.entries.push(TraceEntry {
            depth,
            scope,
            message,
        });
    }

    /// Run `f` as a nested phase named `name`.
    pub fn scope<T>(&self, name: &str, f: impl FnOnce(&Tracer) -> T) -> T {
        let Some(log) = &self.log else {
            return f(self);
        };

        log.borrow_mut().scopes.push(name.to_string());
        let result = f(self);
        log.borrow_mut().scopes.pop();
        result
    }

    pub fn entries(&self) -> Vec<TraceEntry> {
        self.log
            .as_ref()
            .map(|log| log.borrow().entries.clone())
            .unwrap_or_default()
    }

    /// One indented line per entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            out.push_str(&"  ".repeat(entry.depth));
            if !entry.scope.is_empty() {
                out.push_str(&entry.scope);
                out.push_str(": ");
            }
            out.push_str(&entry.message);
            out.push('\n');
        }
        out
    }
}
