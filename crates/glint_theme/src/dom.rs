//! Document root synchronization
//!
//! The committed theme is published as a single attribute on the root render
//! node. Everything else in the UI styles itself off that attribute.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::theme::Theme;

/// Attribute carrying the committed theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root render node of the document
pub trait RootNode: Send {
    fn set_attribute(&mut self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;
}

#[derive(Default)]
struct RootInner {
    attributes: FxHashMap<String, String>,
    writes: usize,
}

/// Headless root node.
///
/// Clones share the same attributes, so a test or host can observe what the
/// engine wrote.
#[derive(Clone, Default)]
pub struct DocumentRoot {
    inner: Arc<Mutex<RootInner>>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attribute writes performed
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    /// Current theme attribute, if set
    pub fn theme(&self) -> Option<String> {
        self.attribute(THEME_ATTRIBUTE)
    }
}

impl RootNode for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        let mut inner = self.inner.lock();
        inner.attributes.insert(name.to_string(), value.to_string());
        inner.writes += 1;
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.lock().attributes.get(name).cloned()
    }
}

/// Writes the committed theme onto the root node
pub struct DomSynchronizer {
    root: Box<dyn RootNode>,
    applied: Option<Theme>,
}

impl DomSynchronizer {
    pub fn new(root: Box<dyn RootNode>) -> Self {
        Self {
            root,
            applied: None,
        }
    }

    /// Publish `theme`; a repeat of the last applied value writes nothing
    pub fn apply(&mut self, theme: Theme) {
        if self.applied == Some(theme) {
            tracing::trace!(%theme, "root attribute already current");
            return;
        }
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.applied = Some(theme);
        tracing::debug!(%theme, "root attribute updated");
    }

    /// Last theme written to the root
    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }
}
