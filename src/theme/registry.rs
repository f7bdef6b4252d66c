//! Theme registry: name → theme, plus the current selection.
//!
//! One registry is shared by every menu in the process (wrap it in an
//! `Arc`). Mutation goes through an internal lock, so last writer wins and
//! readers always see a consistent snapshot.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::{Theme, presets};

#[derive(Default)]
struct Inner {
    themes: HashMap<String, Arc<dyn Theme>>,
    current: Option<Arc<dyn Theme>>,
}

#[derive(Default)]
pub struct ThemeRegistry {
    inner: RwLock<Inner>,
}

impl ThemeRegistry {
    /// Empty registry with no current theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every bundled skin, with `loki` current.
    pub fn with_presets() -> Self {
        let registry = Self::new();
        for skin in presets::ALL {
            registry.register(Arc::new(skin));
        }
        registry.set_current(presets::LOKI.name);
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace by name.
    ///
    /// Replacing the current theme also updates the current reference, so
    /// `current()` never returns an instance the registry no longer holds.
    pub fn register(&self, theme: Arc<dyn Theme>) {
        let name = theme.name().to_string();
        let mut inner = self.write();
        if inner.current.as_ref().is_some_and(|c| c.name() == name) {
            inner.current = Some(Arc::clone(&theme));
        }
        debug!(theme = %name, "registered theme");
        inner.themes.insert(name, theme);
    }

    /// Switch to `name`. Returns false and changes nothing if unknown.
    pub fn set_current(&self, name: &str) -> bool {
        let mut inner = self.write();
        match inner.themes.get(name).cloned() {
            Some(theme) => {
                inner.current = Some(theme);
                debug!(theme = name, "switched theme");
                true
            }
            None => {
                warn!(theme = name, "unknown theme, keeping current");
                false
            }
        }
    }

    /// None only before the first successful [`ThemeRegistry::set_current`].
    pub fn current(&self) -> Option<Arc<dyn Theme>> {
        self.read().current.clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Theme>> {
        self.read().themes.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().themes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().themes.contains_key(name)
    }
}
