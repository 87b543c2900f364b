//! Theme state for the editor shell.
//!
//! The manager is an owned piece of application state: the host constructs
//! one instance and hands it to whichever components need it. External
//! listeners (status bar, canvas background, minimap) register a handler and
//! receive every mode change until they drop their subscription handle.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual theme of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Handle for a registered theme listener.
///
/// Uniquely identifies a subscription. Pass it back to
/// [`ThemeManager::unsubscribe`] to stop receiving changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeSubscriptionId(Uuid);

impl ThemeSubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ThemeSubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ThemeSub({})", &self.0.to_string()[..8])
    }
}

type ThemeHandler = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// Owned theme state with explicit change subscriptions.
pub struct ThemeManager {
    mode: RwLock<ThemeMode>,
    /// When set, `system_theme_changed` is applied; explicit `set_mode`
    /// calls turn it off.
    follow_system: RwLock<bool>,
    handlers: Arc<RwLock<HashMap<ThemeSubscriptionId, ThemeHandler>>>,
}

impl ThemeManager {
    /// Creates a manager starting in the given mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwLock::new(mode),
            follow_system: RwLock::new(true),
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Whether OS theme changes are currently applied.
    pub fn follows_system(&self) -> bool {
        *self.follow_system.read()
    }

    /// Sets the mode explicitly and stops following the system theme.
    /// Notifies subscribers if the mode actually changed.
    pub fn set_mode(&self, mode: ThemeMode) {
        *self.follow_system.write() = false;
        self.apply(mode);
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        self.set_mode(self.mode().toggled());
    }

    /// Re-enables following the system theme.
    pub fn follow_system(&self, current_system_mode: ThemeMode) {
        *self.follow_system.write() = true;
        self.apply(current_system_mode);
    }

    /// Entry point for the host's OS theme-change notification. Ignored
    /// while the user has picked a mode explicitly.
    pub fn system_theme_changed(&self, mode: ThemeMode) {
        if *self.follow_system.read() {
            self.apply(mode);
        }
    }

    /// Registers a change handler. The handler runs on the thread that
    /// triggered the change, so it should return quickly.
    pub fn subscribe<F>(&self, handler: F) -> ThemeSubscriptionId
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let id = ThemeSubscriptionId::new();
        self.handlers.write().insert(id, Box::new(handler));
        tracing::debug!("theme subscription {} added", id);
        id
    }

    /// Removes a change handler. Returns true if it was registered.
    pub fn unsubscribe(&self, id: ThemeSubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("theme subscription {} removed", id);
        }
        removed
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    fn apply(&self, mode: ThemeMode) {
        {
            let mut current = self.mode.write();
            if *current == mode {
                return;
            }
            *current = mode;
        }
        for handler in self.handlers.read().values() {
            handler(mode);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("mode", &self.mode())
            .field("follow_system", &self.follows_system())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
