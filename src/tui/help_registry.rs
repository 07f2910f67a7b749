//! Help registry for centralized keybinding definitions.
//!
//! Bindings are loaded from an embedded TOML file and queried by context for
//! the status bar and the help overlay.

use serde::Deserialize;
use std::collections::HashMap;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("help.toml");

/// A single keybinding definition
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (optional)
    pub hint: Option<String>,
    /// Priority for display order (lower = more important, shown first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// Description of when this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

/// Help registry providing access to keybinding definitions
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

impl HelpRegistry {
    /// Load the help registry from the embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        let help_file: HelpFile = toml::from_str(HELP_TOML)?;
        Ok(Self {
            meta: help_file.meta,
            contexts: help_file.contexts,
        })
    }

    /// Get the app name from metadata
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.meta.app_name
    }

    /// Get a context by name
    #[must_use]
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Get all bindings for a context, sorted by priority
    #[must_use]
    pub fn get_bindings(&self, context_name: &str) -> Vec<&Binding> {
        let mut bindings: Vec<&Binding> = self
            .contexts
            .get(context_name)
            .map(|context| context.bindings.iter().collect())
            .unwrap_or_default();
        bindings.sort_by_key(|b| b.priority);
        bindings
    }

    /// Format a binding for display in the help overlay.
    /// Returns (`keys_string`, `action_string`)
    #[must_use]
    pub fn format_binding_for_help(binding: &Binding) -> (String, String) {
        let keys = if binding.alt_keys.is_empty() {
            binding.keys.join("/")
        } else {
            format!(
                "{} ({})",
                binding.keys.join("/"),
                binding.alt_keys.join("/")
            )
        };
        (keys, binding.action.clone())
    }

    /// Status bar hints for the given contexts, in context order then priority.
    ///
    /// Returns at most `max_hints` (key, hint) pairs.
    #[must_use]
    pub fn format_status_bar_hints(
        &self,
        context_names: &[&str],
        max_hints: usize,
    ) -> Vec<(String, String)> {
        context_names
            .iter()
            .flat_map(|name| self.get_bindings(name))
            .filter_map(|b| {
                let hint = b.hint.as_deref()?;
                let key = b.keys.join("/");
                Some((key, hint.to_string()))
            })
            .take(max_hints)
            .collect()
    }
}

/// Known context names
pub mod contexts {
    /// Section picker screen
    pub const SECTIONS: &str = "sections";
    /// Section list screen
    pub const LIST: &str = "list";
    /// Record detail screen
    pub const DETAIL: &str = "detail";
    /// Architecture page
    pub const ARCHITECTURE: &str = "architecture";
    /// Consent banner
    pub const CONSENT: &str = "consent";
    /// Keys available everywhere
    pub const GLOBAL: &str = "global";

    /// Order in which the help overlay lists contexts
    pub const HELP_ORDER: [&str; 6] = [SECTIONS, LIST, DETAIL, ARCHITECTURE, CONSENT, GLOBAL];
}
