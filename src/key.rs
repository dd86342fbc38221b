//! Key bindings for keyboard-driven components.
//!
//! A [`Binding`] groups one or more key presses under a single action and carries
//! the short help text shown to the user. Components expose their bindings through
//! the [`KeyMap`] trait so a host application can render contextual help.
//!
//! ```rust
//! use bubbletea_listbox::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Down, KeyCode::Tab]).with_help("↓/tab", "next");
//! let clear = Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+u", "clear");
//! assert_eq!(next.help().key, "↓/tab");
//! assert!(clear.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held for the press to match.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is currently active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if the key message triggers this binding.
    ///
    /// Shift is ignored for character keys and back-tab since terminals already
    /// report the shifted key.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match msg.key {
                KeyCode::Char(_) | KeyCode::BackTab => {
                    press.modifiers == msg.modifiers.difference(KeyModifiers::SHIFT)
                }
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Implemented by components that expose their key bindings as help.
pub trait KeyMap {
    /// Bindings for the compact, single line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
