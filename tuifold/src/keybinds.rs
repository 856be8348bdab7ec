use std::collections::HashMap;

use thiserror::Error;

use crate::event::{Key, Modifiers};
use crate::section::Page;

/// Hint characters assigned to sections without an explicit hint, in
/// home-row order.
pub const DEFAULT_HINTS: &str = "asdfghjkl";

#[derive(Debug, Error)]
pub enum KeybindError {
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
    #[error("empty modifier spec")]
    EmptySpec,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// What a bound key does to the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to the next section, wrapping.
    NextSection,
    /// Move the cursor to the previous section, wrapping.
    PrevSection,
    /// Click the cursor section.
    ToggleSection,
    /// Click the section at this page index.
    JumpSection(usize),
    /// Collapse the whole strip.
    CollapseAll,
    /// Open the link at this index in the cursor section.
    OpenLink(usize),
    Quit,
}

/// Key combo to action map.
#[derive(Debug, Clone, Default)]
pub struct Keybinds {
    binds: HashMap<KeyCombo, Action>,
}

impl Keybinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard strip bindings: arrows and Tab cycle sections,
    /// Enter and space toggle, Escape collapses everything, digits
    /// open links, q quits.
    pub fn strip_defaults() -> Self {
        let mut binds = Self::new();
        binds.bind(KeyCombo::key(Key::Left), Action::PrevSection);
        binds.bind(KeyCombo::key(Key::Up), Action::PrevSection);
        binds.bind(KeyCombo::key(Key::BackTab), Action::PrevSection);
        binds.bind(KeyCombo::key(Key::Right), Action::NextSection);
        binds.bind(KeyCombo::key(Key::Down), Action::NextSection);
        binds.bind(KeyCombo::key(Key::Tab), Action::NextSection);
        binds.bind(KeyCombo::key(Key::Enter), Action::ToggleSection);
        binds.bind(KeyCombo::key(Key::Char(' ')), Action::ToggleSection);
        binds.bind(KeyCombo::key(Key::Escape), Action::CollapseAll);
        binds.bind(KeyCombo::key(Key::Char('q')), Action::Quit);
        for digit in 1..=9u32 {
            let c = char::from_digit(digit, 10).unwrap_or('0');
            binds.bind(KeyCombo::key(Key::Char(c)), Action::OpenLink(digit as usize - 1));
        }
        binds
    }

    /// Add a binding, replacing any existing one for the same combo.
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        self.binds.insert(combo, action);
    }

    /// Binds a jump chord for every section of `page`, falling back to
    /// [`DEFAULT_HINTS`].
    pub fn bind_hints(&mut self, hyper: Modifiers, page: &Page) {
        self.bind_hints_from(hyper, page, DEFAULT_HINTS);
    }

    /// Binds a jump chord for every section of `page`.
    ///
    /// A section's own hint char wins; sections without one take the
    /// `hints` char at their page index. Pages longer than the hint row
    /// leave the tail sections unbound.
    pub fn bind_hints_from(&mut self, hyper: Modifiers, page: &Page, hints: &str) {
        let mut fallback = hints.chars();
        for (index, section) in page.sections().iter().enumerate() {
            let positional = fallback.next();
            let Some(hint) = section.hint.or(positional) else {
                log::debug!("[keybinds] no hint left for section {:?}", section.id);
                continue;
            };
            self.bind(KeyCombo::new(Key::Char(hint), hyper), Action::JumpSection(index));
        }
    }

    pub fn lookup(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        self.binds.get(&KeyCombo::new(key, modifiers)).copied()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}

/// Parses a modifier spec like `"ctrl,alt,shift"` or `"ctrl+shift"`.
pub fn parse_modifiers(spec: &str) -> Result<Modifiers, KeybindError> {
    let mut modifiers = Modifiers::NONE;
    for token in spec.split([',', '+']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "alt" | "opt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            _ => return Err(KeybindError::UnknownModifier(token.to_string())),
        }
    }
    if modifiers.none() {
        return Err(KeybindError::EmptySpec);
    }
    Ok(modifiers)
}
