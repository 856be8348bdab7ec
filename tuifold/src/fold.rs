use std::collections::HashMap;

use crate::event::Event;
use crate::section::{Page, SectionState};

/// Whether pointer hover may fold sections.
///
/// Chosen once at [`FoldState::new`] time. There is no default:
/// construction always names the capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverFold {
    /// Hover events are ignored; only clicks change fold state.
    Disabled,
    /// Hover enter expands, hover exit collapses.
    Enabled,
}

impl HoverFold {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Caller-owned fold state for every section on a page.
///
/// Tracks one [`SectionState`] per section id. All mutation goes
/// through [`click`](Self::click), [`hover_enter`](Self::hover_enter),
/// [`hover_exit`](Self::hover_exit) and
/// [`collapse_all`](Self::collapse_all); each reports whether anything
/// changed so the caller knows when to redraw.
///
/// The click rule keeps at most one section expanded: every click
/// first collapses the whole strip, then re-expands the clicked
/// section only if it was collapsed when the click landed. Clicking an
/// expanded section therefore closes it without opening anything else.
/// Hover folding acts on single sections and does not collapse
/// siblings, so the one-expanded guarantee holds after clicks, not
/// between hover moves.
#[derive(Debug, Clone)]
pub struct FoldState {
    states: HashMap<String, SectionState>,
    /// Page order, for ordered iteration over a HashMap.
    order: Vec<String>,
    hover: HoverFold,
}

impl FoldState {
    /// Registers every section of `page`, all collapsed.
    pub fn new(page: &Page, hover: HoverFold) -> Self {
        let order: Vec<String> = page.ids().map(str::to_owned).collect();
        let states = order
            .iter()
            .map(|id| (id.clone(), SectionState::Collapsed))
            .collect();
        Self {
            states,
            order,
            hover,
        }
    }

    pub fn hover_fold(&self) -> HoverFold {
        self.hover
    }

    /// Applies the click rule to `id`. Returns `true` if any section
    /// changed state.
    ///
    /// The previous state of the target is read before the strip is
    /// collapsed; swapping those two steps would re-expand every
    /// clicked section and lose the close-on-second-click behavior.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(state) = self.states.get(id) else {
            log::debug!("[fold] click on unknown section {id:?}");
            return false;
        };
        let was_collapsed = state.is_collapsed();
        let mut changed = self.collapse_all();
        if was_collapsed {
            changed |= self.set(id, SectionState::Expanded);
        }
        log::debug!(
            "[fold] click {id:?} was_collapsed={was_collapsed} changed={changed}"
        );
        changed
    }

    /// Expands `id` in place. No-op unless hover folding is enabled;
    /// never touches siblings. Returns `true` on a state change.
    pub fn hover_enter(&mut self, id: &str) -> bool {
        if !self.hover.is_enabled() {
            return false;
        }
        let changed = self.set(id, SectionState::Expanded);
        if changed {
            log::debug!("[fold] hover expand {id:?}");
        }
        changed
    }

    /// Collapses `id` in place. No-op unless hover folding is enabled.
    ///
    /// Collapses unconditionally, including sections the user opened
    /// by click: moving the pointer off a section always folds it.
    pub fn hover_exit(&mut self, id: &str) -> bool {
        if !self.hover.is_enabled() {
            return false;
        }
        let changed = self.set(id, SectionState::Collapsed);
        if changed {
            log::debug!("[fold] hover collapse {id:?}");
        }
        changed
    }

    /// Restores the initial all-collapsed state. Returns `true` if any
    /// section was expanded.
    pub fn reset(&mut self) -> bool {
        let changed = self.collapse_all();
        if changed {
            log::debug!("[fold] reset");
        }
        changed
    }

    /// Collapses every section. Returns `true` if any was expanded.
    pub fn collapse_all(&mut self) -> bool {
        let mut changed = false;
        for state in self.states.values_mut() {
            if state.is_expanded() {
                *state = SectionState::Collapsed;
                changed = true;
            }
        }
        changed
    }

    /// State of one section; `None` for unregistered ids.
    pub fn state(&self, id: &str) -> Option<SectionState> {
        self.states.get(id).copied()
    }

    /// `true` when `id` is registered and collapsed.
    pub fn is_collapsed(&self, id: &str) -> bool {
        self.state(id).is_some_and(SectionState::is_collapsed)
    }

    /// Ids of currently expanded sections, in page order.
    pub fn expanded(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| self.states[*id].is_expanded())
            .map(String::as_str)
            .collect()
    }

    /// Registered ids in page order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Folds the strip according to a batch of input events. Returns
    /// `true` if any section changed state, i.e. the caller should
    /// redraw.
    ///
    /// [`Event::Click`] with no target collapses nothing: clicks on
    /// empty background are deliberate no-ops here so the app layer
    /// can decide what background clicks mean.
    pub fn process_events(&mut self, events: &[Event]) -> bool {
        let mut changed = false;
        for event in events {
            match event {
                Event::HoverEnter { target } => {
                    changed |= self.hover_enter(target);
                }
                Event::HoverExit { target } => {
                    changed |= self.hover_exit(target);
                }
                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    changed |= self.click(target);
                }
                _ => {}
            }
        }
        changed
    }

    fn set(&mut self, id: &str, state: SectionState) -> bool {
        match self.states.get_mut(id) {
            Some(current) if *current != state => {
                *current = state;
                true
            }
            _ => false,
        }
    }
}
