use std::io;

use tuifold::{
    link_at, parse_modifiers, Action, Event, FoldState, Key, Keybinds, Modifiers, Page,
    PointerState, SectionState, StripLayout, Terminal, Theme,
};

use crate::config::StartpageConfig;

/// Whether the main loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Top-level application state: the page model, its fold state, pointer
/// tracking and key bindings, glued to the terminal loop.
pub struct App {
    page: Page,
    fold: FoldState,
    pointer: PointerState,
    keybinds: Keybinds,
    theme: Theme,
    /// Page index the keyboard acts on. Follows the pointer.
    cursor: usize,
}

impl App {
    pub fn new(config: &StartpageConfig) -> Self {
        let page = config.page();
        let fold = FoldState::new(&page, config.hover());

        let hyper = parse_modifiers(&config.page.hyper).unwrap_or_else(|err| {
            log::warn!(
                "[app] bad hyper spec {:?} ({err}), using ctrl,alt,shift",
                config.page.hyper
            );
            Modifiers::hyper()
        });
        let mut keybinds = Keybinds::strip_defaults();
        keybinds.bind_hints_from(hyper, &page, &config.page.hints);

        Self {
            page,
            fold,
            pointer: PointerState::new(),
            keybinds,
            theme: config.theme(),
            cursor: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut term = Terminal::new()?;
        log::debug!("[app] started with {} sections", self.page.len());

        loop {
            term.draw(&self.page, &self.fold, &self.theme, self.pointer.hovered())?;

            let raw = term.poll(None)?;
            let events = self.pointer.process_events(&raw, term.layout());
            if self.handle_events(&events, term.layout()) == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Applies a batch of input events to the fold state and cursor.
    fn handle_events(&mut self, events: &[Event], layout: &StripLayout) -> Flow {
        for event in events {
            match event {
                Event::HoverEnter { target } => {
                    if let Some(index) = self.page.index_of(target) {
                        self.cursor = index;
                    }
                    self.fold.hover_enter(target);
                }
                Event::HoverExit { target } => {
                    self.fold.hover_exit(target);
                }
                Event::Click {
                    target: Some(target),
                    y,
                    ..
                } => {
                    self.click(target, *y, layout);
                }
                Event::Key { key, modifiers } => {
                    if self.handle_key(*key, *modifiers) == Flow::Quit {
                        return Flow::Quit;
                    }
                }
                _ => {}
            }
        }
        Flow::Continue
    }

    /// A click on a section. When it lands on a link row of an expanded
    /// section the link opens first; either way the click then folds
    /// the strip, so opening a link also closes its section.
    fn click(&mut self, target: &str, y: u16, layout: &StripLayout) {
        if let Some(index) = self.page.index_of(target) {
            self.cursor = index;
        }

        let expanded = self
            .fold
            .state(target)
            .is_some_and(SectionState::is_expanded);
        if expanded {
            if let Some(rect) = layout.get(target) {
                if let Some(link_index) = link_at(&rect, y) {
                    self.open_link(target, link_index);
                }
            }
        }
        self.fold.click(target);
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Flow {
        // Ctrl+C always quits, bound or not.
        if key == Key::Char('c') && modifiers.ctrl {
            return Flow::Quit;
        }
        let Some(action) = self.keybinds.lookup(key, modifiers) else {
            return Flow::Continue;
        };
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::NextSection => {
                if !self.page.is_empty() {
                    self.cursor = (self.cursor + 1) % self.page.len();
                }
            }
            Action::PrevSection => {
                if !self.page.is_empty() {
                    self.cursor = (self.cursor + self.page.len() - 1) % self.page.len();
                }
            }
            Action::ToggleSection => self.click_index(self.cursor),
            Action::JumpSection(index) => {
                if index < self.page.len() {
                    self.cursor = index;
                    self.click_index(index);
                }
            }
            Action::CollapseAll => {
                self.fold.collapse_all();
            }
            Action::OpenLink(index) => self.open_cursor_link(index),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Clicks the section at a page index.
    fn click_index(&mut self, index: usize) {
        let Some(section) = self.page.sections().get(index) else {
            return;
        };
        self.fold.click(&section.id);
    }

    /// Opens a link of the cursor section. Link keys only act on an
    /// expanded section so hidden links cannot be opened blind.
    fn open_cursor_link(&self, index: usize) {
        let Some(section) = self.page.sections().get(self.cursor) else {
            return;
        };
        if !self
            .fold
            .state(&section.id)
            .is_some_and(SectionState::is_expanded)
        {
            log::debug!("[app] link key on collapsed section {:?}", section.id);
            return;
        }
        self.open_link(&section.id, index);
    }

    fn open_link(&self, id: &str, index: usize) {
        let Some(section) = self.page.get(id) else {
            return;
        };
        let Some(link) = section.links.get(index) else {
            log::debug!("[app] no link {index} in section {id:?}");
            return;
        };
        log::info!("[app] opening {}", link.url);
        let _ = open::that(&link.url);
    }
}
