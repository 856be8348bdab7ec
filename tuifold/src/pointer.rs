use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::event::Event;
use crate::hit::hit_section;
use crate::layout::StripLayout;

/// Tracks which section is under the pointer and processes events.
#[derive(Debug, Default)]
pub struct PointerState {
    hovered: Option<String>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the section currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Crossing a section boundary emits the exit for the old section
    /// before the enter for the new one, so a consumer never sees two
    /// sections hovered at once.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], layout: &StripLayout) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    events.push(Event::Key {
                        key: key_event.code.into(),
                        modifiers: key_event.modifiers.into(),
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    match mouse_event.kind {
                        MouseEventKind::Down(button) => {
                            let target = hit_section(layout, x, y).map(str::to_owned);
                            events.push(Event::Click {
                                target,
                                x,
                                y,
                                button: button.into(),
                            });
                        }

                        MouseEventKind::Moved => {
                            let target = hit_section(layout, x, y);
                            if self.hovered.as_deref() != target {
                                log::debug!(
                                    "[pointer] hover {:?} -> {:?}",
                                    self.hovered,
                                    target
                                );
                                if let Some(old) = self.hovered.take() {
                                    events.push(Event::HoverExit { target: old });
                                }
                                if let Some(target) = target {
                                    self.hovered = Some(target.to_owned());
                                    events.push(Event::HoverEnter {
                                        target: target.to_owned(),
                                    });
                                }
                            }

                            events.push(Event::MouseMove { x, y });
                        }

                        _ => {}
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}
