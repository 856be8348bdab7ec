pub mod buffer;
pub mod event;
pub mod fold;
pub mod hit;
pub mod keybinds;
pub mod layout;
pub mod pointer;
pub mod render;
pub mod section;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell, TextStyle};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use fold::{FoldState, HoverFold};
pub use hit::hit_section;
pub use keybinds::{parse_modifiers, Action, KeyCombo, KeybindError, Keybinds, DEFAULT_HINTS};
pub use layout::{link_at, strip_layout, Rect, StripLayout, LINKS_TOP, RAIL_WIDTH};
pub use pointer::PointerState;
pub use render::render_strip;
pub use section::{Link, Page, Section, SectionState};
pub use terminal::Terminal;
pub use theme::{lighten, Palette, Rgb, Theme, ThemeError};
