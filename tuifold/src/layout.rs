use crate::fold::FoldState;
use crate::section::{Page, SectionState};

/// Columns a collapsed section occupies: indicator, title rail, gap.
pub const RAIL_WIDTH: u16 = 3;

/// Rows above the first link inside an expanded panel (header + blank).
pub const LINKS_TOP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Get the center point of this rectangle.
    pub const fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Computed section rectangles, in page order.
///
/// Backed by a `Vec` rather than a map: hit-testing walks sections in
/// page order, and the strip is small enough that a linear scan beats
/// hashing.
#[derive(Debug, Clone, Default)]
pub struct StripLayout {
    slots: Vec<(String, Rect)>,
}

impl StripLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.slots.push((id.into(), rect));
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == id)
            .map(|(_, rect)| *rect)
    }

    /// First row of a section's slot, where the title renders.
    pub fn header(&self, id: &str) -> Option<Rect> {
        self.get(id)
            .map(|rect| Rect::new(rect.x, rect.y, rect.width, rect.height.min(1)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.slots.iter().map(|(id, rect)| (id.as_str(), *rect))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Lays the strip out left to right across `area`.
///
/// Collapsed sections take a fixed [`RAIL_WIDTH`] column; the leftover
/// width is split evenly among expanded sections, with the integer
/// remainder going to the last expanded one. Sections that no longer
/// fit are clamped against the right edge, down to zero width; a
/// zero-width slot draws nothing and never hit-tests.
pub fn strip_layout(page: &Page, fold: &FoldState, area: Rect) -> StripLayout {
    let mut layout = StripLayout::new();
    if area.is_empty() || page.is_empty() {
        return layout;
    }

    // Sections missing from the fold state count as collapsed.
    let expanded = |id: &str| {
        fold.state(id)
            .is_some_and(SectionState::is_expanded)
    };

    let expanded_count = page.ids().filter(|id| expanded(id)).count();
    let collapsed_count = u16::try_from(page.len() - expanded_count).unwrap_or(u16::MAX);
    let rail_total = RAIL_WIDTH.saturating_mul(collapsed_count);
    let remaining = area.width.saturating_sub(rail_total);
    let (panel_width, remainder) = if expanded_count > 0 {
        let panels = u16::try_from(expanded_count).unwrap_or(u16::MAX);
        (remaining / panels, remaining % panels)
    } else {
        (0, 0)
    };

    let mut x = area.x;
    let mut panels_left = expanded_count;
    for id in page.ids() {
        let width = if expanded(id) {
            panels_left -= 1;
            if panels_left == 0 {
                panel_width + remainder
            } else {
                panel_width
            }
        } else {
            RAIL_WIDTH
        };
        let width = width.min(area.right().saturating_sub(x));
        layout.insert(id, Rect::new(x, area.y, width, area.height));
        x += width;
    }
    layout
}

/// Maps a row inside an expanded panel to a link index.
///
/// Rows [`LINKS_TOP`] and below hold one link per row; the header and
/// the blank row under it map to nothing.
pub fn link_at(rect: &Rect, y: u16) -> Option<usize> {
    if y < rect.y + LINKS_TOP || y >= rect.bottom() {
        return None;
    }
    Some((y - rect.y - LINKS_TOP) as usize)
}
