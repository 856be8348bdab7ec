use crate::buffer::{Buffer, Cell, TextStyle};
use crate::fold::FoldState;
use crate::layout::{Rect, StripLayout, LINKS_TOP};
use crate::section::{Page, Section, SectionState};
use crate::text::{char_width, truncate_to_width};
use crate::theme::{Rgb, Theme};

/// Draws the whole strip into `buf`.
///
/// Expanded sections render as panels with a header and one link per
/// row; collapsed sections render as narrow rails with the indicator
/// on top and the title running down. `hovered` names the section
/// under the pointer, which gets the highlight background.
pub fn render_strip(
    page: &Page,
    fold: &FoldState,
    layout: &StripLayout,
    theme: &Theme,
    hovered: Option<&str>,
    buf: &mut Buffer,
) {
    buf.fill(Rect::from_size(buf.width(), buf.height()), theme.background);

    for section in page.sections() {
        let Some(rect) = layout.get(&section.id) else {
            continue;
        };
        if rect.is_empty() {
            continue;
        }
        let hover = hovered == Some(section.id.as_str());
        let expanded = fold
            .state(&section.id)
            .is_some_and(SectionState::is_expanded);
        if expanded {
            render_panel(section, page.expanded_char, rect, hover, theme, buf);
        } else {
            render_rail(section, page.collapsed_char, rect, hover, theme, buf);
        }
    }
}

fn render_panel(
    section: &Section,
    indicator: char,
    rect: Rect,
    hover: bool,
    theme: &Theme,
    buf: &mut Buffer,
) {
    buf.fill(rect, theme.panel);

    // Header row, highlighted while hovered.
    let header_bg = if hover { theme.hover } else { theme.panel };
    buf.fill(Rect::new(rect.x, rect.y, rect.width, 1), header_bg);
    let header = format!("{} {}", indicator, section.title);
    let header = truncate_to_width(&header, rect.width as usize);
    draw_text(
        buf,
        rect.x,
        rect.y,
        rect.right(),
        &header,
        theme.title,
        header_bg,
        TextStyle::new().bold(),
    );

    // One link per row below the blank spacer.
    let label_width = rect.width.saturating_sub(2) as usize;
    for (i, link) in section.links.iter().enumerate() {
        let y = rect.y + LINKS_TOP + i as u16;
        if y >= rect.bottom() {
            break;
        }
        let label = truncate_to_width(&link.label, label_width);
        draw_text(
            buf,
            rect.x + 1,
            y,
            rect.right(),
            &label,
            theme.link,
            theme.panel,
            TextStyle::new().underline(),
        );
    }
}

fn render_rail(
    section: &Section,
    indicator: char,
    rect: Rect,
    hover: bool,
    theme: &Theme,
    buf: &mut Buffer,
) {
    let bg = if hover { theme.hover } else { theme.rail };
    buf.fill(rect, bg);

    let mut text = [0u8; 4];
    draw_text(
        buf,
        rect.x + 1,
        rect.y,
        rect.right(),
        indicator.encode_utf8(&mut text),
        theme.title,
        bg,
        TextStyle::new(),
    );

    // Title runs down the rail, one char per row.
    let dim = TextStyle::new().dim();
    let mut y = rect.y + LINKS_TOP;
    for ch in section.title.chars() {
        if y >= rect.bottom() {
            break;
        }
        if char_width(ch) == 0 {
            continue;
        }
        draw_text(
            buf,
            rect.x + 1,
            y,
            rect.right(),
            ch.encode_utf8(&mut text),
            theme.text,
            bg,
            dim,
        );
        y += 1;
    }
}

/// Writes `text` left to right starting at (x, y), stopping at
/// `max_right`. Wide glyphs get a continuation cell; zero-width chars
/// attach to the previous cell and are skipped.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_right: u16,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) {
    let mut x = x;
    for ch in text.chars() {
        let ch_w = char_width(ch);
        if ch_w == 0 {
            continue;
        }
        if x + ch_w as u16 > max_right {
            break;
        }

        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
        );

        if ch_w == 2 {
            let mut continuation = Cell::new(' ').with_fg(fg).with_bg(bg).with_style(style);
            continuation.wide_continuation = true;
            buf.set(x + 1, y, continuation);
        }

        x += ch_w as u16;
    }
}
