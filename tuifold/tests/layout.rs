use tuifold::{
    link_at, strip_layout, FoldState, HoverFold, Page, Rect, Section, LINKS_TOP, RAIL_WIDTH,
};

fn four_sections() -> Page {
    Page::new()
        .section(Section::new("a", "Alpha"))
        .section(Section::new("b", "Beta"))
        .section(Section::new("c", "Gamma"))
        .section(Section::new("d", "Delta"))
}

// ============================================================================
// Strip Layout
// ============================================================================

#[test]
fn test_all_collapsed_rails() {
    let page = four_sections();
    let fold = FoldState::new(&page, HoverFold::Disabled);

    let layout = strip_layout(&page, &fold, Rect::from_size(80, 24));

    assert_eq!(layout.len(), 4);
    for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
        let rect = layout.get(id).unwrap();
        assert_eq!(rect.x, i as u16 * RAIL_WIDTH);
        assert_eq!(rect.width, RAIL_WIDTH);
        assert_eq!(rect.height, 24);
    }
}

#[test]
fn test_expanded_section_takes_leftover_width() {
    let page = four_sections();
    let mut fold = FoldState::new(&page, HoverFold::Disabled);
    fold.click("b");

    let layout = strip_layout(&page, &fold, Rect::from_size(80, 24));

    let b = layout.get("b").unwrap();
    assert_eq!(b.x, RAIL_WIDTH, "panel starts after the first rail");
    assert_eq!(b.width, 80 - 3 * RAIL_WIDTH, "panel takes all leftover width");

    let c = layout.get("c").unwrap();
    assert_eq!(c.x, b.right(), "rails continue after the panel");
    assert_eq!(c.width, RAIL_WIDTH);
}

#[test]
fn test_two_expanded_split_with_remainder_to_last() {
    let page = four_sections();
    let mut fold = FoldState::new(&page, HoverFold::Enabled);
    fold.hover_enter("a");
    fold.hover_enter("d");

    // 81 - 2 rails = 75 leftover, split 37/38
    let layout = strip_layout(&page, &fold, Rect::from_size(81, 24));

    assert_eq!(layout.get("a").unwrap().width, 37);
    assert_eq!(layout.get("d").unwrap().width, 38);
    assert_eq!(layout.get("d").unwrap().right(), 81, "strip fills the area");
}

#[test]
fn test_slots_tile_without_gaps() {
    let page = four_sections();
    let mut fold = FoldState::new(&page, HoverFold::Enabled);
    fold.hover_enter("b");
    fold.hover_enter("c");

    let layout = strip_layout(&page, &fold, Rect::from_size(64, 16));

    let mut x = 0;
    for (_, rect) in layout.iter() {
        assert_eq!(rect.x, x);
        x = rect.right();
    }
    assert_eq!(x, 64);
}

#[test]
fn test_narrow_area_clamps_overflowing_sections() {
    let page = four_sections();
    let fold = FoldState::new(&page, HoverFold::Disabled);

    // Room for two rails and a sliver of the third
    let layout = strip_layout(&page, &fold, Rect::from_size(7, 24));

    assert_eq!(layout.get("a").unwrap().width, RAIL_WIDTH);
    assert_eq!(layout.get("b").unwrap().width, RAIL_WIDTH);
    assert_eq!(layout.get("c").unwrap().width, 1);
    assert_eq!(layout.get("d").unwrap().width, 0);
}

#[test]
fn test_empty_inputs() {
    let page = four_sections();
    let fold = FoldState::new(&page, HoverFold::Disabled);

    assert!(strip_layout(&page, &fold, Rect::from_size(0, 24)).is_empty());
    assert!(strip_layout(&page, &fold, Rect::from_size(80, 0)).is_empty());

    let empty = Page::new();
    let empty_fold = FoldState::new(&empty, HoverFold::Disabled);
    assert!(strip_layout(&empty, &empty_fold, Rect::from_size(80, 24)).is_empty());
}

#[test]
fn test_layout_respects_area_origin() {
    let page = four_sections();
    let mut fold = FoldState::new(&page, HoverFold::Disabled);
    fold.click("a");

    let layout = strip_layout(&page, &fold, Rect::new(5, 2, 60, 20));

    let a = layout.get("a").unwrap();
    assert_eq!((a.x, a.y), (5, 2));
    assert_eq!(a.height, 20);
}

#[test]
fn test_header_is_first_slot_row() {
    let page = four_sections();
    let mut fold = FoldState::new(&page, HoverFold::Disabled);
    fold.click("b");

    let layout = strip_layout(&page, &fold, Rect::new(0, 3, 80, 21));

    let header = layout.header("b").unwrap();
    let slot = layout.get("b").unwrap();
    assert_eq!(header, Rect::new(slot.x, 3, slot.width, 1));
    assert!(layout.header("missing").is_none());
}

#[test]
fn test_huge_page_clamps_to_zero_width() {
    // 22k rails want 66_000 columns, more than any u16 width
    let mut page = Page::new();
    for i in 0..22_000 {
        page = page.section(Section::new(format!("s{i}"), "S"));
    }
    let fold = FoldState::new(&page, HoverFold::Disabled);

    let layout = strip_layout(&page, &fold, Rect::from_size(80, 24));

    assert_eq!(layout.len(), 22_000);
    assert_eq!(layout.get("s0").unwrap().width, RAIL_WIDTH);
    assert_eq!(layout.get("s21999").unwrap().width, 0);
}

// ============================================================================
// Link Rows
// ============================================================================

#[test]
fn test_link_at_maps_rows_below_header() {
    let rect = Rect::new(10, 0, 30, 10);

    // Header and spacer rows hold no links
    assert_eq!(link_at(&rect, 0), None);
    assert_eq!(link_at(&rect, 1), None);

    assert_eq!(link_at(&rect, LINKS_TOP), Some(0));
    assert_eq!(link_at(&rect, LINKS_TOP + 3), Some(3));
    assert_eq!(link_at(&rect, 9), Some(7));
    assert_eq!(link_at(&rect, 10), None, "below the panel");
}

#[test]
fn test_link_at_offset_panel() {
    let rect = Rect::new(0, 4, 30, 6);

    assert_eq!(link_at(&rect, 4), None);
    assert_eq!(link_at(&rect, 4 + LINKS_TOP), Some(0));
    assert_eq!(link_at(&rect, 9), Some(3));
    assert_eq!(link_at(&rect, 3), None, "above the panel");
}

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_rect_contains() {
    let rect = Rect::new(2, 3, 4, 5);

    assert!(rect.contains(2, 3));
    assert!(rect.contains(5, 7));
    assert!(!rect.contains(6, 3), "right edge is exclusive");
    assert!(!rect.contains(2, 8), "bottom edge is exclusive");
    assert!(!rect.contains(1, 3));
}

#[test]
fn test_rect_shrink_saturates() {
    let rect = Rect::new(0, 0, 4, 4);

    let shrunk = rect.shrink(1, 1, 1, 1);
    assert_eq!(shrunk, Rect::new(1, 1, 2, 2));

    let gone = rect.shrink(3, 3, 3, 3);
    assert!(gone.is_empty());
}
