use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
};
use tuifold::{hit_section, Event, Key, Modifiers, MouseButton, PointerState, Rect, StripLayout};

fn create_layout(slots: &[(&str, Rect)]) -> StripLayout {
    let mut layout = StripLayout::new();
    for (id, rect) in slots {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn strip() -> StripLayout {
    create_layout(&[
        ("work", Rect::new(0, 0, 3, 20)),
        ("code", Rect::new(3, 0, 40, 20)),
        ("news", Rect::new(43, 0, 3, 20)),
    ])
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_section_point_inside() {
    let layout = strip();

    assert_eq!(hit_section(&layout, 1, 5), Some("work"));
    assert_eq!(hit_section(&layout, 10, 10), Some("code"));
    assert_eq!(hit_section(&layout, 44, 0), Some("news"));
}

#[test]
fn test_hit_section_boundaries() {
    let layout = strip();

    // Right edges are exclusive
    assert_eq!(hit_section(&layout, 3, 0), Some("code"));
    assert_eq!(hit_section(&layout, 42, 19), Some("code"));
    assert_eq!(hit_section(&layout, 46, 0), None);
    assert_eq!(hit_section(&layout, 0, 20), None);
}

#[test]
fn test_hit_section_skips_zero_width_slots() {
    let layout = create_layout(&[
        ("visible", Rect::new(0, 0, 10, 5)),
        ("clamped", Rect::new(10, 0, 0, 5)),
    ]);

    assert_eq!(hit_section(&layout, 10, 2), None);
}

// ============================================================================
// Pointer State
// ============================================================================

#[test]
fn test_pointer_move_onto_section() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let events = pointer.process_events(&[mouse(MouseEventKind::Moved, 10, 5)], &layout);

    assert_eq!(
        events,
        vec![
            Event::HoverEnter {
                target: "code".to_string()
            },
            Event::MouseMove { x: 10, y: 5 },
        ]
    );
    assert_eq!(pointer.hovered(), Some("code"));
}

#[test]
fn test_pointer_crossing_emits_exit_before_enter() {
    let layout = strip();
    let mut pointer = PointerState::new();
    pointer.process_events(&[mouse(MouseEventKind::Moved, 1, 5)], &layout);

    let events = pointer.process_events(&[mouse(MouseEventKind::Moved, 10, 5)], &layout);

    assert_eq!(
        events,
        vec![
            Event::HoverExit {
                target: "work".to_string()
            },
            Event::HoverEnter {
                target: "code".to_string()
            },
            Event::MouseMove { x: 10, y: 5 },
        ]
    );
}

#[test]
fn test_pointer_move_within_section_is_quiet() {
    let layout = strip();
    let mut pointer = PointerState::new();
    pointer.process_events(&[mouse(MouseEventKind::Moved, 10, 5)], &layout);

    let events = pointer.process_events(&[mouse(MouseEventKind::Moved, 20, 8)], &layout);

    assert_eq!(events, vec![Event::MouseMove { x: 20, y: 8 }]);
    assert_eq!(pointer.hovered(), Some("code"));
}

#[test]
fn test_pointer_leaving_strip_emits_exit_only() {
    let layout = strip();
    let mut pointer = PointerState::new();
    pointer.process_events(&[mouse(MouseEventKind::Moved, 44, 5)], &layout);

    let events = pointer.process_events(&[mouse(MouseEventKind::Moved, 60, 5)], &layout);

    assert_eq!(
        events,
        vec![
            Event::HoverExit {
                target: "news".to_string()
            },
            Event::MouseMove { x: 60, y: 5 },
        ]
    );
    assert_eq!(pointer.hovered(), None);
}

#[test]
fn test_pointer_click_targets_section() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let events = pointer.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 1, 3)],
        &layout,
    );

    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("work".to_string()),
            x: 1,
            y: 3,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_pointer_click_on_background_has_no_target() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let events = pointer.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 60, 3)],
        &layout,
    );

    assert_eq!(
        events,
        vec![Event::Click {
            target: None,
            x: 60,
            y: 3,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_pointer_key_press() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let events = pointer.process_events(&[raw], &layout);

    assert_eq!(
        events,
        vec![Event::Key {
            key: Key::Char('q'),
            modifiers: Modifiers::NONE,
        }]
    );
}

#[test]
fn test_pointer_ignores_key_release() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let raw = CrosstermEvent::Key(KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    let events = pointer.process_events(&[raw], &layout);

    assert!(events.is_empty());
}

#[test]
fn test_pointer_resize_passthrough() {
    let layout = strip();
    let mut pointer = PointerState::new();

    let events = pointer.process_events(&[CrosstermEvent::Resize(100, 30)], &layout);

    assert_eq!(
        events,
        vec![Event::Resize {
            width: 100,
            height: 30,
        }]
    );
}

// ============================================================================
// Crossterm Conversions
// ============================================================================

#[test]
fn test_key_conversion() {
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Char('x'));
    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::BackTab), Key::BackTab);
    assert_eq!(Key::from(KeyCode::F(5)), Key::F(5));
    // Unsupported keys collapse to the placeholder
    assert_eq!(Key::from(KeyCode::CapsLock), Key::Char('\0'));
}

#[test]
fn test_modifier_conversion() {
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
    assert_eq!(mods, Modifiers::hyper());

    let none = Modifiers::from(KeyModifiers::NONE);
    assert!(none.none());
}

#[test]
fn test_mouse_button_conversion() {
    assert_eq!(MouseButton::from(CtMouseButton::Left), MouseButton::Left);
    assert_eq!(MouseButton::from(CtMouseButton::Right), MouseButton::Right);
    assert_eq!(
        MouseButton::from(CtMouseButton::Middle),
        MouseButton::Middle
    );
}
