use crate::layout::StripLayout;

/// Find the section at the given coordinates.
/// Returns None if no section slot contains the point.
///
/// Slots never overlap, so the first hit in page order is the only
/// one; zero-width slots from a clamped layout can never match.
pub fn hit_section(layout: &StripLayout, x: u16, y: u16) -> Option<&str> {
    layout
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(id, _)| id)
}
