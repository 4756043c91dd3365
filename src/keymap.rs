use galaxy_core::LayoutMode;

/// Digits 1-6 select a layout in button order.
#[inline]
pub fn layout_for_key(key: &str) -> Option<LayoutMode> {
    match key {
        "1" => Some(LayoutMode::Sphere),
        "2" => Some(LayoutMode::Helix),
        "3" => Some(LayoutMode::Random),
        "4" => Some(LayoutMode::Heart),
        "5" => Some(LayoutMode::Donut),
        "6" => Some(LayoutMode::Wave),
        _ => None,
    }
}

#[inline]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
