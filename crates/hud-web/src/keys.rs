// Keyboard shortcuts for the dashboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleLegend,
    HideLegend,
    ResetDemo,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "i" | "I" => Some(KeyAction::ToggleLegend),
        "Escape" => Some(KeyAction::HideLegend),
        "r" | "R" => Some(KeyAction::ResetDemo),
        _ => None,
    }
}
