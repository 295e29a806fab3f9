//! Keyboard input handling

use game_core::KeyState;
use web_sys::KeyboardEvent;

/// Handle key down event. Bound keys have their default action suppressed
/// so arrows and space don't scroll the page.
pub fn handle_key_down(keys: &mut KeyState, event: &KeyboardEvent) -> bool {
    let key = get_key_from_event(event);
    // Auto-repeat must not re-arm the one-shot confirm press
    if event.repeat() && key == " " {
        event.prevent_default();
        return true;
    }
    let bound = keys.key_down(&key);
    if bound {
        event.prevent_default();
    }
    bound
}

/// Handle key up event
pub fn handle_key_up(keys: &mut KeyState, event: &KeyboardEvent) -> bool {
    keys.key_up(&get_key_from_event(event))
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
