//! Keyboard state and per-tick input snapshots

/// Input as seen by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    /// Space was pressed since the previous snapshot
    pub confirm: bool,
}

impl InputSnapshot {
    pub fn up() -> Self {
        Self {
            up: true,
            ..Self::default()
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }
}

/// Held keys plus a pending confirm press
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    up: bool,
    down: bool,
    confirm_pending: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns whether the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "w" | "W" => self.up = true,
            "ArrowDown" | "s" | "S" => self.down = true,
            " " | "Space" | "Spacebar" => self.confirm_pending = true,
            _ => return false,
        }
        true
    }

    /// Handle key up event. Returns whether the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "w" | "W" => self.up = false,
            "ArrowDown" | "s" | "S" => self.down = false,
            " " | "Space" | "Spacebar" => {}
            _ => return false,
        }
        true
    }

    /// Take a snapshot, consuming the pending confirm press
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            up: self.up,
            down: self.down,
            confirm: self.confirm_pending,
        };
        self.confirm_pending = false;
        snapshot
    }
}
