//! Polled keyboard table indexed by GLFW key code

/// Number of key slots
pub const KEY_TABLE_SIZE: usize = 1024;

pub const KEY_SPACE: usize = 32;
pub const KEY_A: usize = 65;
pub const KEY_D: usize = 68;
pub const KEY_M: usize = 77;
pub const KEY_N: usize = 78;

/// Currently pressed keys
#[derive(Debug, Clone)]
pub struct KeyState {
    keys: [bool; KEY_TABLE_SIZE],
}

impl Default for KeyState {
    fn default() -> Self {
        Self {
            keys: [false; KEY_TABLE_SIZE],
        }
    }
}

impl KeyState {
    /// Record a key press or release. Codes outside the table are ignored
    /// and reported as `false`.
    pub fn set(&mut self, code: usize, pressed: bool) -> bool {
        match self.keys.get_mut(code) {
            Some(slot) => {
                *slot = pressed;
                true
            }
            None => false,
        }
    }

    pub fn is_pressed(&self, code: usize) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Release every key (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.keys = [false; KEY_TABLE_SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_release() {
        let mut keys = KeyState::default();
        assert!(!keys.is_pressed(KEY_SPACE));
        assert!(keys.set(KEY_SPACE, true));
        assert!(keys.is_pressed(KEY_SPACE));
        keys.set(KEY_SPACE, false);
        assert!(!keys.is_pressed(KEY_SPACE));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut keys = KeyState::default();
        assert!(!keys.set(KEY_TABLE_SIZE, true));
        assert!(!keys.is_pressed(KEY_TABLE_SIZE));
        assert!(!keys.is_pressed(usize::MAX));
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::default();
        keys.set(KEY_A, true);
        keys.set(KEY_D, true);
        keys.clear();
        assert!(!keys.is_pressed(KEY_A) && !keys.is_pressed(KEY_D));
    }
}
