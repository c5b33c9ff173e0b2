//! Button press edge detection

/// Turns a polled button level into one-shot press events
///
/// A press fires once on the released→pressed transition; holding the
/// button does not repeat it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressDetector {
    was_pressed: bool,
}

impl PressDetector {
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Feed the current level; returns true on a new press
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        fired
    }

    pub fn is_held(&self) -> bool {
        self.was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut p = PressDetector::new();
        assert!(!p.update(false));
        assert!(p.update(true));
        assert!(!p.update(true));
        assert!(!p.update(true));
        assert!(p.is_held());
        assert!(!p.update(false));
        assert!(p.update(true));
    }

    #[test]
    fn test_held_at_boot_fires() {
        let mut p = PressDetector::new();
        assert!(p.update(true));
    }
}
