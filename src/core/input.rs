//! Held-key flags and one-shot triggers fed into the scheduler.

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// One-shot; cleared once the tick consumes it.
    pub jump: bool,
    /// One-shot; cleared once the tick consumes it.
    pub fire: bool,
}

impl InputState {
    /// (right, forward) axis in [-1, 1] before normalization.
    pub fn move_axis(&self) -> (f32, f32) {
        let x = self.right as i32 as f32 - self.left as i32 as f32;
        let z = self.forward as i32 as f32 - self.backward as i32 as f32;
        (x, z)
    }

    pub fn clear_triggers(&mut self) {
        self.jump = false;
        self.fire = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let input = InputState { forward: true, backward: true, right: true, ..Default::default() };
        assert_eq!(input.move_axis(), (1.0, 0.0));
    }
}
