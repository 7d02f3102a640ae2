//! Input intent tracking with a velocity-intent model.
//!
//! Raw window events are mapped to semantic `Action`s by the game crate;
//! this module only records what the player currently wants:
//!
//! - **Horizontal:** `move_x` holds the signed speed the body should move at.
//!   The last direction pressed wins. Releasing a direction only zeroes
//!   `move_x` when the current sign matches that direction, so releasing one
//!   key never cancels motion the other (still-held) key caused.
//!
//! - **Vertical:** jump and fast-fall presses are queued in press order and
//!   consumed once per frame by the physics step. Order matters: a fast-fall
//!   after a jump in the same frame overrides it, exactly as if the events
//!   had been applied one at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    FastFall,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalIntent {
    Jump,
    FastFall,
}

#[derive(Debug, Clone)]
pub struct InputState {
    move_speed: f32,
    pub move_x: f32,
    vertical: Vec<VerticalIntent>,
    pub quit: bool,
}

impl InputState {
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            move_x: 0.0,
            vertical: Vec::new(),
            quit: false,
        }
    }

    pub fn action_pressed(&mut self, action: Action) {
        match action {
            Action::Left => self.move_x = -self.move_speed,
            Action::Right => self.move_x = self.move_speed,
            Action::Jump => self.vertical.push(VerticalIntent::Jump),
            Action::FastFall => self.vertical.push(VerticalIntent::FastFall),
            Action::Quit => self.quit = true,
        }
    }

    pub fn action_released(&mut self, action: Action) {
        match action {
            Action::Left if self.move_x < 0.0 => self.move_x = 0.0,
            Action::Right if self.move_x > 0.0 => self.move_x = 0.0,
            // Releases carry no meaning for the remaining actions.
            _ => {}
        }
    }

    /// Drain the vertical intents queued since the last frame, in press order.
    pub fn take_vertical(&mut self) -> Vec<VerticalIntent> {
        std::mem::take(&mut self.vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 300.0;

    #[test]
    fn test_press_left_sets_negative_speed() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Left);
        assert_eq!(input.move_x, -SPEED);
    }

    #[test]
    fn test_press_right_sets_positive_speed() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Right);
        assert_eq!(input.move_x, SPEED);
    }

    #[test]
    fn test_last_direction_pressed_wins() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Left);
        input.action_pressed(Action::Right);
        assert_eq!(input.move_x, SPEED);
        input.action_pressed(Action::Left);
        assert_eq!(input.move_x, -SPEED);
    }

    #[test]
    fn test_release_only_zeroes_matching_direction() {
        let mut input = InputState::new(SPEED);
        // Hold left, then right: right won, so releasing left must not stop us.
        input.action_pressed(Action::Left);
        input.action_pressed(Action::Right);
        input.action_released(Action::Left);
        assert_eq!(input.move_x, SPEED);

        input.action_released(Action::Right);
        assert_eq!(input.move_x, 0.0);
    }

    #[test]
    fn test_release_while_moving_opposite_is_no_op() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Right);
        input.action_released(Action::Left);
        assert_eq!(input.move_x, SPEED);
    }

    #[test]
    fn test_release_without_press_is_no_op() {
        let mut input = InputState::new(SPEED);
        input.action_released(Action::Left);
        input.action_released(Action::Right);
        assert_eq!(input.move_x, 0.0);
    }

    #[test]
    fn test_vertical_intents_queue_in_press_order() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Jump);
        input.action_pressed(Action::FastFall);
        input.action_pressed(Action::Jump);
        assert_eq!(
            input.take_vertical(),
            vec![
                VerticalIntent::Jump,
                VerticalIntent::FastFall,
                VerticalIntent::Jump
            ]
        );
    }

    #[test]
    fn test_take_vertical_drains_queue() {
        let mut input = InputState::new(SPEED);
        input.action_pressed(Action::Jump);
        assert_eq!(input.take_vertical().len(), 1);
        assert!(input.take_vertical().is_empty());
    }

    #[test]
    fn test_vertical_releases_are_no_ops() {
        let mut input = InputState::new(SPEED);
        input.action_released(Action::Jump);
        input.action_released(Action::FastFall);
        assert!(input.take_vertical().is_empty());
    }

    #[test]
    fn test_quit_flag_is_sticky() {
        let mut input = InputState::new(SPEED);
        assert!(!input.quit);
        input.action_pressed(Action::Quit);
        assert!(input.quit);
        input.action_released(Action::Quit);
        assert!(input.quit);
    }
}
