//! Kinematic body integration for the single player character.
//!
//! Each frame the body consumes the accumulated input intent, then advances
//! under constant gravity using the elapsed wall-clock time:
//!
//! ```text
//! candidate = position + velocity*dt + acc*0.5*dt^2
//! velocity' = velocity + acc*dt
//! ```
//!
//! Collision is floor-only. When the candidate position would sink below the
//! floor line, the body is pinned to it, vertical velocity is zeroed, and the
//! jump charges refill. Horizontal motion is never blocked.

use glam::Vec2;

use crate::input::{InputState, VerticalIntent};

#[derive(Debug, Clone, Copy)]
pub struct PhysicsConfig {
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Apex height of a full jump, in pixels.
    pub jump_height: f32,
    /// Time to reach the apex, in seconds.
    pub jump_duration: f32,
    pub max_jumps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            move_speed: 300.0,
            player_width: 100.0,
            player_height: 150.0,
            jump_height: 100.0,
            jump_duration: 0.25,
            max_jumps: 3,
        }
    }
}

impl PhysicsConfig {
    /// Launch velocity that reaches `jump_height` in `jump_duration`.
    pub fn jump_speed(&self) -> f32 {
        2.0 * self.jump_height / self.jump_duration
    }

    /// Downward acceleration matched to the jump parameters.
    pub fn gravity(&self) -> f32 {
        -2.0 * self.jump_height / (self.jump_duration * self.jump_duration)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub jumps: u32,
}

impl KinematicBody {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            jumps: config.max_jumps,
        }
    }

    /// Fold the frame's input intent into the body's velocity.
    ///
    /// Vertical intents replay in press order. Charges cannot change between
    /// two events of the same frame (integration runs after the drain), so a
    /// jump press is charged against the count it saw at press time.
    pub fn apply_intent(&mut self, input: &mut InputState, config: &PhysicsConfig) {
        self.velocity.x = input.move_x;

        for intent in input.take_vertical() {
            match intent {
                VerticalIntent::Jump => {
                    if self.jumps > 0 {
                        self.velocity.y = config.jump_speed();
                        self.jumps -= 1;
                    }
                }
                // Fast-fall is a free override, not an impulse on top.
                VerticalIntent::FastFall => {
                    self.velocity.y = -2.0 * config.jump_speed();
                }
            }
        }
    }

    /// Advance the body by `dt` seconds against the floor of a screen
    /// `screen_height` pixels tall (origin at screen center).
    pub fn integrate(&mut self, dt: f32, screen_height: f32, config: &PhysicsConfig) {
        let acc = Vec2::new(0.0, config.gravity());
        let candidate = self.position + self.velocity * dt + acc * (0.5 * dt * dt);
        self.velocity += acc * dt;

        let bottom = screen_height * -0.5 + config.player_height * 0.5;
        if candidate.y < bottom {
            // Landing: keep the horizontal part of the move, pin the vertical.
            self.position.x = candidate.x;
            self.position.y = bottom;
            self.velocity.y = 0.0;
            self.jumps = config.max_jumps;
        } else {
            self.position = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;

    const SCREEN_HEIGHT: f32 = 1080.0;
    const DT: f32 = 1.0 / 60.0;

    fn floor_y(config: &PhysicsConfig) -> f32 {
        SCREEN_HEIGHT * -0.5 + config.player_height * 0.5
    }

    #[test]
    fn test_gravity_pulls_body_down_from_rest() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        body.integrate(DT, SCREEN_HEIGHT, &config);
        assert!(body.position.y < 0.0);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_floor_clamp_pins_y_and_refills_jumps() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        body.position = Vec2::new(10.0, floor_y(&config) + 1.0);
        body.velocity = Vec2::new(120.0, -500.0);
        body.jumps = 0;

        body.integrate(DT, SCREEN_HEIGHT, &config);

        assert_eq!(body.position.y, floor_y(&config));
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.jumps, config.max_jumps);
        // Horizontal motion is never blocked by the floor.
        assert!(body.position.x > 10.0);
    }

    #[test]
    fn test_resting_body_stays_on_floor() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        body.position.y = floor_y(&config);

        for _ in 0..600 {
            body.integrate(DT, SCREEN_HEIGHT, &config);
        }
        assert_eq!(body.position.y, floor_y(&config));
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_jump_consumes_one_charge_and_launches() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        let mut input = InputState::new(config.move_speed);

        input.action_pressed(Action::Jump);
        body.apply_intent(&mut input, &config);

        assert_eq!(body.velocity.y, config.jump_speed());
        assert_eq!(body.jumps, config.max_jumps - 1);
    }

    #[test]
    fn test_triple_jump_exhausts_charges_and_fourth_is_inert() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        let mut input = InputState::new(config.move_speed);

        for _ in 0..3 {
            input.action_pressed(Action::Jump);
            body.apply_intent(&mut input, &config);
            body.integrate(DT, SCREEN_HEIGHT, &config);
            assert!(body.position.y > floor_y(&config), "must stay airborne");
        }
        assert_eq!(body.jumps, 0);

        let velocity_before = body.velocity;
        input.action_pressed(Action::Jump);
        body.apply_intent(&mut input, &config);
        assert_eq!(body.velocity, velocity_before);
        assert_eq!(body.jumps, 0);
    }

    #[test]
    fn test_jumps_never_exceed_max_over_press_land_cycles() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        let mut input = InputState::new(config.move_speed);
        body.position.y = floor_y(&config);

        for round in 0..20 {
            for _ in 0..(round % 5) {
                input.action_pressed(Action::Jump);
            }
            body.apply_intent(&mut input, &config);
            body.integrate(DT, SCREEN_HEIGHT, &config);
            assert!(body.jumps <= config.max_jumps);

            // Slam back down to refill before the next round.
            input.action_pressed(Action::FastFall);
            body.apply_intent(&mut input, &config);
            for _ in 0..120 {
                body.integrate(DT, SCREEN_HEIGHT, &config);
            }
            assert_eq!(body.jumps, config.max_jumps);
        }
    }

    #[test]
    fn test_fast_fall_overrides_upward_velocity_for_free() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        let mut input = InputState::new(config.move_speed);

        input.action_pressed(Action::Jump);
        input.action_pressed(Action::FastFall);
        body.apply_intent(&mut input, &config);

        assert_eq!(body.velocity.y, -2.0 * config.jump_speed());
        // The jump still consumed a charge; fast-fall cost nothing further.
        assert_eq!(body.jumps, config.max_jumps - 1);
    }

    #[test]
    fn test_fast_fall_then_jump_leaves_jump_velocity() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        let mut input = InputState::new(config.move_speed);

        input.action_pressed(Action::FastFall);
        input.action_pressed(Action::Jump);
        body.apply_intent(&mut input, &config);

        assert_eq!(body.velocity.y, config.jump_speed());
    }

    #[test]
    fn test_known_airborne_step() {
        // jump_height 250 / duration 0.25 gives launch 2000 px/s and
        // gravity -8000 px/s^2.
        let config = PhysicsConfig {
            jump_height: 250.0,
            jump_duration: 0.25,
            ..PhysicsConfig::default()
        };
        assert!((config.jump_speed() - 2000.0).abs() < 1e-3);
        assert!((config.gravity() + 8000.0).abs() < 1e-2);

        let mut body = KinematicBody::new(&config);
        body.velocity = Vec2::new(0.0, 2000.0);

        body.integrate(DT, SCREEN_HEIGHT, &config);

        // y = 2000/60 - 0.5*8000/3600, well above the floor at -465.
        let expected_y = 2000.0 * DT + 0.5 * -8000.0 * DT * DT;
        assert!((body.position.y - expected_y).abs() < 1e-3);
        assert!((body.velocity.y - (2000.0 - 8000.0 * DT)).abs() < 1e-2);
        assert!(body.position.y > floor_y(&config));
    }

    #[test]
    fn test_zero_dt_is_a_no_op_on_position() {
        let config = PhysicsConfig::default();
        let mut body = KinematicBody::new(&config);
        body.position = Vec2::new(5.0, 40.0);
        body.velocity = Vec2::new(100.0, 100.0);

        body.integrate(0.0, SCREEN_HEIGHT, &config);
        assert_eq!(body.position, Vec2::new(5.0, 40.0));
        assert_eq!(body.velocity, Vec2::new(100.0, 100.0));
    }
}
