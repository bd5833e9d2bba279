//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one step, in a fixed order:
//! control -> physics/collisions -> scoring -> phase check.
//! Every mutation of a tick completes before it returns.

use serde::{Deserialize, Serialize};

use super::collision::step_physics;
use super::control::{Signal, apply_controls};
use super::round::{count_down, resolve_round};
use super::scoring::check_scoring;
use super::signs::SignSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction for the player paddle
    pub player: Signal,
}

impl TickInput {
    pub fn new(player: Signal) -> Self {
        Self { player }
    }
}

/// Advance the game state by one tick. Returns what happened.
///
/// Does nothing once the match is over.
pub fn tick(state: &mut GameState, input: &TickInput, signs: &mut impl SignSource) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;

    // Velocities come from the pre-step ball position
    apply_controls(state, input.player);

    match state.phase {
        GamePhase::Playing => {
            step_physics(state, signs, &mut events);
            let scored = check_scoring(state, signs, &mut events);
            resolve_round(state, scored, &mut events);
        }

        GamePhase::RoundOver { .. } => {
            // Paddles stay live, ball waits at center
            let field_height = state.settings.field_height;
            state.player.apply_velocity(field_height);
            state.computer.apply_velocity(field_height);
            count_down(state, &mut events);
        }

        GamePhase::GameOver { .. } => {}
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::signs::{ScriptedSigns, SeededSigns};
    use crate::sim::state::{Bounded, Role};
    use glam::Vec2;

    fn new_state(signs: &mut impl SignSource) -> GameState {
        GameState::new(Settings::default(), signs)
    }

    #[test]
    fn test_tick_counts() {
        let mut signs = ScriptedSigns::positive();
        let mut state = new_state(&mut signs);
        tick(&mut state, &TickInput::default(), &mut signs);
        tick(&mut state, &TickInput::default(), &mut signs);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_player_input_moves_paddle() {
        let mut signs = ScriptedSigns::positive();
        let mut state = new_state(&mut signs);
        tick(&mut state, &TickInput::new(Signal::Up), &mut signs);
        assert_eq!(state.player.pos.y, 243.0);
        tick(&mut state, &TickInput::new(Signal::None), &mut signs);
        assert_eq!(state.player.pos.y, 243.0);
        tick(&mut state, &TickInput::new(Signal::Down), &mut signs);
        assert_eq!(state.player.pos.y, 250.0);
    }

    #[test]
    fn test_right_exit_scenario() {
        let mut signs = ScriptedSigns::new([1.0, -1.0]);
        let mut state = new_state(&mut signs);
        state.ball.pos = Vec2::new(790.0, 300.0);
        state.ball.vel = Vec2::new(7.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), &mut signs);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(797.0, 300.0));

        let events = tick(&mut state, &TickInput::default(), &mut signs);
        assert_eq!(events, vec![GameEvent::Scored { scorer: Role::Player }]);
        assert_eq!(state.player_score, 1);
        assert_eq!(state.computer_lives, 2);
        assert_eq!(state.player_lives, 3);
        let bounds = state.ball.bounds();
        assert_eq!(bounds.min, Vec2::new(390.0, 290.0));
        assert_eq!(bounds.max(), Vec2::new(410.0, 310.0));
        assert_eq!(state.ball.vel.x.abs(), 7.0);
        assert_eq!(state.ball.vel.y.abs(), 7.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_three_exits_end_the_game() {
        let mut signs = ScriptedSigns::positive();
        let mut state = new_state(&mut signs);

        for point in 1..=3 {
            state.ball.pos = Vec2::new(-27.0, 300.0);
            state.ball.vel = Vec2::new(-7.0, 0.0);
            let events = tick(&mut state, &TickInput::default(), &mut signs);
            assert!(events.contains(&GameEvent::Scored { scorer: Role::Computer }));
            assert_eq!(state.computer_score, point);
            assert_eq!(state.player_lives, 3 - point);
        }

        assert_eq!(state.phase, GamePhase::GameOver { loser: Role::Player });

        // Nothing moves after game over
        let frozen = state.frame();
        state.ball.pos = Vec2::new(-100.0, 300.0);
        let events = tick(&mut state, &TickInput::new(Signal::Down), &mut signs);
        assert!(events.is_empty());
        assert_eq!(state.player_lives, 0);
        assert_eq!(state.computer_score, 3);
        assert_eq!(state.time_ticks, frozen.tick);
        assert_eq!(state.player.pos, frozen.player_paddle.min);
    }

    #[test]
    fn test_round_over_holds_ball() {
        let settings = Settings {
            round_pause_ticks: 3,
            ..Default::default()
        };
        let mut signs = ScriptedSigns::positive();
        let mut state = GameState::new(settings, &mut signs);
        state.ball.pos = Vec2::new(805.0, 300.0);
        state.ball.vel = Vec2::new(7.0, 0.0);

        tick(&mut state, &TickInput::default(), &mut signs);
        assert_eq!(state.phase, GamePhase::RoundOver { ticks_left: 3 });
        let served_at = state.ball.pos;

        tick(&mut state, &TickInput::new(Signal::Up), &mut signs);
        tick(&mut state, &TickInput::new(Signal::Up), &mut signs);
        assert_eq!(state.ball.pos, served_at);
        assert_eq!(state.player.pos.y, 236.0);

        let events = tick(&mut state, &TickInput::default(), &mut signs);
        assert_eq!(events, vec![GameEvent::RoundResumed]);
        assert_eq!(state.phase, GamePhase::Playing);

        tick(&mut state, &TickInput::default(), &mut signs);
        assert_ne!(state.ball.pos, served_at);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut signs1 = SeededSigns::new(99999);
        let mut signs2 = SeededSigns::new(99999);
        let mut state1 = new_state(&mut signs1);
        let mut state2 = new_state(&mut signs2);

        let inputs = [Signal::Up, Signal::None, Signal::Down, Signal::Down];
        for i in 0..600 {
            let input = TickInput::new(inputs[i % inputs.len()]);
            tick(&mut state1, &input, &mut signs1);
            tick(&mut state2, &input, &mut signs2);
        }

        assert_eq!(state1.frame(), state2.frame());
    }
}
