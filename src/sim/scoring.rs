//! Boundary-exit scoring
//!
//! A point is awarded once the ball has fully left the field on the left or
//! right. The scorer gains a point, the other side loses a life, and the ball
//! is served again in the same step.

use super::signs::SignSource;
use super::state::{Bounded, GameEvent, GameState, Role};

/// Which side (if any) the ball has fully exited past
pub fn exit_side(state: &GameState) -> Option<Role> {
    let bounds = state.ball.bounds();
    if bounds.right() < 0.0 {
        Some(Role::Player)
    } else if bounds.left() > state.settings.field_width {
        Some(Role::Computer)
    } else {
        None
    }
}

/// Award the point for a ball exit and re-serve. Returns the scorer.
pub fn check_scoring(
    state: &mut GameState,
    signs: &mut impl SignSource,
    events: &mut Vec<GameEvent>,
) -> Option<Role> {
    let conceded = exit_side(state)?;
    let scorer = conceded.opponent();

    match scorer {
        Role::Player => {
            state.player_score += 1;
            state.computer_lives = state.computer_lives.saturating_sub(1);
        }
        Role::Computer => {
            state.computer_score += 1;
            state.player_lives = state.player_lives.saturating_sub(1);
        }
    }
    state.reset_ball(signs);

    log::info!(
        "{:?} scores at tick {} - player {} ({} lives), computer {} ({} lives)",
        scorer,
        state.time_ticks,
        state.player_score,
        state.player_lives,
        state.computer_score,
        state.computer_lives
    );
    events.push(GameEvent::Scored { scorer });
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::signs::ScriptedSigns;
    use glam::Vec2;

    fn setup() -> (GameState, ScriptedSigns, Vec<GameEvent>) {
        let mut signs = ScriptedSigns::positive();
        let state = GameState::new(Settings::default(), &mut signs);
        (state, signs, Vec::new())
    }

    #[test]
    fn test_computer_scores_when_ball_exits_left() {
        let (mut state, mut signs, mut events) = setup();
        state.ball.pos = Vec2::new(-20.5, 300.0);

        assert_eq!(check_scoring(&mut state, &mut signs, &mut events), Some(Role::Computer));
        assert_eq!(state.computer_score, 1);
        assert_eq!(state.player_lives, 2);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.computer_lives, 3);
        assert_eq!(events, vec![GameEvent::Scored { scorer: Role::Computer }]);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut state, mut signs, mut events) = setup();
        state.ball.pos = Vec2::new(800.5, 300.0);

        assert_eq!(check_scoring(&mut state, &mut signs, &mut events), Some(Role::Player));
        assert_eq!(state.player_score, 1);
        assert_eq!(state.computer_lives, 2);
    }

    #[test]
    fn test_partially_out_is_not_a_point() {
        let (mut state, mut signs, mut events) = setup();
        // Right edge exactly at 0: still touching the field
        state.ball.pos = Vec2::new(-20.0, 300.0);
        assert_eq!(check_scoring(&mut state, &mut signs, &mut events), None);

        // Left edge exactly at the field width
        state.ball.pos = Vec2::new(800.0, 300.0);
        assert_eq!(check_scoring(&mut state, &mut signs, &mut events), None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut state, _, mut events) = setup();
        let mut signs = ScriptedSigns::new([-1.0, 1.0]);
        state.ball.pos = Vec2::new(-30.0, 100.0);
        state.ball.vel = Vec2::new(-7.0, 9.0);

        check_scoring(&mut state, &mut signs, &mut events);
        assert_eq!(state.ball.center(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 7.0));
    }

    #[test]
    fn test_lives_never_go_negative() {
        let (mut state, mut signs, mut events) = setup();
        state.player_lives = 0;
        state.ball.pos = Vec2::new(-30.0, 300.0);
        check_scoring(&mut state, &mut signs, &mut events);
        assert_eq!(state.player_lives, 0);
        assert_eq!(state.computer_score, 1);
    }
}
