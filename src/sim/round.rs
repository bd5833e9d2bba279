//! Round and game phase transitions
//!
//! `Playing` -> `GameOver` once either side runs out of lives. With a
//! non-zero `round_pause_ticks`, a point that does not end the match holds
//! the freshly served ball in `RoundOver` for that many ticks first.

use super::state::{GameEvent, GamePhase, GameState, Role};

/// Loser once a side has no lives left
///
/// Both sides cannot reach zero on the same tick (one point per tick), so the
/// player is checked first without further tie-breaking.
pub fn loser(state: &GameState) -> Option<Role> {
    if state.player_lives == 0 {
        Some(Role::Player)
    } else if state.computer_lives == 0 {
        Some(Role::Computer)
    } else {
        None
    }
}

/// Decide the phase after a `Playing` tick
pub fn resolve_round(state: &mut GameState, scored: Option<Role>, events: &mut Vec<GameEvent>) {
    if let Some(loser) = loser(state) {
        state.phase = GamePhase::GameOver { loser };
        log::info!(
            "Game over at tick {}: {:?} lost ({} - {})",
            state.time_ticks,
            loser,
            state.player_score,
            state.computer_score
        );
        events.push(GameEvent::GameOver { loser });
        return;
    }

    if scored.is_some() && state.settings.round_pause_ticks > 0 {
        state.phase = GamePhase::RoundOver {
            ticks_left: state.settings.round_pause_ticks,
        };
    }
}

/// Count down a `RoundOver` hold, resuming play when it expires
pub fn count_down(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if let GamePhase::RoundOver { ticks_left } = state.phase {
        if ticks_left <= 1 {
            state.phase = GamePhase::Playing;
            events.push(GameEvent::RoundResumed);
        } else {
            state.phase = GamePhase::RoundOver {
                ticks_left: ticks_left - 1,
            };
        }
    }
}
