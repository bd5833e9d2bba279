//! HUD and end screen text

use crate::sim::{Frame, Role};

pub const DISMISS_PROMPT: &str = "Press any key to exit.";

/// Score and lives line drawn at the top of the field
pub fn hud_line(frame: &Frame) -> String {
    format!(
        "Player: {}   Lives: {}    |    Computer: {}   Lives: {}",
        frame.player_score, frame.player_lives, frame.computer_score, frame.computer_lives
    )
}

/// End screen headline for the given loser
pub fn end_message(loser: Role) -> &'static str {
    match loser {
        Role::Player => "Game Over! You lost!",
        Role::Computer => "Congratulations! You won!",
    }
}
