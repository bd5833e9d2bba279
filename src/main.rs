//! Paddle Duel entry point
//!
//! Runs a headless match: the player paddle is driven by a simple autopilot
//! and frames are reported through the log instead of a window.
//!
//! Usage: `paddle-duel [settings.json] [--realtime]`

use std::process::ExitCode;

use paddle_duel::hud::{DISMISS_PROMPT, end_message, hud_line};
use paddle_duel::sim::{Frame, GameEvent, GameState, SeededSigns, Signal};
use paddle_duel::sprites::SpriteSet;
use paddle_duel::{FrameSink, InputSource, Pacing, RunOutcome, Scheduler, Settings};

/// Give up after this many ticks (5 minutes at 60 Hz)
const MAX_TICKS: u64 = 60 * 60 * 5;

/// Follows the ball only while it is incoming, otherwise drifts to center
struct Autopilot {
    field_height: f32,
    deadband: f32,
}

impl InputSource for Autopilot {
    fn poll(&mut self, frame: &Frame) -> Option<Signal> {
        if frame.tick >= MAX_TICKS {
            return None;
        }

        let paddle_y = frame.player_paddle.center().y;
        let target_y = if frame.ball.center().x < frame.computer_paddle.left() / 2.0 {
            frame.ball.center().y
        } else {
            self.field_height / 2.0
        };

        Some(if target_y < paddle_y - self.deadband {
            Signal::Up
        } else if target_y > paddle_y + self.deadband {
            Signal::Down
        } else {
            Signal::None
        })
    }
}

/// Reports points and periodic status through the log
struct LogSink {
    report_every: u64,
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &Frame, events: &[GameEvent]) {
        if events.iter().any(|e| matches!(e, GameEvent::Scored { .. })) {
            log::info!("{}", hud_line(frame));
        } else if frame.tick > 0 && frame.tick % self.report_every == 0 {
            log::debug!(
                "tick {}: ball at ({:.0}, {:.0})",
                frame.tick,
                frame.ball.left(),
                frame.ball.top()
            );
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Paddle Duel (headless) starting...");

    let mut pacing = Pacing::Unpaced;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            pacing = Pacing::RealTime;
        } else {
            settings_path = Some(arg);
        }
    }

    let settings = match settings_path {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let sprites = SpriteSet::load(&settings);
    log::info!(
        "Sprites resolved ({} of 3 using placeholders)",
        sprites.placeholder_count()
    );

    let mut signs = match settings.seed {
        Some(seed) => SeededSigns::new(seed),
        None => SeededSigns::from_entropy(),
    };
    log::info!("Seed: {}", signs.seed());

    let mut input = Autopilot {
        field_height: settings.field_height,
        deadband: settings.player_speed,
    };
    let mut sink = LogSink {
        report_every: u64::from(settings.tick_rate),
    };
    let mut scheduler = Scheduler::new(settings.tick_rate, pacing);
    let mut state = GameState::new(settings, &mut signs);

    let outcome = scheduler.run(&mut state, &mut signs, &mut input, &mut sink);
    let frame = state.frame();

    println!("{}", hud_line(&frame));
    match outcome {
        RunOutcome::GameOver { loser } => {
            println!("{}", end_message(loser));
            println!("{DISMISS_PROMPT}");
        }
        RunOutcome::Quit => println!("Match stopped after {} ticks.", frame.tick),
    }

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize final frame: {err}"),
    }

    ExitCode::SUCCESS
}
