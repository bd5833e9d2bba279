//! Fixed-rate frame scheduler
//!
//! Drives `sim::tick` at the configured rate. Each tick polls one input
//! signal, runs the simulation step and hands the resulting frame to the
//! renderer. The only suspension point is the sleep between ticks.

use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{Frame, GameEvent, GameState, Role, Signal, SignSource, TickInput, tick};

/// Source of the player's directional signal
pub trait InputSource {
    /// Signal for the next tick, or `None` to quit
    fn poll(&mut self, frame: &Frame) -> Option<Signal>;
}

/// Consumer of per-tick frames (renderer, HUD, logger)
pub trait FrameSink {
    fn present(&mut self, frame: &Frame, events: &[GameEvent]);
}

/// How the scheduler waits between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Sleep to hold the target tick rate
    #[default]
    RealTime,
    /// Run ticks back to back (headless runs, tests)
    Unpaced,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    GameOver { loser: Role },
    Quit,
}

/// Accumulator that turns elapsed wall time into whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1))),
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// At most `MAX_SUBSTEPS` per call; time beyond that is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Scheduler fell behind by {:?}, dropping backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}

/// Fixed-rate driver for one match
#[derive(Debug, Clone)]
pub struct Scheduler {
    clock: FixedStep,
    pacing: Pacing,
}

impl Scheduler {
    pub fn new(tick_rate: u32, pacing: Pacing) -> Self {
        Self {
            clock: FixedStep::new(tick_rate),
            pacing,
        }
    }

    /// Run ticks until the match ends or the input source quits
    pub fn run(
        &mut self,
        state: &mut GameState,
        signs: &mut impl SignSource,
        input: &mut impl InputSource,
        sink: &mut impl FrameSink,
    ) -> RunOutcome {
        let frame = state.frame();
        sink.present(&frame, &[]);
        if let Some(loser) = frame.loser() {
            return RunOutcome::GameOver { loser };
        }

        log::info!(
            "Starting match: {} lives each, {} ticks/s ({:?})",
            state.settings.starting_lives,
            state.settings.tick_rate,
            self.pacing
        );

        let mut last = Instant::now();
        loop {
            let due = match self.pacing {
                Pacing::Unpaced => 1,
                Pacing::RealTime => {
                    let now = Instant::now();
                    let due = self.clock.advance(now - last);
                    last = now;
                    due
                }
            };

            for _ in 0..due {
                let Some(signal) = input.poll(&state.frame()) else {
                    log::info!("Quit requested at tick {}", state.time_ticks);
                    return RunOutcome::Quit;
                };

                let events = tick(state, &TickInput::new(signal), signs);
                let frame = state.frame();
                sink.present(&frame, &events);

                if let Some(loser) = frame.loser() {
                    return RunOutcome::GameOver { loser };
                }
            }

            if self.pacing == Pacing::RealTime {
                std::thread::sleep(self.clock.until_next());
            }
        }
    }
}
