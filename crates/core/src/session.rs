//! Session module - screen flow around individual games
//!
//! ```text
//! AwaitingStart --acknowledge--> Playing --top out--> GameOver --acknowledge--> AwaitingStart
//!                                   |                     ^
//!                                   +--new best--> NameEntry --submit--+
//! ```
//!
//! `Quit` moves every phase to `Exited`. The best record is loaded once when the
//! session is created and saved only when a final score strictly beats it;
//! quitting from name entry still saves it under the name typed so far.

use std::time::Duration;

use log::{debug, info, warn};

use crate::game_state::GameState;
use crate::highscore::{HighScore, HighScoreStore};
use crate::intents::{IntentBatch, IntentSource};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Intent, Phase, MAX_NAME_LEN};

/// Whether the loop driving the session should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub phase: Phase,
    pub game: GameSnapshot,
    pub best: &'a HighScore,
    /// Name typed so far (name entry screen)
    pub name_entry: &'a str,
}

pub struct Session<S: HighScoreStore> {
    phase: Phase,
    game: GameState,
    store: S,
    best: HighScore,
    name_entry: String,
    rng: SimpleRng,
    games_played: u32,
    batch: IntentBatch,
}

impl<S: HighScoreStore> Session<S> {
    /// Create a session waiting on the start screen.
    ///
    /// The best record is loaded here; a missing or unreadable record starts at `(0, "")`.
    pub fn new(store: S, seed: u32) -> Self {
        let best = match store.load() {
            Ok(Some(record)) => {
                debug!("loaded high score {} ({})", record.score, record.name);
                record
            }
            Ok(None) => {
                debug!("no high score recorded yet");
                HighScore::default()
            }
            Err(e) => {
                warn!("could not load high score, starting from zero: {}", e);
                HighScore::default()
            }
        };

        Self {
            phase: Phase::AwaitingStart,
            game: GameState::new(seed),
            store,
            best,
            name_entry: String::new(),
            rng: SimpleRng::new(seed),
            games_played: 0,
            batch: IntentBatch::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Mutable game access for scripted setups.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn best(&self) -> &HighScore {
        &self.best
    }

    pub fn name_entry(&self) -> &str {
        &self.name_entry
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.phase,
            game: self.game.snapshot(),
            best: &self.best,
            name_entry: &self.name_entry,
        }
    }

    /// Apply one intent according to the current phase.
    pub fn handle(&mut self, intent: Intent) -> Flow {
        if intent == Intent::Quit || self.phase == Phase::Exited {
            if self.phase == Phase::NameEntry {
                self.record_best();
            }
            if self.phase != Phase::Exited {
                info!("quit from {}", self.phase.as_str());
            }
            self.phase = Phase::Exited;
            return Flow::Exit;
        }

        match self.phase {
            Phase::AwaitingStart => {
                if intent == Intent::Acknowledge {
                    self.start_game();
                }
            }
            Phase::Playing => {
                if intent.is_gameplay() {
                    self.game.apply_intent(intent);
                }
            }
            Phase::NameEntry => match intent {
                Intent::TypeChar(ch) => {
                    if !ch.is_control() && self.name_entry.chars().count() < MAX_NAME_LEN {
                        self.name_entry.push(ch);
                    }
                }
                Intent::Backspace => {
                    self.name_entry.pop();
                }
                Intent::Submit => {
                    self.record_best();
                    self.phase = Phase::GameOver;
                }
                _ => {}
            },
            Phase::GameOver => {
                if intent == Intent::Acknowledge {
                    self.phase = Phase::AwaitingStart;
                }
            }
            Phase::Exited => {}
        }

        Flow::Continue
    }

    /// One loop iteration: apply `intents` in order, then advance the game by `elapsed`.
    ///
    /// Intents after a `Quit` are not applied.
    pub fn step(&mut self, intents: &[Intent], elapsed: Duration) -> Flow {
        for &intent in intents {
            if self.handle(intent) == Flow::Exit {
                return Flow::Exit;
            }
        }

        if self.phase == Phase::Playing {
            self.game.tick(elapsed);
            if let Some(event) = self.game.take_last_event() {
                if event.topped_out {
                    self.finish_game();
                }
            }
        }

        Flow::Continue
    }

    /// Poll `source` for this iteration's intents, then [`step`](Self::step).
    pub fn run_frame<I: IntentSource>(
        &mut self,
        source: &mut I,
        wait: Duration,
        elapsed: Duration,
    ) -> Result<Flow, I::Error> {
        let mut batch = std::mem::take(&mut self.batch);
        batch.clear();
        let polled = source.poll_intents(self.phase, wait, &mut batch);
        let flow = match polled {
            Ok(()) => Ok(self.step(&batch, elapsed)),
            Err(e) => Err(e),
        };
        self.batch = batch;
        flow
    }

    fn start_game(&mut self) {
        let seed = self.rng.next_u32();
        self.game = GameState::new(seed);
        self.game.start();
        self.games_played += 1;
        self.phase = Phase::Playing;
        debug!("game {} started (seed {})", self.games_played, seed);

        if self.game.game_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let score = self.game.score();
        if self.best.is_beaten_by(score) {
            info!("new high score {} (previous {})", score, self.best.score);
            self.name_entry.clear();
            self.phase = Phase::NameEntry;
        } else {
            self.phase = Phase::GameOver;
        }
    }

    fn record_best(&mut self) {
        self.best = HighScore::new(self.game.score(), self.name_entry.clone());
        match self.store.save(&self.best) {
            Ok(()) => info!("saved high score {} ({})", self.best.score, self.best.name),
            Err(e) => warn!("could not save high score: {}", e),
        }
    }
}
