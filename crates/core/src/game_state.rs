//! Game state module - one game from first spawn to game over
//!
//! Ties together the board, the active piece, the spawn RNG, scoring and the
//! difficulty ramp. Each loop iteration the owner applies the intents collected
//! since the last iteration, then calls [`GameState::tick`] with the wall-clock
//! time that passed. Moves and rotations that do not fit are silently ignored.

use std::time::Duration;

use log::{debug, info};

use crate::board::Board;
use crate::collision::{fits, merge};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::{line_clear_score, DifficultyRamp};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Outcome of one lock sequence (merge, clear, score, ramp, respawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
    /// The base fall interval shrank after this lock
    pub sped_up: bool,
    /// The next piece could not be placed: the game is over
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    ramp: DifficultyRamp,
    score: u32,
    /// Fast descent requested by the player; cleared on every lock
    soft_drop: bool,
    started: bool,
    game_over: bool,
    pieces_locked: u32,
    rows_cleared: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            ramp: DifficultyRamp::new(),
            score: 0,
            soft_drop: false,
            started: false,
            game_over: false,
            pieces_locked: 0,
            rows_cleared: 0,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Accepting intents and advancing time
    pub fn playing(&self) -> bool {
        self.started && !self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Interval the next spawned piece will fall at
    pub fn base_fall_interval(&self) -> Duration {
        self.ramp.base_interval()
    }

    /// Interval the active piece is falling at right now
    pub fn effective_fall_interval(&self) -> Duration {
        match self.active {
            Some(ref piece) => self.interval_for(piece),
            None => self.ramp.base_interval(),
        }
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Swap in a specific active piece (scripted setups and replays).
    pub fn replace_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.base_fall_interval = self.ramp.base_interval();
        out.soft_drop = self.soft_drop;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece at the current base interval.
    ///
    /// Returns false and ends the game when the spawn position is already blocked.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(&mut self.rng, self.ramp.base_interval());

        if !fits(&self.board, &piece) {
            self.active = None;
            self.game_over = true;
            info!(
                "game over: score={} rows={} pieces={}",
                self.score, self.rows_cleared, self.pieces_locked
            );
            return false;
        }

        self.active = Some(piece);
        true
    }

    fn interval_for(&self, piece: &Piece) -> Duration {
        if self.soft_drop {
            SOFT_DROP_INTERVAL
        } else {
            piece.fall_interval
        }
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if !fits(&self.board, &moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Try to rotate the active piece clockwise in place (no kicks)
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if !fits(&self.board, &rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Lock the active piece onto the board and run the rest of the lock sequence
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        merge(&mut self.board, &piece);
        let rows = self.board.clear_full_rows();
        let points = line_clear_score(rows);

        self.score = self.score.saturating_add(points);
        self.rows_cleared += rows as u32;
        self.pieces_locked += 1;

        let sped_up = self.ramp.on_lock(self.score);
        if sped_up {
            debug!(
                "score band {} reached, fall interval now {:?}",
                self.ramp.last_band(),
                self.ramp.base_interval()
            );
        }

        self.soft_drop = false;
        let spawned = self.spawn_piece();

        debug!(
            "locked {} piece #{}: rows={} points={} score={}",
            piece.color.as_str(),
            self.pieces_locked,
            rows,
            points,
            self.score
        );
        self.last_event = Some(LockEvent {
            rows_cleared: rows as u32,
            points,
            sped_up,
            topped_out: !spawned,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the fall timer by `elapsed`.
    ///
    /// At most one descent happens per call. When the timer is due and the piece
    /// cannot descend, the lock sequence runs. Returns true if the piece moved or locked.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.playing() {
            return false;
        }

        let Some(mut piece) = self.active else {
            return false;
        };

        piece.fall_time += elapsed;
        let interval = self.interval_for(&piece);
        if piece.fall_time < interval {
            self.active = Some(piece);
            return false;
        }

        let lowered = piece.shifted(0, 1);
        if fits(&self.board, &lowered) {
            self.active = Some(Piece {
                fall_time: Duration::ZERO,
                ..lowered
            });
            return true;
        }

        self.active = Some(piece);
        self.lock_piece();
        true
    }

    /// Apply a gameplay intent. Screen-flow intents are ignored here.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if !self.playing() {
            return false;
        }

        match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::Rotate => self.try_rotate(),
            Intent::SoftDropStart => {
                self.soft_drop = true;
                true
            }
            Intent::SoftDropStop => {
                self.soft_drop = false;
                true
            }
            Intent::Acknowledge
            | Intent::TypeChar(_)
            | Intent::Backspace
            | Intent::Submit
            | Intent::Quit => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
