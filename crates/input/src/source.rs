//! Crossterm-backed intent source.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall_core::intents::push_intent;
use blockfall_core::{IntentBatch, IntentSource};

use crate::handler::SoftDropLatch;
use crate::map::{is_soft_drop_key, map_key};
use crate::types::{Intent, Phase};

pub struct TerminalInput {
    latch: SoftDropLatch,
    last_poll: Instant,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInput {
    /// Source for terminals without key-release events.
    pub fn new() -> Self {
        Self::with_latch(SoftDropLatch::new())
    }

    /// `release_events`: the terminal reports key releases (keyboard enhancement on).
    pub fn with_release_events(release_events: bool) -> Self {
        if release_events {
            Self::with_latch(SoftDropLatch::with_release_timeout(None))
        } else {
            Self::new()
        }
    }

    pub fn with_latch(latch: SoftDropLatch) -> Self {
        Self {
            latch,
            last_poll: Instant::now(),
        }
    }

    pub fn latch(&self) -> &SoftDropLatch {
        &self.latch
    }

    /// Translate one key event for `phase` into `out`.
    pub fn translate(&mut self, phase: Phase, key: KeyEvent, out: &mut IntentBatch) {
        if key.kind == KeyEventKind::Release {
            if phase == Phase::Playing && is_soft_drop_key(key.code) {
                if let Some(intent) = self.latch.release() {
                    push_intent(out, intent);
                }
            }
            return;
        }

        // A key held across the end of a game must not skip the next screen.
        if key.kind == KeyEventKind::Repeat
            && matches!(phase, Phase::AwaitingStart | Phase::GameOver)
        {
            return;
        }

        match map_key(phase, key) {
            Some(Intent::SoftDropStart) => {
                if let Some(intent) = self.latch.press() {
                    push_intent(out, intent);
                }
            }
            Some(intent) => push_intent(out, intent),
            None => {}
        }
    }

    /// Advance the soft-drop release timeout; only meaningful while playing.
    pub fn advance(&mut self, phase: Phase, elapsed: Duration, out: &mut IntentBatch) {
        if phase != Phase::Playing {
            self.latch.reset();
            return;
        }
        if let Some(intent) = self.latch.update(elapsed) {
            push_intent(out, intent);
        }
    }
}

impl IntentSource for TerminalInput {
    type Error = io::Error;

    fn poll_intents(
        &mut self,
        phase: Phase,
        wait: Duration,
        out: &mut IntentBatch,
    ) -> io::Result<()> {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_poll);
        self.last_poll = now;
        self.advance(phase, elapsed, out);

        if !event::poll(wait)? {
            return Ok(());
        }
        // Drain everything already queued so a burst lands in one iteration.
        loop {
            if let Event::Key(key) = event::read()? {
                self.translate(phase, key, out);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }
}
