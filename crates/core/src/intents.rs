//! Intent sources - where a session's per-iteration input comes from
//!
//! A source yields zero or more intents per loop iteration. The terminal source
//! lives in the input crate; [`ScriptedIntents`] replays a fixed script, which makes
//! whole sessions reproducible in tests.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::{Intent, Phase};

/// Most intents accepted in one iteration; extras are dropped.
pub const MAX_INTENTS_PER_FRAME: usize = 32;

/// Stack-only batch of intents for one iteration
pub type IntentBatch = ArrayVec<Intent, MAX_INTENTS_PER_FRAME>;

/// Push an intent, dropping it when the batch is full.
pub fn push_intent(batch: &mut IntentBatch, intent: Intent) {
    let _ = batch.try_push(intent);
}

pub trait IntentSource {
    type Error;

    /// Collect the intents for one iteration into `out`.
    ///
    /// `phase` lets the source interpret raw input per screen; `wait` is how long
    /// the source may block for the first event.
    fn poll_intents(
        &mut self,
        phase: Phase,
        wait: Duration,
        out: &mut IntentBatch,
    ) -> Result<(), Self::Error>;
}

/// Replays a fixed list of per-iteration batches, then yields nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntents {
    frames: VecDeque<Vec<Intent>>,
}

impl ScriptedIntents {
    pub fn new(frames: impl IntoIterator<Item = Vec<Intent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet replayed
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl IntentSource for ScriptedIntents {
    type Error = Infallible;

    fn poll_intents(
        &mut self,
        _phase: Phase,
        _wait: Duration,
        out: &mut IntentBatch,
    ) -> Result<(), Self::Error> {
        if let Some(frame) = self.frames.pop_front() {
            for intent in frame {
                push_intent(out, intent);
            }
        }
        Ok(())
    }
}
