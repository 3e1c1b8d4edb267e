// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::fsrs::Difficulty;
use crate::fsrs::R;
use crate::fsrs::Stability;
use crate::fsrs::T;
use crate::fsrs::retrievability;
use crate::types::state::State;
use crate::types::timestamp::Timestamp;

/// A flashcard's memory state. Only the scheduler produces new values of
/// this type from old ones.
#[derive(Clone, PartialEq, Debug)]
pub struct Card {
    pub(crate) state: State,
    pub(crate) due: Timestamp,
    pub(crate) stability: Stability,
    pub(crate) difficulty: Difficulty,
    pub(crate) elapsed_days: T,
    pub(crate) scheduled_days: T,
    pub(crate) reps: u32,
    pub(crate) lapses: u32,
    /// Index into the learning or relearning steps. Zero outside of them.
    pub(crate) step: u32,
    pub(crate) last_review: Option<Timestamp>,
}

impl Card {
    /// A card that has never been reviewed, due immediately. Stability and
    /// difficulty stay zero until the first rating initialises them.
    pub fn new(now: Timestamp) -> Self {
        Self {
            state: State::New,
            due: now,
            stability: 0.0,
            difficulty: 0.0,
            elapsed_days: 0.0,
            scheduled_days: 0.0,
            reps: 0,
            lapses: 0,
            step: 0,
            last_review: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn due(&self) -> Timestamp {
        self.due
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn elapsed_days(&self) -> T {
        self.elapsed_days
    }

    pub fn scheduled_days(&self) -> T {
        self.scheduled_days
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn lapses(&self) -> u32 {
        self.lapses
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn last_review(&self) -> Option<Timestamp> {
        self.last_review
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        self.due <= now
    }

    /// The predicted probability of recalling this card at `now`. New cards
    /// have no memory to recall, so this is zero for them.
    pub fn retrievability(&self, now: Timestamp) -> R {
        match (self.state, self.last_review) {
            (State::New, _) | (_, None) => 0.0,
            (_, Some(last_review)) => {
                let t = now.days_since(last_review).max(0) as f64;
                retrievability(t, self.stability)
            }
        }
    }

    /// Checks the card's invariants. A failure here means the stored state
    /// was corrupted upstream; it is reported, never repaired.
    pub fn validate(&self) -> Fallible<()> {
        let s = self.stability;
        if !s.is_finite() || s < 0.0 {
            return fail(
                ErrorKind::InvalidCardState,
                format!("stability must be a non-negative number, got {s}"),
            );
        }
        if s == 0.0 && self.state != State::New {
            return fail(
                ErrorKind::InvalidCardState,
                format!("a {} card must have positive stability", self.state),
            );
        }
        if !self.difficulty.is_finite() {
            return fail(
                ErrorKind::InvalidCardState,
                format!("difficulty must be finite, got {}", self.difficulty),
            );
        }
        for (name, days) in [
            ("elapsed_days", self.elapsed_days),
            ("scheduled_days", self.scheduled_days),
        ] {
            if !days.is_finite() || days < 0.0 {
                return fail(
                    ErrorKind::InvalidCardState,
                    format!("{name} must be a non-negative number, got {days}"),
                );
            }
        }
        if self.lapses > self.reps {
            return fail(
                ErrorKind::InvalidCardState,
                format!("lapses ({}) exceed reps ({})", self.lapses, self.reps),
            );
        }
        match self.last_review {
            None => {
                if self.state != State::New {
                    return fail(
                        ErrorKind::InvalidCardState,
                        format!("a {} card must have a last review", self.state),
                    );
                }
            }
            Some(last_review) => {
                if self.due < last_review {
                    return fail(
                        ErrorKind::InvalidCardState,
                        format!("due date {} precedes last review {last_review}", self.due),
                    );
                }
            }
        }
        Ok(())
    }
}
