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

//! Conversions between the typed core and the plain shapes the application
//! stores and sends: integer ratings, epoch-millisecond timestamps, and the
//! `fsrsState` JSON object of a flashcard.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::rating::Rating;
use crate::types::review_log::ReviewLog;
use crate::types::state::State;
use crate::types::timestamp::Timestamp;

/// A card as stored by the application.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CardObject {
    pub state: u8,
    /// Epoch milliseconds.
    pub due: i64,
    pub stability: f64,
    pub difficulty: f64,
    pub elapsed_days: f64,
    pub scheduled_days: f64,
    pub reps: u32,
    pub lapses: u32,
    /// Epoch milliseconds; absent for a card that was never reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review: Option<i64>,
    /// Current learning or relearning step. Older objects lack it, and it
    /// is left out when zero so those objects read back unchanged.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub learning_steps: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// A review log as stored by the application.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ReviewLogObject {
    pub rating: Rating,
    pub state: u8,
    pub due: i64,
    pub stability: f64,
    pub difficulty: f64,
    pub elapsed_days: f64,
    pub last_elapsed_days: f64,
    pub scheduled_days: f64,
    pub review: i64,
}

/// Validates a rating from the wire. Anything that is not an integer in
/// 1-4 yields `None`, and must be rejected before reaching the scheduler.
pub fn number_to_rating(n: f64) -> Option<Rating> {
    if n.fract() != 0.0 || !(1.0..=4.0).contains(&n) {
        return None;
    }
    Rating::from_number(n as i64)
}

/// Builds a card from its stored form. Fails on an unknown state number or
/// an unrepresentable timestamp. Invariants are checked by the scheduler,
/// not here, so corrupted rows can still be loaded and inspected.
pub fn object_to_card(obj: &CardObject) -> Fallible<Card> {
    let last_review = match obj.last_review {
        Some(ms) => Some(Timestamp::from_millis(ms)?),
        None => None,
    };
    Ok(Card {
        state: State::try_from(obj.state)?,
        due: Timestamp::from_millis(obj.due)?,
        stability: obj.stability,
        difficulty: obj.difficulty,
        elapsed_days: obj.elapsed_days,
        scheduled_days: obj.scheduled_days,
        reps: obj.reps,
        lapses: obj.lapses,
        step: obj.learning_steps,
        last_review,
    })
}

pub fn card_to_object(card: &Card) -> CardObject {
    CardObject {
        state: card.state.number(),
        due: card.due.millis(),
        stability: card.stability,
        difficulty: card.difficulty,
        elapsed_days: card.elapsed_days,
        scheduled_days: card.scheduled_days,
        reps: card.reps,
        lapses: card.lapses,
        last_review: card.last_review.map(Timestamp::millis),
        learning_steps: card.step,
    }
}

pub fn log_to_object(log: &ReviewLog) -> ReviewLogObject {
    ReviewLogObject {
        rating: log.rating,
        state: log.state.number(),
        due: log.due.millis(),
        stability: log.stability,
        difficulty: log.difficulty,
        elapsed_days: log.elapsed_days,
        last_elapsed_days: log.last_elapsed_days,
        scheduled_days: log.scheduled_days,
        review: log.review.millis(),
    }
}
