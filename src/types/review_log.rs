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

use crate::fsrs::Difficulty;
use crate::fsrs::Stability;
use crate::fsrs::T;
use crate::types::rating::Rating;
use crate::types::state::State;
use crate::types::timestamp::Timestamp;

/// A record of one rating. The scheduler builds one per review; after that
/// it is read-only.
#[derive(Clone, PartialEq, Debug)]
pub struct ReviewLog {
    pub(crate) rating: Rating,
    /// The state the card is in after the review.
    pub(crate) state: State,
    pub(crate) due: Timestamp,
    pub(crate) stability: Stability,
    pub(crate) difficulty: Difficulty,
    pub(crate) elapsed_days: T,
    /// The card's `elapsed_days` before this review.
    pub(crate) last_elapsed_days: T,
    pub(crate) scheduled_days: T,
    /// When the review happened.
    pub(crate) review: Timestamp,
}

impl ReviewLog {
    pub fn rating(&self) -> Rating {
        self.rating
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

    pub fn last_elapsed_days(&self) -> T {
        self.last_elapsed_days
    }

    pub fn scheduled_days(&self) -> T {
        self.scheduled_days
    }

    pub fn review(&self) -> Timestamp {
        self.review
    }
}
