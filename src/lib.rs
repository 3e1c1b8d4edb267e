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

//! The FSRS spaced-repetition scheduler of a goal-based flashcard app.
//!
//! The core is [`scheduler::Scheduler::schedule`]: a pure function from a
//! card's memory state, a rating and the current time to the card's next
//! state and a review log entry. Persistence is the caller's business; the
//! [`boundary`] module converts to and from the stored JSON shapes.

pub mod boundary;
pub mod cli;
mod cmd;
pub mod config;
pub mod error;
pub mod fsrs;
pub mod params;
pub mod scheduler;
pub mod types;
