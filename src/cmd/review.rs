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

use std::path::PathBuf;

use serde::Serialize;

use crate::boundary::CardObject;
use crate::boundary::ReviewLogObject;
use crate::boundary::card_to_object;
use crate::boundary::log_to_object;
use crate::boundary::number_to_rating;
use crate::cmd::util::load_scheduler;
use crate::cmd::util::read_card;
use crate::cmd::util::resolve_now;
use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::Scheduled;

#[derive(Serialize)]
pub struct ScheduledExport {
    card: CardObject,
    log: ReviewLogObject,
}

impl From<&Scheduled> for ScheduledExport {
    fn from(scheduled: &Scheduled) -> Self {
        Self {
            card: card_to_object(&scheduled.card),
            log: log_to_object(&scheduled.log),
        }
    }
}

pub fn print_review(
    card: &str,
    rating: f64,
    now: Option<i64>,
    config: Option<PathBuf>,
) -> Fallible<()> {
    // Validate the rating before touching anything else.
    let Some(rating) = number_to_rating(rating) else {
        return fail(
            ErrorKind::InvalidRating,
            format!("rating must be 1, 2, 3 or 4, got {rating}"),
        );
    };
    let scheduler = load_scheduler(config)?;
    let card = read_card(card)?;
    let now = resolve_now(now)?;
    let scheduled = scheduler.schedule(&card, rating, now)?;
    let json: String = serde_json::to_string_pretty(&ScheduledExport::from(&scheduled))?;
    println!("{json}");
    Ok(())
}
