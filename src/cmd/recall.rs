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

use crate::cmd::util::load_scheduler;
use crate::cmd::util::read_card;
use crate::cmd::util::resolve_now;
use crate::error::Fallible;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecallExport {
    retrievability: f64,
    is_due: bool,
}

pub fn print_recall(card: &str, now: Option<i64>, config: Option<PathBuf>) -> Fallible<()> {
    let scheduler = load_scheduler(config)?;
    let card = read_card(card)?;
    let now = resolve_now(now)?;
    let export = RecallExport {
        retrievability: scheduler.retrievability(&card, now)?,
        is_due: card.is_due(now),
    };
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}
