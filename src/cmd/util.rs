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

use std::io::Read;
use std::path::PathBuf;

use crate::boundary::CardObject;
use crate::boundary::object_to_card;
use crate::config::load_parameters;
use crate::error::Fallible;
use crate::scheduler::Scheduler;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// Reads a card object from a file, or from standard input if the path is
/// `-`.
pub fn read_card(path: &str) -> Fallible<Card> {
    let content = if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    parse_card(&content)
}

pub fn parse_card(content: &str) -> Fallible<Card> {
    let obj: CardObject = serde_json::from_str(content)?;
    object_to_card(&obj)
}

/// The clock is only read here, at the edge; the library takes time as an
/// argument.
pub fn resolve_now(now: Option<i64>) -> Fallible<Timestamp> {
    match now {
        Some(ms) => Timestamp::from_millis(ms),
        None => Ok(Timestamp::now()),
    }
}

pub fn load_scheduler(config: Option<PathBuf>) -> Fallible<Scheduler> {
    match config {
        Some(path) => Scheduler::new(load_parameters(&path)?),
        None => Ok(Scheduler::default()),
    }
}
