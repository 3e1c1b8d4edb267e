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

use crate::boundary::card_to_object;
use crate::cmd::util::resolve_now;
use crate::error::Fallible;
use crate::types::card::Card;

pub fn print_new_card(now: Option<i64>) -> Fallible<()> {
    let now = resolve_now(now)?;
    let card = Card::new(now);
    let json: String = serde_json::to_string_pretty(&card_to_object(&card))?;
    println!("{json}");
    Ok(())
}
