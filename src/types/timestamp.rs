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

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;

/// A UTC instant with millisecond precision, which is what the wire format
/// stores.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_millis(ms: i64) -> Fallible<Self> {
        match DateTime::from_timestamp_millis(ms) {
            Some(ts) => Ok(Self(ts)),
            None => fail(
                ErrorKind::InvalidTimestamp,
                format!("timestamp out of range: {ms}"),
            ),
        }
    }

    pub fn millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Whole days elapsed since `earlier`, rounded down.
    pub fn days_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Adds a duration. Saturates at the largest representable instant,
    /// which the interval bounds keep us far away from in practice.
    pub fn plus(self, duration: Duration) -> Self {
        match self.0.checked_add_signed(duration) {
            Some(ts) => Self(ts),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
