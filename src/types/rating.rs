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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

/// How well the user recalled a card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// The numeric encoding used at the storage and API boundary. Returns
    /// `None` for anything outside 1-4.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Rating::Again),
            2 => Some(Rating::Hard),
            3 => Some(Rating::Good),
            4 => Some(Rating::Easy),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Rating::Again => 1,
            Rating::Hard => 2,
            Rating::Good => 3,
            Rating::Easy => 4,
        }
    }

    /// The rating as the `G` term of the FSRS formulas.
    pub fn as_f64(self) -> f64 {
        self.number() as f64
    }

    pub fn is_success(self) -> bool {
        self != Rating::Again
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        };
        write!(f, "{name}")
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n: i64 = i64::deserialize(deserializer)?;
        Rating::from_number(n).ok_or_else(|| D::Error::custom(format!("invalid rating: {n}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Rating::from_number(1), Some(Rating::Again));
        assert_eq!(Rating::from_number(2), Some(Rating::Hard));
        assert_eq!(Rating::from_number(3), Some(Rating::Good));
        assert_eq!(Rating::from_number(4), Some(Rating::Easy));
        assert_eq!(Rating::from_number(0), None);
        assert_eq!(Rating::from_number(5), None);
        assert_eq!(Rating::from_number(-3), None);
    }

    #[test]
    fn test_number_inverts_from_number() {
        for rating in Rating::ALL {
            assert_eq!(Rating::from_number(rating.number() as i64), Some(rating));
        }
    }

    #[test]
    fn test_serde_uses_number() {
        assert_eq!(serde_json::to_string(&Rating::Hard).unwrap(), "2");
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating, Rating::Easy);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }
}
