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

use crate::error::ErrorKind;
use crate::error::ErrorReport;
use crate::error::fail;

/// A card's lifecycle stage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum State {
    /// Never reviewed.
    New,
    /// Going through the initial learning steps.
    Learning,
    /// Graduated: scheduled in days by the memory model.
    Review,
    /// Forgotten after graduating, going through the relearning steps.
    Relearning,
}

impl State {
    pub fn number(self) -> u8 {
        match self {
            State::New => 0,
            State::Learning => 1,
            State::Review => 2,
            State::Relearning => 3,
        }
    }
}

impl TryFrom<u8> for State {
    type Error = ErrorReport;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(State::New),
            1 => Ok(State::Learning),
            2 => Ok(State::Review),
            3 => Ok(State::Relearning),
            _ => fail(
                ErrorKind::InvalidCardState,
                format!("invalid card state: {value}"),
            ),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            State::New => "new",
            State::Learning => "learning",
            State::Review => "review",
            State::Relearning => "relearning",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_number_round_trip() -> Fallible<()> {
        for state in [State::New, State::Learning, State::Review, State::Relearning] {
            assert_eq!(State::try_from(state.number())?, state);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_number() {
        let err = State::try_from(4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCardState);
    }
}
