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

use thiserror::Error;

/// The category of an error. Callers match on this to decide how to
/// surface the failure (e.g. a bad rating is a client error, a corrupted
/// card is an internal one).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// A rating outside 1-4 reached a place that needs a valid one.
    InvalidRating,
    /// A card violates its invariants: upstream state is corrupted.
    InvalidCardState,
    /// The review time precedes the card's last review.
    InvalidReviewTime,
    /// A timestamp can't be represented.
    InvalidTimestamp,
    /// The scheduler parameters are malformed.
    InvalidParameters,
    Io,
    Parse,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidRating => "invalid rating",
            ErrorKind::InvalidCardState => "invalid card state",
            ErrorKind::InvalidReviewTime => "invalid review time",
            ErrorKind::InvalidTimestamp => "invalid timestamp",
            ErrorKind::InvalidParameters => "invalid parameters",
            ErrorKind::Io => "I/O error",
            ErrorKind::Parse => "parse error",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("{kind}: {message}")]
pub struct ErrorReport {
    kind: ErrorKind,
    message: String,
}

impl ErrorReport {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(kind: ErrorKind, message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::new(kind, message))
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(ErrorKind::Io, value.to_string())
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(ErrorKind::Parse, value.to_string())
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::new(ErrorKind::Parse, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = ErrorReport::new(ErrorKind::InvalidCardState, "stability is -1");
        assert_eq!(err.to_string(), "invalid card state: stability is -1");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail(ErrorKind::InvalidRating, "5 is not a rating");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRating);
        assert_eq!(err.message(), "5 is not a rating");
    }

    #[test]
    fn test_from_json_error() {
        let err: ErrorReport = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
