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
use std::str::FromStr;

use chrono::Duration;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

use crate::error::ErrorKind;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// The model identifier of the parameter set this crate implements.
pub const MODEL_VERSION: &str = "fsrs-5";

/// Number of weights in an FSRS-5 vector.
pub const WEIGHT_COUNT: usize = 19;

/// Number of weights in an FSRS-4.5 vector, which lacks the two short-term
/// weights.
pub const LEGACY_WEIGHT_COUNT: usize = 17;

/// The FSRS-5 default weights.
pub const DEFAULT_WEIGHTS: [f64; WEIGHT_COUNT] = [
    0.40255, 1.18385, 3.173, 15.69105, 7.1949, 0.5345, 1.4604, 0.0046, 1.54575, 0.1192, 1.01925,
    1.9395, 0.11, 0.29605, 2.2698, 0.2315, 2.9898, 0.51655, 0.6621,
];

/// Smallest value each weight may take. Outside these ranges the formulas
/// overflow or stop being monotonic in the rating.
pub const WEIGHT_LOWER_BOUNDS: [f64; WEIGHT_COUNT] = [
    0.01, 0.01, 0.01, 0.01, 1.0, 0.001, 0.001, 0.001, 0.0, 0.0, 0.001, 0.001, 0.001, 0.001, 0.0,
    0.0, 1.0, 0.0, 0.0,
];

/// Largest value each weight may take.
pub const WEIGHT_UPPER_BOUNDS: [f64; WEIGHT_COUNT] = [
    100.0, 100.0, 100.0, 100.0, 10.0, 4.0, 4.0, 0.75, 4.5, 0.8, 3.5, 5.0, 0.25, 0.9, 4.0, 1.0, 6.0,
    2.0, 2.0,
];

pub const DEFAULT_REQUEST_RETENTION: f64 = 0.9;

/// The minimum review interval in days.
pub const DEFAULT_MINIMUM_INTERVAL: u32 = 1;

/// The maximum review interval in days.
pub const DEFAULT_MAXIMUM_INTERVAL: u32 = 36500;

/// The weight vector driving every stability and difficulty formula.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Weights([f64; WEIGHT_COUNT]);

impl Weights {
    /// Builds a weight vector from 19 values, or from 17 (FSRS-4.5) values,
    /// in which case the short-term weights are zero and same-day reviews
    /// leave stability unchanged. Every weight must lie within
    /// [`WEIGHT_LOWER_BOUNDS`] and [`WEIGHT_UPPER_BOUNDS`].
    pub fn new(values: &[f64]) -> Fallible<Self> {
        for (i, w) in values.iter().enumerate().take(WEIGHT_COUNT) {
            let (lo, hi) = (WEIGHT_LOWER_BOUNDS[i], WEIGHT_UPPER_BOUNDS[i]);
            if !w.is_finite() {
                return fail(
                    ErrorKind::InvalidParameters,
                    format!("weight w{i} is not a finite number"),
                );
            }
            if !(lo..=hi).contains(w) {
                return fail(
                    ErrorKind::InvalidParameters,
                    format!("weight w{i} = {w} lies outside [{lo}, {hi}]"),
                );
            }
        }
        let mut weights = [0.0; WEIGHT_COUNT];
        match values.len() {
            WEIGHT_COUNT => weights.copy_from_slice(values),
            LEGACY_WEIGHT_COUNT => {
                log::warn!("Migrating a 17-weight parameter vector to FSRS-5.");
                weights[..LEGACY_WEIGHT_COUNT].copy_from_slice(values);
            }
            n => {
                return fail(
                    ErrorKind::InvalidParameters,
                    format!("expected {WEIGHT_COUNT} or {LEGACY_WEIGHT_COUNT} weights, got {n}"),
                );
            }
        }
        Ok(Self(weights))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl std::ops::Index<usize> for Weights {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Serialize for Weights {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Weights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values: Vec<f64> = Vec::deserialize(deserializer)?;
        Weights::new(&values).map_err(|e| D::Error::custom(e.message().to_string()))
    }
}

/// A learning or relearning step, written as a count and a unit:
/// `30s`, `10m`, `1h`, `2d`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    count: u32,
    unit: StepUnit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StepUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Step {
    pub fn minutes(count: u32) -> Self {
        Self {
            count,
            unit: StepUnit::Minutes,
        }
    }

    pub fn duration(self) -> Duration {
        let count = self.count as i64;
        match self.unit {
            StepUnit::Seconds => Duration::seconds(count),
            StepUnit::Minutes => Duration::minutes(count),
            StepUnit::Hours => Duration::hours(count),
            StepUnit::Days => Duration::days(count),
        }
    }
}

impl FromStr for Step {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suffix) = s.chars().last() else {
            return fail(ErrorKind::InvalidParameters, "empty step");
        };
        let unit = match suffix {
            's' => StepUnit::Seconds,
            'm' => StepUnit::Minutes,
            'h' => StepUnit::Hours,
            'd' => StepUnit::Days,
            _ => {
                return fail(
                    ErrorKind::InvalidParameters,
                    format!("step `{s}` must end in s, m, h or d"),
                );
            }
        };
        let count: u32 = s[..s.len() - 1].parse().map_err(|_| {
            ErrorReport::new(
                ErrorKind::InvalidParameters,
                format!("step `{s}` must start with a whole number"),
            )
        })?;
        if count == 0 {
            return fail(
                ErrorKind::InvalidParameters,
                format!("step `{s}` must be positive"),
            );
        }
        Ok(Self { count, unit })
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.unit {
            StepUnit::Seconds => 's',
            StepUnit::Minutes => 'm',
            StepUnit::Hours => 'h',
            StepUnit::Days => 'd',
        };
        write!(f, "{}{}", self.count, suffix)
    }
}

impl Serialize for Step {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e: ErrorReport| D::Error::custom(e.message().to_string()))
    }
}

/// Everything that tunes the scheduler. Passed in explicitly so the same
/// card and rating always schedule the same way under the same parameters.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// The model the weights were fitted for.
    pub version: String,
    pub weights: Weights,
    /// The recall probability the scheduler aims for at the due date.
    pub request_retention: f64,
    /// Lower bound on review intervals, in days.
    pub minimum_interval: u32,
    /// Upper bound on review intervals, in days.
    pub maximum_interval: u32,
    /// The steps a new card goes through before graduating to review.
    pub learning_steps: Vec<Step>,
    /// The steps a lapsed card goes through before returning to review.
    pub relearning_steps: Vec<Step>,
    /// Whether reviews less than a day apart use the short-term stability
    /// formula.
    pub enable_short_term: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            version: MODEL_VERSION.to_string(),
            weights: Weights::default(),
            request_retention: DEFAULT_REQUEST_RETENTION,
            minimum_interval: DEFAULT_MINIMUM_INTERVAL,
            maximum_interval: DEFAULT_MAXIMUM_INTERVAL,
            learning_steps: vec![Step::minutes(1), Step::minutes(10)],
            relearning_steps: vec![Step::minutes(10)],
            enable_short_term: true,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Fallible<()> {
        if self.version != MODEL_VERSION {
            return fail(
                ErrorKind::InvalidParameters,
                format!(
                    "unsupported model version `{}`, expected `{MODEL_VERSION}`",
                    self.version
                ),
            );
        }
        let r = self.request_retention;
        if !(r > 0.0 && r < 1.0) {
            return fail(
                ErrorKind::InvalidParameters,
                format!("request retention must lie in (0, 1), got {r}"),
            );
        }
        if self.minimum_interval < 1 {
            return fail(
                ErrorKind::InvalidParameters,
                "minimum interval must be at least one day",
            );
        }
        if self.maximum_interval < self.minimum_interval {
            return fail(
                ErrorKind::InvalidParameters,
                format!(
                    "maximum interval ({}) is below the minimum interval ({})",
                    self.maximum_interval, self.minimum_interval
                ),
            );
        }
        Ok(())
    }
}
