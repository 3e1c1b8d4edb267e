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

//! The FSRS-5 memory model. Everything here is a pure function of its
//! arguments; the weights come from [`Weights`].

use crate::params::Weights;
use crate::types::rating::Rating;

/// Retrievability: probability of recall, in (0, 1].
pub type R = f64;
/// Stability: the interval, in days, at which retrievability falls to 90%.
pub type Stability = f64;
/// Difficulty: how hard it is to grow an item's stability, in [1, 10].
pub type Difficulty = f64;
/// Time, in days.
pub type T = f64;

/// Exponent of the power forgetting curve.
pub const DECAY: f64 = -0.5;

/// Chosen so that `retrievability(s, s) == 0.9`: `0.9^(1 / DECAY) - 1`.
pub const FACTOR: f64 = 19.0 / 81.0;

pub const MIN_DIFFICULTY: Difficulty = 1.0;
pub const MAX_DIFFICULTY: Difficulty = 10.0;

pub const MIN_STABILITY: Stability = 0.01;
pub const MAX_STABILITY: Stability = 36500.0;

/// Lower bound of the growth factor applied on a successful recall.
pub const MIN_GROWTH: f64 = 1.0;

pub fn retrievability(t: T, s: Stability) -> R {
    (1.0 + FACTOR * (t / s)).powf(DECAY)
}

/// The time after which retrievability falls to `r`. Not rounded or
/// clamped: callers decide how to turn it into a schedule.
pub fn interval(r: R, s: Stability) -> T {
    (s / FACTOR) * (r.powf(1.0 / DECAY) - 1.0)
}

pub fn initial_stability(w: &Weights, g: Rating) -> Stability {
    let s = match g {
        Rating::Again => w[0],
        Rating::Hard => w[1],
        Rating::Good => w[2],
        Rating::Easy => w[3],
    };
    clamp_s(s)
}

pub fn initial_difficulty(w: &Weights, g: Rating) -> Difficulty {
    clamp_d(raw_initial_difficulty(w, g))
}

fn raw_initial_difficulty(w: &Weights, g: Rating) -> Difficulty {
    w[4] - f64::exp(w[5] * (g.as_f64() - 1.0)) + 1.0
}

/// Moves difficulty by a rating-dependent delta, damped near the top of the
/// range, then reverts it towards the initial difficulty of an Easy card.
pub fn new_difficulty(w: &Weights, d: Difficulty, g: Rating) -> Difficulty {
    let delta = -w[6] * (g.as_f64() - 3.0);
    let damped = d + delta * ((10.0 - d) / 9.0);
    clamp_d(w[7] * raw_initial_difficulty(w, Rating::Easy) + (1.0 - w[7]) * damped)
}

/// Stability after a review at retrievability `r`.
pub fn new_stability(w: &Weights, d: Difficulty, s: Stability, r: R, g: Rating) -> Stability {
    if g == Rating::Again {
        forget_stability(w, d, s, r)
    } else {
        recall_stability(w, d, s, r, g)
    }
}

pub fn recall_stability(w: &Weights, d: Difficulty, s: Stability, r: R, g: Rating) -> Stability {
    let t_d = 11.0 - d;
    let t_s = s.powf(-w[9]);
    let t_r = f64::exp(w[10] * (1.0 - r)) - 1.0;
    let h = if g == Rating::Hard { w[15] } else { 1.0 };
    let b = if g == Rating::Easy { w[16] } else { 1.0 };
    let c = f64::exp(w[8]);
    let alpha = 1.0 + t_d * t_s * t_r * h * b * c;
    clamp_s(s * alpha.max(MIN_GROWTH))
}

/// Post-lapse stability. Never exceeds the stability before the lapse.
pub fn forget_stability(w: &Weights, d: Difficulty, s: Stability, r: R) -> Stability {
    let d_f = d.powf(-w[12]);
    let s_f = (s + 1.0).powf(w[13]) - 1.0;
    let r_f = f64::exp(w[14] * (1.0 - r));
    let long_term = w[11] * d_f * s_f * r_f;
    let short_term = s / f64::exp(w[17] * w[18]);
    clamp_s(long_term.min(short_term).min(s))
}

/// Stability after a review on the same day as the previous one, where the
/// forgetting curve has had no time to act.
pub fn short_term_stability(w: &Weights, s: Stability, g: Rating) -> Stability {
    clamp_s(s * f64::exp(w[17] * (g.as_f64() - 3.0 + w[18])))
}

/// NaN is treated as the hardest possible card.
fn clamp_d(d: Difficulty) -> Difficulty {
    if d.is_nan() {
        return MAX_DIFFICULTY;
    }
    d.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// NaN is treated as the weakest possible memory.
fn clamp_s(s: Stability) -> Stability {
    if s.is_nan() {
        return MIN_STABILITY;
    }
    s.clamp(MIN_STABILITY, MAX_STABILITY)
}
