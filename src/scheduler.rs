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

use chrono::Duration;

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::fsrs::Difficulty;
use crate::fsrs::MAX_DIFFICULTY;
use crate::fsrs::MIN_DIFFICULTY;
use crate::fsrs::R;
use crate::fsrs::Stability;
use crate::fsrs::T;
use crate::fsrs::initial_difficulty;
use crate::fsrs::initial_stability;
use crate::fsrs::interval;
use crate::fsrs::new_difficulty;
use crate::fsrs::new_stability;
use crate::fsrs::retrievability;
use crate::fsrs::short_term_stability;
use crate::params::Parameters;
use crate::params::Step;
use crate::types::card::Card;
use crate::types::rating::Rating;
use crate::types::review_log::ReviewLog;
use crate::types::state::State;
use crate::types::timestamp::Timestamp;

/// The result of rating a card: its replacement, and the log entry to
/// persist alongside it.
#[derive(Clone, PartialEq, Debug)]
pub struct Scheduled {
    pub card: Card,
    pub log: ReviewLog,
}

/// What each rating would do to a card.
#[derive(Clone, PartialEq, Debug)]
pub struct Preview {
    pub again: Scheduled,
    pub hard: Scheduled,
    pub good: Scheduled,
    pub easy: Scheduled,
}

impl Preview {
    pub fn get(&self, rating: Rating) -> &Scheduled {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }
}

/// Where a review sends the card next.
struct Transition {
    state: State,
    step: u32,
    interval: Duration,
}

struct ReviewDays {
    hard: i64,
    good: i64,
    easy: i64,
}

/// The FSRS scheduler. Immutable once built, so one instance can be shared
/// freely between threads.
#[derive(Clone, Debug)]
pub struct Scheduler {
    params: Parameters,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            params: Parameters::default(),
        }
    }
}

impl Scheduler {
    pub fn new(params: Parameters) -> Fallible<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Applies a rating to a card reviewed at `now`.
    ///
    /// Fails with [`ErrorKind::InvalidCardState`] if the card violates its
    /// invariants, and with [`ErrorKind::InvalidReviewTime`] if `now`
    /// precedes the card's last review.
    pub fn schedule(&self, card: &Card, rating: Rating, now: Timestamp) -> Fallible<Scheduled> {
        card.validate()?;
        let elapsed_days = elapsed_days(card, now)?;
        let (stability, difficulty) = self.memory(card, rating, elapsed_days);
        let transition = self.transition(card, rating, elapsed_days, stability);

        let lapsed = rating == Rating::Again
            && matches!(card.state, State::Review | State::Relearning);
        let reps = increment("reps", card.reps)?;
        let lapses = if lapsed {
            increment("lapses", card.lapses)?
        } else {
            card.lapses
        };
        let scheduled_days = transition.interval.num_days() as T;
        let due = now.plus(transition.interval);

        let next = Card {
            state: transition.state,
            due,
            stability,
            difficulty,
            elapsed_days,
            scheduled_days,
            reps,
            lapses,
            step: transition.step,
            last_review: Some(now),
        };
        let log = ReviewLog {
            rating,
            state: next.state,
            due,
            stability,
            difficulty,
            elapsed_days,
            last_elapsed_days: card.elapsed_days,
            scheduled_days,
            review: now,
        };
        log::debug!(
            "Rated {rating}: {} -> {}, stability {stability:.4}, difficulty {difficulty:.4}, due {due}.",
            card.state,
            next.state
        );
        Ok(Scheduled { card: next, log })
    }

    /// Schedules the card under every rating.
    pub fn preview(&self, card: &Card, now: Timestamp) -> Fallible<Preview> {
        Ok(Preview {
            again: self.schedule(card, Rating::Again, now)?,
            hard: self.schedule(card, Rating::Hard, now)?,
            good: self.schedule(card, Rating::Good, now)?,
            easy: self.schedule(card, Rating::Easy, now)?,
        })
    }

    /// The predicted probability of recalling the card at `now`.
    pub fn retrievability(&self, card: &Card, now: Timestamp) -> Fallible<R> {
        card.validate()?;
        Ok(card.retrievability(now))
    }

    /// Forgets a card: it becomes New and due at `now`. The review history
    /// counters are kept unless `reset_counts` is set.
    pub fn reset(&self, card: &Card, now: Timestamp, reset_counts: bool) -> Fallible<Card> {
        card.validate()?;
        elapsed_days(card, now)?;
        let (reps, lapses) = if reset_counts {
            (0, 0)
        } else {
            (card.reps, card.lapses)
        };
        log::debug!("Resetting a {} card to new.", card.state);
        Ok(Card {
            reps,
            lapses,
            last_review: card.last_review,
            ..Card::new(now)
        })
    }

    /// The card's stability and difficulty after the review.
    fn memory(&self, card: &Card, rating: Rating, elapsed_days: T) -> (Stability, Difficulty) {
        let w = &self.params.weights;
        if card.state == State::New {
            return (initial_stability(w, rating), initial_difficulty(w, rating));
        }
        // Stored difficulty may have drifted out of range; the formulas are
        // only defined inside it.
        let d = card.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        let s = card.stability;
        let stability = if self.params.enable_short_term && elapsed_days < 1.0 {
            short_term_stability(w, s, rating)
        } else {
            let r = retrievability(elapsed_days, s);
            new_stability(w, d, s, r, rating)
        };
        // Forgetting never increases stability.
        let stability = if rating == Rating::Again {
            stability.min(s)
        } else {
            stability
        };
        (stability, new_difficulty(w, d, rating))
    }

    fn transition(
        &self,
        card: &Card,
        rating: Rating,
        elapsed_days: T,
        stability: Stability,
    ) -> Transition {
        let relearning_steps = &self.params.relearning_steps;
        match (card.state, rating) {
            (State::New | State::Learning, _) => {
                self.learning_transition(card.step, rating, stability)
            }
            (State::Review | State::Relearning, Rating::Again) => match relearning_steps.first() {
                Some(step) => Transition {
                    state: State::Relearning,
                    step: 0,
                    interval: step.duration(),
                },
                None => self.graduate(stability),
            },
            (State::Review, Rating::Hard) => {
                self.review(self.review_days_by_rating(card, elapsed_days).hard)
            }
            (State::Review, Rating::Good) => {
                self.review(self.review_days_by_rating(card, elapsed_days).good)
            }
            (State::Review, Rating::Easy) => {
                self.review(self.review_days_by_rating(card, elapsed_days).easy)
            }
            (State::Relearning, Rating::Hard) => {
                if (card.step as usize) < relearning_steps.len() {
                    Transition {
                        state: State::Relearning,
                        step: card.step,
                        interval: hard_step(relearning_steps, card.step),
                    }
                } else {
                    self.graduate(stability)
                }
            }
            (State::Relearning, Rating::Good | Rating::Easy) => self.graduate(stability),
        }
    }

    /// New and Learning cards walk through the learning steps; Good moves a
    /// step forward and graduates after the last one.
    fn learning_transition(&self, step: u32, rating: Rating, stability: Stability) -> Transition {
        let steps = &self.params.learning_steps;
        let index = step as usize;
        if steps.is_empty() || (index >= steps.len() && rating.is_success()) {
            return self.graduate(stability);
        }
        match rating {
            Rating::Again => Transition {
                state: State::Learning,
                step: 0,
                interval: steps[0].duration(),
            },
            Rating::Hard => Transition {
                state: State::Learning,
                step,
                interval: hard_step(steps, step),
            },
            Rating::Good => {
                if index + 1 >= steps.len() {
                    self.graduate(stability)
                } else {
                    Transition {
                        state: State::Learning,
                        step: step + 1,
                        interval: steps[index + 1].duration(),
                    }
                }
            }
            Rating::Easy => self.graduate(stability),
        }
    }

    fn graduate(&self, stability: Stability) -> Transition {
        self.review(self.review_days(stability))
    }

    /// The review interval for a stability, in whole days within the
    /// configured bounds.
    fn review_days(&self, stability: Stability) -> i64 {
        let min = self.params.minimum_interval as f64;
        let max = self.params.maximum_interval as f64;
        interval(self.params.request_retention, stability)
            .round()
            .clamp(min, max) as i64
    }

    fn review(&self, days: i64) -> Transition {
        Transition {
            state: State::Review,
            step: 0,
            interval: Duration::days(days),
        }
    }

    /// Review intervals for the passing ratings of a Review card, ordered
    /// so that Hard never outgrows Good and Easy always outgrows Good.
    fn review_days_by_rating(&self, card: &Card, elapsed_days: T) -> ReviewDays {
        let days = |g: Rating| {
            let (s, _) = self.memory(card, g, elapsed_days);
            self.review_days(s)
        };
        let good = days(Rating::Good);
        let hard = days(Rating::Hard).min(good);
        let good = good.max(hard + 1);
        let easy = days(Rating::Easy).max(good + 1);
        let max = self.params.maximum_interval as i64;
        ReviewDays {
            hard: hard.min(max),
            good: good.min(max),
            easy: easy.min(max),
        }
    }
}

fn elapsed_days(card: &Card, now: Timestamp) -> Fallible<T> {
    match card.last_review {
        None => Ok(0.0),
        Some(last_review) => {
            if now < last_review {
                return fail(
                    ErrorKind::InvalidReviewTime,
                    format!("review at {now} precedes the last review at {last_review}"),
                );
            }
            Ok(now.days_since(last_review) as T)
        }
    }
}

fn increment(name: &str, count: u32) -> Fallible<u32> {
    match count.checked_add(1) {
        Some(next) => Ok(next),
        None => fail(
            ErrorKind::InvalidCardState,
            format!("{name} counter is already at its maximum ({count})"),
        ),
    }
}

/// The delay after a Hard rating: the current step, except on the first
/// step, where it lies between the first and second steps.
fn hard_step(steps: &[Step], step: u32) -> Duration {
    let index = step as usize;
    match (index, steps.len()) {
        (0, 1) => steps[0].duration() * 3 / 2,
        (0, _) => (steps[0].duration() + steps[1].duration()) / 2,
        _ => steps[index].duration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsrs::MAX_STABILITY;
    use crate::fsrs::MIN_STABILITY;
    use crate::params::WEIGHT_LOWER_BOUNDS;
    use crate::params::WEIGHT_UPPER_BOUNDS;
    use crate::params::Weights;

    fn t0() -> Timestamp {
        Timestamp::from_millis(1_735_689_600_000).unwrap()
    }

    fn days(n: i64) -> Duration {
        Duration::days(n)
    }

    fn review_card(stability: Stability, difficulty: Difficulty) -> Card {
        Card {
            state: State::Review,
            due: t0().plus(days(10)),
            stability,
            difficulty,
            elapsed_days: 4.0,
            scheduled_days: 10.0,
            reps: 5,
            lapses: 0,
            step: 0,
            last_review: Some(t0()),
        }
    }

    #[test]
    fn test_new_card_good_enters_learning() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let Scheduled { card, log } = scheduler.schedule(&Card::new(t0()), Rating::Good, t0())?;
        assert_eq!(card.state(), State::Learning);
        assert_eq!(card.step(), 1);
        assert_eq!(card.reps(), 1);
        assert_eq!(card.lapses(), 0);
        assert_eq!(card.due(), t0().plus(Duration::minutes(10)));
        assert_eq!(card.scheduled_days(), 0.0);
        assert_eq!(card.last_review(), Some(t0()));
        assert_eq!(log.rating(), Rating::Good);
        assert_eq!(log.state(), State::Learning);
        assert_eq!(log.review(), t0());
        Ok(())
    }

    #[test]
    fn test_new_card_ratings() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let card = Card::new(t0());
        let again = scheduler.schedule(&card, Rating::Again, t0())?.card;
        assert_eq!(again.state(), State::Learning);
        assert_eq!(again.due(), t0().plus(Duration::minutes(1)));
        let hard = scheduler.schedule(&card, Rating::Hard, t0())?.card;
        assert_eq!(hard.state(), State::Learning);
        assert_eq!(hard.due(), t0().plus(Duration::seconds(330)));
        let easy = scheduler.schedule(&card, Rating::Easy, t0())?.card;
        assert_eq!(easy.state(), State::Review);
        assert!(easy.scheduled_days() >= 1.0);
        assert!(easy.stability() > again.stability());
        Ok(())
    }

    #[test]
    fn test_single_learning_step_graduates_on_good() -> Fallible<()> {
        let params = Parameters {
            learning_steps: vec![Step::minutes(10)],
            ..Parameters::default()
        };
        let scheduler = Scheduler::new(params)?;
        let card = Card::new(t0());
        let good = scheduler.schedule(&card, Rating::Good, t0())?.card;
        assert_eq!(good.state(), State::Review);
        let hard = scheduler.schedule(&card, Rating::Hard, t0())?.card;
        assert_eq!(hard.due(), t0().plus(Duration::minutes(15)));
        Ok(())
    }

    #[test]
    fn test_no_learning_steps_graduates_immediately() -> Fallible<()> {
        let params = Parameters {
            learning_steps: vec![],
            ..Parameters::default()
        };
        let scheduler = Scheduler::new(params)?;
        for rating in Rating::ALL {
            let card = scheduler.schedule(&Card::new(t0()), rating, t0())?.card;
            assert_eq!(card.state(), State::Review);
            assert!(card.scheduled_days() >= 1.0);
        }
        Ok(())
    }

    #[test]
    fn test_learning_walks_through_steps() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let first = scheduler.schedule(&Card::new(t0()), Rating::Good, t0())?.card;
        assert_eq!(first.state(), State::Learning);
        let now = first.due();
        let second = scheduler.schedule(&first, Rating::Good, now)?;
        assert_eq!(second.card.state(), State::Review);
        assert_eq!(second.card.step(), 0);
        assert!(second.card.scheduled_days() >= 1.0);
        assert_eq!(second.log.last_elapsed_days(), 0.0);
        Ok(())
    }

    #[test]
    fn test_learning_again_restarts_steps() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let first = scheduler.schedule(&Card::new(t0()), Rating::Good, t0())?.card;
        let again = scheduler.schedule(&first, Rating::Again, first.due())?.card;
        assert_eq!(again.state(), State::Learning);
        assert_eq!(again.step(), 0);
        assert_eq!(again.lapses(), 0);
        assert_eq!(again.due(), first.due().plus(Duration::minutes(1)));
        Ok(())
    }

    #[test]
    fn test_learning_hard_repeats_step() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let first = scheduler.schedule(&Card::new(t0()), Rating::Good, t0())?.card;
        let hard = scheduler.schedule(&first, Rating::Hard, first.due())?.card;
        assert_eq!(hard.state(), State::Learning);
        assert_eq!(hard.step(), 1);
        assert_eq!(hard.due(), first.due().plus(Duration::minutes(10)));
        Ok(())
    }

    #[test]
    fn test_learning_easy_skips_steps() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let first = scheduler.schedule(&Card::new(t0()), Rating::Again, t0())?.card;
        let easy = scheduler.schedule(&first, Rating::Easy, first.due())?.card;
        assert_eq!(easy.state(), State::Review);
        Ok(())
    }

    #[test]
    fn test_learning_step_beyond_config_graduates() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let first = scheduler.schedule(&Card::new(t0()), Rating::Good, t0())?.card;
        let card = Card { step: 7, ..first };
        let next = scheduler.schedule(&card, Rating::Hard, card.due())?.card;
        assert_eq!(next.state(), State::Review);
        Ok(())
    }

    #[test]
    fn test_review_again_lapses() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let card = review_card(10.0, 5.0);
        let now = t0().plus(days(10));
        let Scheduled { card: next, log } = scheduler.schedule(&card, Rating::Again, now)?;
        assert_eq!(next.state(), State::Relearning);
        assert_eq!(next.lapses(), 1);
        assert!(next.stability() < 10.0);
        assert_eq!(next.due(), now.plus(Duration::minutes(10)));
        assert_eq!(next.elapsed_days(), 10.0);
        assert_eq!(log.elapsed_days(), 10.0);
        assert_eq!(log.last_elapsed_days(), 4.0);
        Ok(())
    }

    #[test]
    fn test_review_again_without_relearning_steps() -> Fallible<()> {
        let params = Parameters {
            relearning_steps: vec![],
            ..Parameters::default()
        };
        let scheduler = Scheduler::new(params)?;
        let card = review_card(10.0, 5.0);
        let next = scheduler.schedule(&card, Rating::Again, t0().plus(days(10)))?.card;
        assert_eq!(next.state(), State::Review);
        assert_eq!(next.lapses(), 1);
        assert!(next.scheduled_days() >= 1.0);
        Ok(())
    }

    #[test]
    fn test_review_interval_ordering() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let card = review_card(10.0, 5.0);
        let preview = scheduler.preview(&card, t0().plus(days(10)))?;
        let hard = preview.hard.card.scheduled_days();
        let good = preview.good.card.scheduled_days();
        let easy = preview.easy.card.scheduled_days();
        assert!(hard < good);
        assert!(good < easy);
        for rating in [Rating::Hard, Rating::Good, Rating::Easy] {
            assert_eq!(preview.get(rating).card.state(), State::Review);
        }
        Ok(())
    }

    #[test]
    fn test_maximum_interval() -> Fallible<()> {
        let params = Parameters {
            maximum_interval: 30,
            ..Parameters::default()
        };
        let scheduler = Scheduler::new(params)?;
        let card = review_card(400.0, 2.0);
        let preview = scheduler.preview(&card, t0().plus(days(10)))?;
        assert_eq!(preview.easy.card.scheduled_days(), 30.0);
        assert!(preview.good.card.scheduled_days() <= 30.0);
        Ok(())
    }

    #[test]
    fn test_minimum_interval() -> Fallible<()> {
        let params = Parameters {
            minimum_interval: 3,
            ..Parameters::default()
        };
        let scheduler = Scheduler::new(params)?;
        let card = review_card(0.05, 9.0);
        let next = scheduler.schedule(&card, Rating::Hard, t0().plus(days(2)))?.card;
        assert!(next.scheduled_days() >= 3.0);
        Ok(())
    }

    #[test]
    fn test_relearning_transitions() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let lapsed = scheduler
            .schedule(&review_card(10.0, 5.0), Rating::Again, t0().plus(days(10)))?
            .card;
        assert_eq!(lapsed.state(), State::Relearning);

        let now = lapsed.due();
        let again = scheduler.schedule(&lapsed, Rating::Again, now)?.card;
        assert_eq!(again.state(), State::Relearning);
        assert_eq!(again.lapses(), lapsed.lapses() + 1);

        let hard = scheduler.schedule(&lapsed, Rating::Hard, now)?.card;
        assert_eq!(hard.state(), State::Relearning);
        assert_eq!(hard.due(), now.plus(Duration::minutes(15)));
        assert_eq!(hard.lapses(), lapsed.lapses());

        let good = scheduler.schedule(&lapsed, Rating::Good, now)?.card;
        assert_eq!(good.state(), State::Review);
        assert!(good.scheduled_days() >= 1.0);

        let easy = scheduler.schedule(&lapsed, Rating::Easy, now)?.card;
        assert_eq!(easy.state(), State::Review);
        Ok(())
    }

    #[test]
    fn test_same_day_review_uses_short_term_stability() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let card = review_card(10.0, 5.0);
        let now = t0().plus(Duration::hours(3));
        let next = scheduler.schedule(&card, Rating::Good, now)?.card;
        let expected = short_term_stability(&scheduler.params().weights, 10.0, Rating::Good);
        assert!((next.stability() - expected).abs() < 1e-12);
        assert_eq!(next.elapsed_days(), 0.0);
        Ok(())
    }

    #[test]
    fn test_review_before_last_review() {
        let scheduler = Scheduler::default();
        let card = review_card(10.0, 5.0);
        let err = scheduler
            .schedule(&card, Rating::Good, t0().plus(days(-1)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReviewTime);
    }

    #[test]
    fn test_corrupted_card_is_rejected() {
        let scheduler = Scheduler::default();
        let card = review_card(-1.0, 5.0);
        let err = scheduler
            .schedule(&card, Rating::Good, t0().plus(days(10)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCardState);
    }

    #[test]
    fn test_review_count_overflow_is_rejected() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let now = t0().plus(days(10));
        let card = Card {
            reps: u32::MAX - 1,
            ..review_card(10.0, 5.0)
        };
        let next = scheduler.schedule(&card, Rating::Good, now)?.card;
        assert_eq!(next.reps(), u32::MAX);
        for rating in Rating::ALL {
            let err = scheduler.schedule(&next, rating, now).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCardState);
        }
        Ok(())
    }

    #[test]
    fn test_extreme_weights_keep_memory_in_bounds() -> Fallible<()> {
        for values in [WEIGHT_LOWER_BOUNDS, WEIGHT_UPPER_BOUNDS] {
            let params = Parameters {
                weights: Weights::new(&values)?,
                ..Parameters::default()
            };
            let scheduler = Scheduler::new(params)?;
            let mut cards = vec![Card::new(t0()), review_card(10.0, 5.0)];
            for elapsed in [0, 10, 1000] {
                let now = t0().plus(days(elapsed));
                for card in cards.clone() {
                    for rating in Rating::ALL {
                        let next = scheduler.schedule(&card, rating, now)?.card;
                        assert!((MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&next.difficulty()));
                        assert!((MIN_STABILITY..=MAX_STABILITY).contains(&next.stability()));
                        next.validate()?;
                        cards.push(next);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_out_of_range_difficulty_is_clamped() -> Fallible<()> {
        let scheduler = Scheduler::default();
        for d in [-3.0, 0.0, 15.0] {
            let card = review_card(10.0, d);
            for rating in Rating::ALL {
                let next = scheduler.schedule(&card, rating, t0().plus(days(10)))?.card;
                assert!((MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&next.difficulty()));
                assert!(next.stability() >= MIN_STABILITY);
            }
        }
        Ok(())
    }

    #[test]
    fn test_reset() -> Fallible<()> {
        let scheduler = Scheduler::default();
        let card = Card {
            lapses: 2,
            ..review_card(10.0, 5.0)
        };
        let now = t0().plus(days(3));
        let kept = scheduler.reset(&card, now, false)?;
        assert_eq!(kept.state(), State::New);
        assert_eq!(kept.due(), now);
        assert_eq!(kept.reps(), 5);
        assert_eq!(kept.lapses(), 2);
        assert_eq!(kept.last_review(), Some(t0()));
        kept.validate()?;
        let cleared = scheduler.reset(&card, now, true)?;
        assert_eq!(cleared.reps(), 0);
        assert_eq!(cleared.lapses(), 0);
        let relearned = scheduler.schedule(&kept, Rating::Good, now)?.card;
        assert_eq!(relearned.state(), State::Learning);
        assert_eq!(relearned.elapsed_days(), 3.0);
        Ok(())
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let params = Parameters {
            request_retention: 1.5,
            ..Parameters::default()
        };
        let err = Scheduler::new(params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    }
}
