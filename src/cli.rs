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

use clap::Parser;

use crate::cmd::new::print_new_card;
use crate::cmd::preview::print_preview;
use crate::cmd::recall::print_recall;
use crate::cmd::reset::print_reset;
use crate::cmd::review::print_review;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Print a new, never-reviewed card.
    New {
        /// Creation time in epoch milliseconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
    },
    /// Rate a card and print the rescheduled card with its review log.
    Review {
        /// Path to the card JSON, or `-` for standard input.
        #[arg(long)]
        card: String,
        /// The rating: 1 = Again, 2 = Hard, 3 = Good, 4 = Easy.
        #[arg(long, allow_negative_numbers = true)]
        rating: f64,
        /// Review time in epoch milliseconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
        /// Path to a TOML file with scheduler parameters.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print what every rating would do to a card.
    Preview {
        /// Path to the card JSON, or `-` for standard input.
        #[arg(long)]
        card: String,
        /// Review time in epoch milliseconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
        /// Path to a TOML file with scheduler parameters.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the predicted probability of recalling a card.
    Recall {
        /// Path to the card JSON, or `-` for standard input.
        #[arg(long)]
        card: String,
        /// Time in epoch milliseconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
        /// Path to a TOML file with scheduler parameters.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Forget a card, making it new and due immediately.
    Reset {
        /// Path to the card JSON, or `-` for standard input.
        #[arg(long)]
        card: String,
        /// Reset time in epoch milliseconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
        /// Also zero the review and lapse counters.
        #[arg(long)]
        reset_counts: bool,
        /// Path to a TOML file with scheduler parameters.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::New { now } => print_new_card(now),
        Command::Review {
            card,
            rating,
            now,
            config,
        } => print_review(&card, rating, now, config),
        Command::Preview { card, now, config } => print_preview(&card, now, config),
        Command::Recall { card, now, config } => print_recall(&card, now, config),
        Command::Reset {
            card,
            now,
            reset_counts,
            config,
        } => print_reset(&card, now, reset_counts, config),
    }
}
