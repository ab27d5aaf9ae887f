use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use holdout::{HoldoutConfig, NeighborPolicy, TieBreak};

/// Hold-out evaluation of a k-nearest-neighbors classifier on labeled 2-D points.
#[derive(Parser, Debug)]
#[command(name = "knn-holdout", version, about)]
pub struct Cli {
    /// Whitespace-separated `x1 x2 label` file.
    #[arg(short, long, default_value = "base1.txt")]
    pub input: PathBuf,

    /// Fraction of the shuffled records used for training.
    #[arg(short, long, default_value_t = 0.8)]
    pub ratio: f64,

    /// Number of neighbors that vote.
    #[arg(short, default_value_t = 4)]
    pub k: usize,

    /// Seed of the shuffle.
    #[arg(long, default_value_t = holdout::DEFAULT_SEED)]
    pub seed: u64,

    /// Use every training record when k exceeds the training set.
    #[arg(long)]
    pub truncate: bool,

    /// How tied votes are resolved.
    #[arg(long, value_enum, default_value_t = TieBreakArg::Smallest)]
    pub tie_break: TieBreakArg,

    /// Classify test records on all cores.
    #[arg(long)]
    pub parallel: bool,

    /// Write every record with its set and prediction to this CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Render a scatter plot to this PNG file (needs the `plot` feature).
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Smallest tied label wins.
    Smallest,
    /// Tied label of the closest neighbor wins.
    Nearest,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Smallest => TieBreak::SmallestLabel,
            TieBreakArg::Nearest => TieBreak::NearestNeighbor,
        }
    }
}

impl Cli {
    pub fn holdout_config(&self) -> HoldoutConfig {
        let policy = if self.truncate {
            NeighborPolicy::Truncate
        } else {
            NeighborPolicy::Strict
        };
        HoldoutConfig::new(self.k)
            .with_ratio(self.ratio)
            .with_seed(self.seed)
            .with_policy(policy)
            .with_tie_break(self.tie_break.into())
            .with_parallel(self.parallel)
    }
}
