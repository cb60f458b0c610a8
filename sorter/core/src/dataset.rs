//! Dataset Generation
//!
//! Produces the values a session sorts. Values are drawn uniformly from an
//! inclusive range; the shape then arranges them to exercise best and worst
//! cases of the algorithms.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{SortError, SortResult};

/// Default number of bars
pub const DEFAULT_COUNT: usize = 50;

/// Default lower bound of the value domain
pub const DEFAULT_MIN_VALUE: u32 = 0;

/// Default upper bound of the value domain
pub const DEFAULT_MAX_VALUE: u32 = 100;

/// Arrangement of generated values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetShape {
    /// Uniformly random order
    #[default]
    Random,
    /// Already ascending
    Sorted,
    /// Descending
    Reversed,
    /// Ascending with roughly one in ten elements displaced
    NearlySorted,
}

impl DatasetShape {
    pub const ALL: [DatasetShape; 4] = [
        Self::Random,
        Self::Sorted,
        Self::Reversed,
        Self::NearlySorted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly-sorted",
        }
    }

    /// Next shape, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetShape {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "random" => Ok(Self::Random),
            "sorted" => Ok(Self::Sorted),
            "reversed" | "reverse" => Ok(Self::Reversed),
            "nearly-sorted" | "nearly" => Ok(Self::NearlySorted),
            _ => Err(SortError::UnknownShape(s.to_string())),
        }
    }
}

/// What to generate: how many values, from which range, in which shape
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub count: usize,
    pub min_value: u32,
    pub max_value: u32,
    pub shape: DatasetShape,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            shape: DatasetShape::default(),
        }
    }
}

impl DatasetSpec {
    pub fn validate(&self) -> SortResult<()> {
        if self.min_value > self.max_value {
            return Err(SortError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Generate values using the given random source
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SortResult<Vec<u32>> {
        self.validate()?;

        let mut values: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(self.min_value..=self.max_value))
            .collect();

        match self.shape {
            DatasetShape::Random => {}
            DatasetShape::Sorted => values.sort_unstable(),
            DatasetShape::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
            DatasetShape::NearlySorted => {
                values.sort_unstable();
                if !values.is_empty() {
                    for _ in 0..values.len() / 10 {
                        let i = rng.gen_range(0..values.len());
                        let j = rng.gen_range(0..values.len());
                        values.swap(i, j);
                    }
                }
            }
        }

        Ok(values)
    }

    /// Reproducible generation from a seed
    pub fn generate_with_seed(&self, seed: u64) -> SortResult<Vec<u32>> {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Generation from the thread-local entropy source
    pub fn generate_random(&self) -> SortResult<Vec<u32>> {
        self.generate(&mut rand::thread_rng())
    }
}
