use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered years sampled along the horizontal axis.
///
/// Always holds at least two strictly increasing years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct YearAxis {
    years: Vec<i32>,
}

impl YearAxis {
    pub fn new(years: Vec<i32>) -> ChartResult<Self> {
        if years.len() < 2 {
            return Err(ChartError::InvalidYearAxis(format!(
                "at least two years are required, got {}",
                years.len()
            )));
        }
        if let Some(pair) = years.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidYearAxis(format!(
                "years must be strictly increasing, found {} before {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { years })
    }

    /// Evenly spaced years from `first` through `last` inclusive.
    pub fn stepped(first: i32, last: i32, step: i32) -> ChartResult<Self> {
        if step <= 0 {
            return Err(ChartError::InvalidYearAxis(format!(
                "step must be > 0, got {step}"
            )));
        }
        let years = (first..=last).step_by(step as usize).collect();
        Self::new(years)
    }

    /// The twelve decades 1900 through 2010.
    #[must_use]
    pub fn decades() -> Self {
        Self {
            years: (1900..=2010).step_by(10).collect(),
        }
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.years.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }
}

impl Default for YearAxis {
    fn default() -> Self {
        Self::decades()
    }
}

impl TryFrom<Vec<i32>> for YearAxis {
    type Error = ChartError;

    fn try_from(years: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<YearAxis> for Vec<i32> {
    fn from(axis: YearAxis) -> Self {
        axis.years
    }
}
