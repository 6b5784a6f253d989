use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Popularity rank of a name in one sampled year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// 1-based position, 1 being the most popular.
    Ranked(u32),
    /// No rank recorded for that year.
    Unranked,
}

impl Rank {
    #[must_use]
    pub fn is_ranked(self) -> bool {
        matches!(self, Self::Ranked(_))
    }

    /// Value fed to the vertical mapping; unranked years sit at `max_rank`.
    #[must_use]
    pub fn plot_value(self, max_rank: u32) -> f64 {
        match self {
            Self::Ranked(rank) => f64::from(rank),
            Self::Unranked => f64::from(max_rank),
        }
    }

    /// Label text for the rank, using `glyph` when unranked.
    #[must_use]
    pub fn label(self, glyph: &str) -> String {
        match self {
            Self::Ranked(rank) => rank.to_string(),
            Self::Unranked => glyph.to_owned(),
        }
    }
}

impl From<Option<u32>> for Rank {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unranked, Self::Ranked)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked(rank) => write!(f, "{rank}"),
            Self::Unranked => f.write_str("unranked"),
        }
    }
}

/// Per-name ranks keyed by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSeries {
    ranks: BTreeMap<i32, u32>,
}

impl NameSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from `(year, rank)` pairs; later pairs overwrite earlier ones.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, u32)>) -> Self {
        Self {
            ranks: pairs.into_iter().collect(),
        }
    }

    /// Converts a string-keyed table (`"1900" -> "42"`) as produced by
    /// external loaders.
    pub fn from_string_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> ChartResult<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut series = Self::new();
        for (year, rank) in entries {
            let year_text = year.as_ref().trim();
            let rank_text = rank.as_ref().trim();
            let year = year_text.parse::<i32>().map_err(|_| {
                ChartError::InvalidData(format!("year `{year_text}` is not an integer"))
            })?;
            let rank = parse_rank(rank_text)?;
            series.insert(year, rank);
        }
        Ok(series)
    }

    pub fn insert(&mut self, year: i32, rank: u32) {
        self.ranks.insert(year, rank);
    }

    /// Records `rank` for `year`, keeping the existing value when it is better.
    pub fn record_best(&mut self, year: i32, rank: u32) {
        self.ranks
            .entry(year)
            .and_modify(|current| *current = (*current).min(rank))
            .or_insert(rank);
    }

    #[must_use]
    pub fn rank_for(&self, year: i32) -> Rank {
        self.ranks.get(&year).copied().into()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.ranks.iter().map(|(year, rank)| (*year, *rank))
    }
}

/// Parses a 1-based rank.
pub fn parse_rank(text: &str) -> ChartResult<u32> {
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(ChartError::InvalidData(format!(
            "rank `{text}` must be a positive integer"
        ))),
        Ok(rank) => Ok(rank),
    }
}

/// All known names in insertion order.
pub type NameLookup = IndexMap<String, NameSeries>;
