//! Loader for decade rank files.
//!
//! Each file starts with the year on its own line, followed by lines of the
//! form `rank,name,name`. Whitespace around fields and blank lines are
//! ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{NameLookup, parse_rank};
use crate::error::{ChartError, ChartResult};

/// Merges one rank file into `lookup` and returns the year it covers.
///
/// A name listed twice for the same year keeps its better rank.
pub fn read_rank_file(text: &str, lookup: &mut NameLookup) -> ChartResult<i32> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| ChartError::InvalidData("rank file has no year header".to_owned()))?;
    let year = header.parse::<i32>().map_err(|_| {
        ChartError::InvalidData(format!(
            "line {header_line}: expected a year, found `{header}`"
        ))
    })?;

    let mut entries = 0usize;
    for (line_no, line) in lines {
        let mut fields = line.split(',').map(str::trim);
        let rank_text = fields.next().unwrap_or_default();
        let rank = parse_rank(rank_text).map_err(|_| {
            ChartError::InvalidData(format!(
                "line {line_no}: rank `{rank_text}` must be a positive integer"
            ))
        })?;

        let mut names = 0usize;
        for name in fields {
            if name.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "line {line_no}: empty name field"
                )));
            }
            lookup
                .entry(name.to_owned())
                .or_default()
                .record_best(year, rank);
            names += 1;
        }
        if names == 0 {
            return Err(ChartError::InvalidData(format!(
                "line {line_no}: rank {rank} has no names"
            )));
        }
        entries += names;
    }

    if entries == 0 {
        warn!(year, "rank file lists no names");
    }
    debug!(year, entries, known_names = lookup.len(), "merged rank file");
    Ok(year)
}

/// Loads every file in `paths` into a fresh lookup.
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> ChartResult<NameLookup> {
    let mut lookup = NameLookup::new();
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let year = read_rank_file(&text, &mut lookup)?;
        debug!(path = %path.display(), year, "loaded rank file");
    }
    Ok(lookup)
}
