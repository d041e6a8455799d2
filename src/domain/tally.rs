use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::extract::COMMIT_SENTINEL;
use crate::error::{GittallyError, Result};

/// Commit header as emitted by the log format: `@<name> <email> <epoch>@`.
/// The format has no escaping, so names or emails containing `<`, `>` or
/// `@` can defeat the delimiters; such commits may be dropped or split
/// oddly.
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@<(.*?)> <(.*?)> <(.*?)>@$").expect("header regex"));

/// One file's change line: `added<TAB>removed<TAB>path`. Binary markers
/// (`-`) fail the match and count as nothing.
static NUMSTAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\t(\d+)\t.*$").expect("numstat regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    pub name: String,
    pub email: String,
    pub added: u64,
    pub removed: u64,
    pub latest_commit: i64,
}

impl AuthorStats {
    pub fn total(&self) -> u64 {
        self.added + self.removed
    }
}

/// Aggregation options, passed in explicitly so the parser never reads
/// ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub require_email: bool,
}

/// Per-author tally. Entries live in a Vec so discovery order survives;
/// the map only indexes into it.
#[derive(Debug, Default)]
pub struct Tally {
    entries: Vec<AuthorStats>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn entry(&mut self, name: &str, email: &str, date: i64) -> &mut AuthorStats {
        let key = format!("{name} {email}");
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key, i);
                self.entries.push(AuthorStats {
                    name: name.to_string(),
                    email: email.to_string(),
                    added: 0,
                    removed: 0,
                    latest_commit: date,
                });
                i
            }
        };
        &mut self.entries[i]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order by total churn, descending. Each record is placed immediately
    /// before the first already-placed record with a strictly smaller
    /// total, so equal totals keep discovery order. Ascending output is the
    /// reversal of the descending sequence, never an independent sort, and
    /// flips the tie order with it.
    pub fn into_ordered(self, ascending: bool) -> Vec<AuthorStats> {
        let mut ordered: Vec<AuthorStats> = Vec::with_capacity(self.entries.len());
        for stats in self.entries {
            let at = ordered
                .iter()
                .position(|placed| placed.total() < stats.total())
                .unwrap_or(ordered.len());
            ordered.insert(at, stats);
        }
        if ascending {
            ordered.reverse();
        }
        ordered
    }
}

/// Fold the raw log text into a per-author tally.
///
/// The blob is split on the commit sentinel; a chunk whose first line does
/// not parse as a header is discarded whole, which also covers the empty
/// pre-sentinel chunk. Numstat lines that fail their pattern, or whose
/// counts do not fit a `u64`, are skipped one line at a time.
pub fn aggregate(raw: &str, opts: ParseOptions) -> Result<Tally> {
    let mut tally = Tally::default();

    for chunk in raw.split(COMMIT_SENTINEL) {
        let mut lines = chunk.lines();
        let header = match lines.next().and_then(|first| HEADER_RE.captures(first)) {
            Some(h) => h,
            None => continue,
        };

        let name = &header[1];
        let email = &header[2];
        let date: i64 = match header[3].parse() {
            Ok(d) => d,
            Err(_) => continue,
        };

        if email.is_empty() && opts.require_email {
            continue;
        }

        let entry = tally.entry(name, email, date);
        if date > entry.latest_commit {
            entry.latest_commit = date;
        }

        for line in lines {
            let Some(stat) = NUMSTAT_RE.captures(line) else {
                continue;
            };
            let (Ok(added), Ok(removed)) = (stat[1].parse::<u64>(), stat[2].parse::<u64>())
            else {
                continue;
            };
            entry.added += added;
            entry.removed += removed;
        }
    }

    if tally.is_empty() {
        return Err(GittallyError::EmptyResult);
    }
    Ok(tally)
}
