use serde::Serialize;

use crate::domain::tally::AuthorStats;
use crate::error::{GittallyError, Result};

/// Only identity columns go to disk; the stats stay on screen.
#[derive(Serialize)]
struct Row<'a> {
    name: &'a str,
    email: &'a str,
}

pub fn write_authors(path: &str, authors: &[AuthorStats]) -> Result<()> {
    let wrap = |source: csv::Error| GittallyError::OutputWrite {
        path: path.to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for a in authors {
        writer
            .serialize(Row {
                name: &a.name,
                email: &a.email,
            })
            .map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;
    Ok(())
}
