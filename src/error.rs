use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GittallyError>;

#[derive(Error, Debug)]
pub enum GittallyError {
    #[error("not a git repository: {0}")]
    Acquisition(#[source] git2::Error),
    #[error("clone of {url} failed: {source}")]
    Clone { url: String, source: git2::Error },
    #[error("git log failed ({0})")]
    Extraction(ExitStatus),
    #[error("no authors found")]
    EmptyResult,
    #[error("could not write csv to {path}: {source}")]
    OutputWrite { path: String, source: csv::Error },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
