use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::Repository;
use log::debug;
use tempfile::TempDir;

use crate::error::{GittallyError, Result};

/// A resolved working directory: the caller's own repository, or a
/// disposable clone that disappears again when this is dropped.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
    _clone: Option<TempDir>,
}

impl Workspace {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Remote sources are recognized by prefix; everything else is treated as a
/// local path.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http") || source.starts_with("git@github")
}

pub fn acquire(source: &str) -> Result<Workspace> {
    if is_remote(source) {
        clone_remote(source)
    } else {
        open_local(source)
    }
}

fn open_local(path: &str) -> Result<Workspace> {
    let repo = Repository::discover(path).map_err(GittallyError::Acquisition)?;
    let dir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
    debug!("using repository at {}", dir.display());
    Ok(Workspace { dir, _clone: None })
}

fn clone_remote(url: &str) -> Result<Workspace> {
    let tmp = TempDir::new()?;
    remove_on_interrupt(tmp.path());

    debug!("cloning {url} into {}", tmp.path().display());
    RepoBuilder::new()
        .clone(url, tmp.path())
        .map_err(|source| GittallyError::Clone {
            url: url.to_string(),
            source,
        })?;

    Ok(Workspace {
        dir: tmp.path().to_path_buf(),
        _clone: Some(tmp),
    })
}

/// The `TempDir` destructor covers normal exits; an interrupt bypasses
/// drops, so the handler removes the clone itself before terminating.
fn remove_on_interrupt(path: &Path) {
    let path = path.to_path_buf();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = std::fs::remove_dir_all(&path);
        std::process::exit(130);
    }) {
        debug!("no interrupt handler installed: {e}");
    }
}
