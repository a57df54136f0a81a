//! # Traits
//!
//! Case files refer to their companion files by name only. Where those names live on disk is
//! decided by a [`ResolvePath`] implementation handed to the [`CaseReader`](crate::CaseReader).
//!
//! Two implementations are provided. [`BaseDirectory`] joins every name onto a directory,
//! which is what [`read_case`](crate::read_case) uses with the case file's own directory.
//! Any closure `Fn(&str) -> PathBuf` works too:
//!
//! ```ignore
//! let reader = ensight::CaseReader::new()
//!     .with_resolver(|name: &str| std::path::Path::new("/data/run_12").join(name.to_lowercase()));
//! ```

use std::path::{Path, PathBuf};

/// Turns a file name written in a case file into a path that can be opened
pub trait ResolvePath: Send + Sync {
    fn resolve(&self, name: &str) -> PathBuf;
}

/// resolve names relative to a fixed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory {
    dir: PathBuf,
}

impl BaseDirectory {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResolvePath for BaseDirectory {
    fn resolve(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl<F> ResolvePath for F
where
    F: Fn(&str) -> PathBuf + Send + Sync,
{
    fn resolve(&self, name: &str) -> PathBuf {
        self(name)
    }
}
