#![doc = include_str!("../README.md")]

pub mod array;
pub mod case;
mod data;
pub mod mesh;
pub mod parse;
pub mod prelude;
mod reader;
mod traits;
mod utils;
mod write_geometry;

pub use traits::{BaseDirectory, ResolvePath};

pub use data::Dataset;

pub use array::{Attachment, FieldArray, PartScope};
pub use case::{CaseDescriptor, VariableDeclaration, VariableKind};
pub use mesh::{CellShape, ElementKind, Mesh, Part};

pub use parse::{ErrorKind, ParseError};
pub use reader::{read_case, CaseReader};
pub use write_geometry::write_geometry;

pub use ndarray;

use std::path::PathBuf;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not open `{}`: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Time dependent data is not supported, `{0}` names a series of files")]
    UnsupportedTimeSeries(String),
    #[error("{0}")]
    Parse(#[from] parse::ParseError),
}

impl Error {
    /// which of the failure classes this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::UnsupportedTimeSeries(_) => ErrorKind::UnsupportedTimeSeries,
            Self::Parse(err) => err.kind(),
        }
    }
}

#[cfg(test)]
pub(crate) fn init_log() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .format_timestamp(None)
        .try_init();
}
