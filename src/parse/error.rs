//! error types for the three decoding stages
//!
//! Each stage (case file, geometry file, variable files) has its own enumeration listing
//! only the failures that stage can run into. The structs they wrap carry the context
//! (file, line, part number) needed to find the offending record.

use derive_more::{Constructor, Display, From};

/// A line within one of the input files. Lines are counted from 1.
#[derive(Display, Debug, Clone, PartialEq, Eq, Constructor)]
#[display(fmt = "{file}:{line}")]
pub struct Location {
    pub file: String,
    pub line: usize,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "failed to read `{file}`: {err}")]
pub struct Io {
    file: String,
    err: std::io::Error,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "`{file}` is not an ascii file, binary encoded files cannot be read")]
pub struct UnsupportedEncoding {
    file: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: file ended while reading {expected}")]
pub struct TruncatedInput {
    location: Location,
    expected: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: expected {expected}, found `{found}`")]
pub struct MalformedRecord {
    location: Location,
    expected: String,
    found: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: invalid VARIABLE line `{line}`")]
pub struct MalformedVariableLine {
    location: Location,
    line: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "`{file}` does not name a geometry file (missing `model:` line)")]
pub struct MissingDescriptorPath {
    file: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "time dependent data is not supported: {what}")]
pub struct UnsupportedTimeSeries {
    what: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: unknown element type `{keyword}`")]
pub struct UnknownElementKind {
    location: Location,
    keyword: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: element references point id {id} which was never declared")]
pub struct UnknownPoint {
    location: Location,
    id: usize,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: part {part} does not exist in the geometry")]
pub struct UnknownPart {
    location: Location,
    part: usize,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: part {part} is declared more than once")]
pub struct DuplicatePart {
    location: Location,
    part: usize,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: entity count of part {part} does not match: {detail}")]
pub struct InconsistentEntityCount {
    location: Location,
    part: usize,
    detail: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "{location}: layout of part {part} does not match the geometry: {detail}")]
pub struct LayoutMismatch {
    location: Location,
    part: usize,
    detail: String,
}

/// Flat classification of every failure the decoder can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingDescriptorPath,
    FileNotFound,
    UnsupportedTimeSeries,
    MalformedVariableLine,
    UnknownElementKind,
    InconsistentEntityCount,
    TruncatedInput,
    UnsupportedEncoding,
    MalformedRecord,
    UnknownPoint,
    UnknownPart,
    DuplicatePart,
    LayoutMismatch,
    Io,
}

/// Errors every line oriented reader can produce, independent of the grammar on top of it
pub trait LineError:
    From<Io> + From<UnsupportedEncoding> + From<TruncatedInput> + From<MalformedRecord>
{
}

impl<T> LineError for T where
    T: From<Io> + From<UnsupportedEncoding> + From<TruncatedInput> + From<MalformedRecord>
{
}

#[derive(Debug, thiserror::Error, From)]
pub enum ParseError {
    #[error("error parsing case file: {0}")]
    Case(Case),
    #[error("error parsing geometry file: {0}")]
    Geometry(Geometry),
    #[error("error parsing variable file: {0}")]
    Variable(Variable),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Case(e) => e.kind(),
            Self::Geometry(e) => e.kind(),
            Self::Variable(e) => e.kind(),
        }
    }
}

#[derive(Debug, thiserror::Error, From)]
pub enum Case {
    #[error("{0}")]
    Io(Io),
    #[error("{0}")]
    UnsupportedEncoding(UnsupportedEncoding),
    #[error("{0}")]
    TruncatedInput(TruncatedInput),
    #[error("{0}")]
    MalformedRecord(MalformedRecord),
    #[error("{0}")]
    MalformedVariableLine(MalformedVariableLine),
    #[error("{0}")]
    MissingDescriptorPath(MissingDescriptorPath),
    #[error("{0}")]
    UnsupportedTimeSeries(UnsupportedTimeSeries),
}

impl Case {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedEncoding(_) => ErrorKind::UnsupportedEncoding,
            Self::TruncatedInput(_) => ErrorKind::TruncatedInput,
            Self::MalformedRecord(_) => ErrorKind::MalformedRecord,
            Self::MalformedVariableLine(_) => ErrorKind::MalformedVariableLine,
            Self::MissingDescriptorPath(_) => ErrorKind::MissingDescriptorPath,
            Self::UnsupportedTimeSeries(_) => ErrorKind::UnsupportedTimeSeries,
        }
    }
}

#[derive(Debug, thiserror::Error, From)]
pub enum Geometry {
    #[error("{0}")]
    Io(Io),
    #[error("{0}")]
    UnsupportedEncoding(UnsupportedEncoding),
    #[error("{0}")]
    TruncatedInput(TruncatedInput),
    #[error("{0}")]
    MalformedRecord(MalformedRecord),
    #[error("{0}")]
    UnknownElementKind(UnknownElementKind),
    #[error("{0}")]
    UnknownPoint(UnknownPoint),
    #[error("{0}")]
    DuplicatePart(DuplicatePart),
    #[error("{0}")]
    InconsistentEntityCount(InconsistentEntityCount),
}

impl Geometry {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedEncoding(_) => ErrorKind::UnsupportedEncoding,
            Self::TruncatedInput(_) => ErrorKind::TruncatedInput,
            Self::MalformedRecord(_) => ErrorKind::MalformedRecord,
            Self::UnknownElementKind(_) => ErrorKind::UnknownElementKind,
            Self::UnknownPoint(_) => ErrorKind::UnknownPoint,
            Self::DuplicatePart(_) => ErrorKind::DuplicatePart,
            Self::InconsistentEntityCount(_) => ErrorKind::InconsistentEntityCount,
        }
    }
}

#[derive(Debug, thiserror::Error, From)]
pub enum Variable {
    #[error("{0}")]
    Io(Io),
    #[error("{0}")]
    UnsupportedEncoding(UnsupportedEncoding),
    #[error("{0}")]
    TruncatedInput(TruncatedInput),
    #[error("{0}")]
    MalformedRecord(MalformedRecord),
    #[error("{0}")]
    UnknownElementKind(UnknownElementKind),
    #[error("{0}")]
    UnknownPart(UnknownPart),
    #[error("{0}")]
    InconsistentEntityCount(InconsistentEntityCount),
    #[error("{0}")]
    LayoutMismatch(LayoutMismatch),
}

impl Variable {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedEncoding(_) => ErrorKind::UnsupportedEncoding,
            Self::TruncatedInput(_) => ErrorKind::TruncatedInput,
            Self::MalformedRecord(_) => ErrorKind::MalformedRecord,
            Self::UnknownElementKind(_) => ErrorKind::UnknownElementKind,
            Self::UnknownPart(_) => ErrorKind::UnknownPart,
            Self::InconsistentEntityCount(_) => ErrorKind::InconsistentEntityCount,
            Self::LayoutMismatch(_) => ErrorKind::LayoutMismatch,
        }
    }
}
