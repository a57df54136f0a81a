//! Common traits and types that are useful for working with `ensight`
#![allow(unused_imports)]

pub use crate::array::{Attachment, FieldArray, PartScope};
pub use crate::case::{CaseDescriptor, Shape, Sources, VariableDeclaration, VariableKind};
pub use crate::data::Dataset;
pub use crate::mesh::{
    Cell, CellShape, ElementKind, IdMode, Mesh, Part, StructuredPart, UnstructuredPart,
};
pub use crate::reader::{read_case, CaseReader};
pub use crate::traits::{BaseDirectory, ResolvePath};
pub use crate::{Error, ErrorKind};

pub(crate) use crate::parse;
pub(crate) use crate::parse::ParseError;
