//! reading and parsing ascii EnSight6 files
//!
//! Every stage reads from any [`BufRead`](std::io::BufRead) and is usable on its own:
//!
//! * [`parse_case`] turns a case file into a [`CaseDescriptor`](crate::case::CaseDescriptor)
//! * [`parse_geometry`] turns a geometry file into a [`Mesh`](crate::mesh::Mesh)
//! * [`parse_variable`] decodes a variable file over an already decoded mesh
//!
//! most of the time you will not need to call these directly, instead use
//! [`read_case`](crate::read_case) or a [`CaseReader`](crate::CaseReader).

mod case;
pub mod error;
mod geometry;
pub mod lexer;
pub mod rows;
mod variable;

pub use case::parse_case;
pub use error::{ErrorKind, Location, ParseError};
pub use geometry::parse_geometry;
pub use variable::parse_variable;
