//! variable file grammar
//!
//! A variable file starts with one description line. Per-node files may then hold a flat
//! block of values for the shared point list, entity after entity:
//!
//! ```text
//! description
//! v1 v2 v3 v4 v5 v6
//! v7
//! ```
//!
//! after which (and for per-element files, instead of which) come part sections. A part is
//! either written as one dense block, component after component, or as one section per
//! element kind holding the values of that kind's cells in geometry file order:
//!
//! ```text
//! part 1
//! block
//! x1 x2 x3 ...
//! y1 y2 y3 ...
//! part 2
//! tria3
//! v1 v2
//! quad4
//! v3
//! ```

use super::error::{self, Variable};
use super::geometry::{is_binary_header, is_numeric, part_number};
use super::lexer::{Line, LineReader};
use super::rows;
use crate::array::{Attachment, FieldArray, PartScope};
use crate::case::VariableKind;
use crate::mesh::{ElementKind, Mesh, Part, UnstructuredPart};
use ndarray::Array2;
use std::io::BufRead;

/// Decode one variable file over `mesh`
///
/// Returns one array per scope the file covers: the shared point list for a flat per-node
/// block, then one array for every part section, in file order. All arrays carry `label`.
pub fn parse_variable<R: BufRead>(
    input: R,
    file: &str,
    mesh: &Mesh,
    kind: VariableKind,
    label: &str,
) -> Result<Vec<FieldArray>, Variable> {
    let mut reader = LineReader::new(input, file);
    let decoder = Decoder {
        mesh,
        label,
        attachment: kind.attachment(),
        components: kind.components(),
    };

    let description = match reader.read_line::<Variable>()? {
        Some(line) => line,
        None => {
            let expected = "a description line".to_string();
            return Err(error::TruncatedInput::new(reader.location(), expected).into());
        }
    };

    if is_binary_header(&description) {
        return Err(error::UnsupportedEncoding::new(file.to_string()).into());
    }

    let mut arrays = Vec::new();

    let starts_with_part = match reader.peek_data_line::<Variable>()? {
        Some(line) => line.first_token() == Some("part"),
        None => true,
    };

    if !starts_with_part {
        arrays.push(decoder.read_shared_points(&mut reader)?);
    }

    while let Some(line) = reader.next_data_line::<Variable>()? {
        arrays.push(decoder.read_part(&mut reader, &line)?);
    }

    log::debug!("`{}`: {} arrays of `{}`", file, arrays.len(), label);

    Ok(arrays)
}

struct Decoder<'a> {
    mesh: &'a Mesh,
    label: &'a str,
    attachment: Attachment,
    components: usize,
}

impl<'a> Decoder<'a> {
    fn array(&self, scope: PartScope, values: Array2<f64>) -> FieldArray {
        FieldArray::new(self.label.to_string(), self.attachment, scope, values)
    }

    /// the flat block at the top of a per-node file, covering every unstructured part
    fn read_shared_points<R: BufRead>(
        &self,
        reader: &mut LineReader<R>,
    ) -> Result<FieldArray, Variable> {
        if self.attachment == Attachment::Cell {
            let line = reader.expect_data_line::<Variable>("`part <number>`")?;
            return Err(reader.malformed(&line, "`part <number>`").into());
        }

        let values = rows::read_entity_major::<_, Variable>(
            reader,
            self.mesh.point_count(),
            self.components,
            "values of the shared points",
        )?;

        Ok(self.array(PartScope::SharedPoints, values))
    }

    /// a `part <n>` section, `line` is the part line itself
    fn read_part<R: BufRead>(
        &self,
        reader: &mut LineReader<R>,
        line: &Line,
    ) -> Result<FieldArray, Variable> {
        if is_numeric(line) {
            return Err(error::InconsistentEntityCount::new(
                reader.location_of(line),
                0,
                format!("found `{}` after the last expected value", line.text().trim()),
            )
            .into());
        }

        let number = part_number::<_, Variable>(reader, line)?;
        let id = number - 1;

        let part = self
            .mesh
            .part(id)
            .ok_or_else(|| error::UnknownPart::new(reader.location_of(line), number))?;

        let layout = reader.expect_data_line::<Variable>("`block` or an element type")?;

        let values = if layout.first_token() == Some("block") {
            self.read_block(reader, id)?
        } else {
            match (self.attachment, part) {
                (Attachment::Cell, Part::Unstructured(part)) => {
                    self.read_kind_sections(reader, number, part, layout)?
                }
                (Attachment::Point, _) => {
                    return Err(error::LayoutMismatch::new(
                        reader.location_of(&layout),
                        number,
                        "per-node values of a part must be written as a `block`".into(),
                    )
                    .into());
                }
                (Attachment::Cell, Part::Structured(_)) => {
                    return Err(error::LayoutMismatch::new(
                        reader.location_of(&layout),
                        number,
                        "a structured part only has `block` values".into(),
                    )
                    .into());
                }
            }
        };

        self.check_section_end(reader, number)?;

        Ok(self.array(PartScope::Part(id), values))
    }

    /// dense values for every point or cell of a part, one component plane after another
    fn read_block<R: BufRead>(
        &self,
        reader: &mut LineReader<R>,
        id: usize,
    ) -> Result<Array2<f64>, Variable> {
        let count = match self.attachment {
            Attachment::Point => self.mesh.part_point_count(id),
            Attachment::Cell => self.mesh.part(id).map(Part::cell_count),
        }
        .unwrap_or(0);

        rows::read_component_major::<_, Variable>(
            reader,
            count,
            self.components,
            &format!("block values of part {}", id + 1),
        )
    }

    /// Per element kind sections. Value `i` of a section belongs to the `i`th cell read
    /// with that kind, cells of kinds missing from the file keep zeros.
    fn read_kind_sections<R: BufRead>(
        &self,
        reader: &mut LineReader<R>,
        number: usize,
        part: &UnstructuredPart,
        first_section: Line,
    ) -> Result<Array2<f64>, Variable> {
        let mut values = Array2::zeros((part.cell_count(), self.components));
        let mut section = first_section;

        loop {
            let kind = section
                .first_token()
                .and_then(ElementKind::from_keyword)
                .ok_or_else(|| {
                    error::UnknownElementKind::new(
                        reader.location_of(&section),
                        section.first_token().unwrap_or_default().to_string(),
                    )
                })?;

            // a kind the part has no cells of holds no values
            let cells = part.groups.get(kind).unwrap_or(&[]);

            let read = rows::read_entity_major::<_, Variable>(
                reader,
                cells.len(),
                self.components,
                &format!("{} values of part {}", kind, number),
            )?;

            for (row, cell) in read.rows().into_iter().zip(cells) {
                values.row_mut(*cell).assign(&row);
            }

            let next = reader.peek_data_line::<Variable>()?.cloned();
            match next {
                Some(line) if line.first_token() != Some("part") && !is_numeric(&line) => {
                    section = reader.expect_data_line::<Variable>("an element type")?;
                }
                _ => return Ok(values),
            }
        }
    }

    /// after a complete section only a `part` line or the end of the file may follow
    fn check_section_end<R: BufRead>(
        &self,
        reader: &mut LineReader<R>,
        number: usize,
    ) -> Result<(), Variable> {
        let extra = match reader.peek_data_line::<Variable>()? {
            Some(line) if is_numeric(line) => Some(line.number()),
            _ => None,
        };

        match extra {
            Some(line) => Err(error::InconsistentEntityCount::new(
                error::Location::new(reader.file().to_string(), line),
                number,
                "the file holds more values than the part has entities".into(),
            )
            .into()),
            None => Ok(()),
        }
    }
}
