use crate::mesh::{Cell, IdMode, Mesh, Part, StructuredPart, UnstructuredPart};
use crate::parse::rows::{write_rows, IBLANKS_PER_LINE, VALUES_PER_LINE};
use crate::Error;

use std::io::Write;

/// Write a mesh in the ascii geometry file format
///
/// Parts are written in ascending part order. Cells of an unstructured part are written as
/// runs of consecutive cells sharing a shape, each run under the linear keyword of that
/// shape, so higher order kinds come back as their linear counterpart. A mesh decoded from
/// linear element kinds decodes back to an identical mesh.
pub fn write_geometry<W: Write>(mut writer: W, mesh: &Mesh) -> Result<(), Error> {
    writeln!(writer, "{}", mesh.description[0])?;
    writeln!(writer, "{}", mesh.description[1])?;
    writeln!(writer, "node id {}", mesh.node_ids)?;
    writeln!(writer, "element id {}", mesh.element_ids)?;

    write_coordinates(&mut writer, mesh)?;

    for (id, part) in &mesh.parts {
        writeln!(writer, "part {}", id + 1)?;
        writeln!(writer, "{}", part.description())?;

        match part {
            Part::Structured(part) => write_structured(&mut writer, part)?,
            Part::Unstructured(part) => write_unstructured(&mut writer, mesh, part)?,
        }
    }

    Ok(())
}

/// external id of the point at `index`
fn point_id(mesh: &Mesh, index: usize) -> usize {
    mesh.point_ids
        .as_ref()
        .and_then(|ids| ids.ids().get(index).copied())
        .unwrap_or(index + 1)
}

fn write_coordinates<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), Error> {
    writeln!(writer, "coordinates")?;
    writeln!(writer, "{:8}", mesh.point_count())?;

    let with_ids = mesh.node_ids == IdMode::Given;
    let mut buffer = ryu::Buffer::new();

    for (index, point) in mesh.points.iter().enumerate() {
        let mut line = String::new();

        if with_ids {
            line.push_str(&point_id(mesh, index).to_string());
            line.push(' ');
        }

        for (i, value) in point.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(buffer.format(*value));
        }

        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }

    Ok(())
}

fn write_structured<W: Write>(writer: &mut W, part: &StructuredPart) -> Result<(), Error> {
    if part.iblanked {
        writeln!(writer, "block iblanked")?;
    } else {
        writeln!(writer, "block")?;
    }

    let [i, j, k] = part.dimensions;
    writeln!(writer, "{:8} {:7} {:7}", i, j, k)?;

    for component in 0..3 {
        write_rows(
            writer,
            part.points.iter().map(|point| point[component]),
            VALUES_PER_LINE,
        )?;
    }

    if part.iblanked {
        let flags = (0..part.points.len()).map(|index| usize::from(!part.is_blanked(index)));
        write_rows(writer, flags, IBLANKS_PER_LINE)?;
    }

    Ok(())
}

fn write_unstructured<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    part: &UnstructuredPart,
) -> Result<(), Error> {
    if part.cells.is_empty() {
        // a part needs at least one section to be read back
        writeln!(writer, "point")?;
        writeln!(writer, "{:8}", 0)?;
        return Ok(());
    }

    let with_ids = matches!(mesh.element_ids, IdMode::Given | IdMode::Ignore);
    let mut element_id = 0;

    for run in part.cells.chunk_by(|a, b| a.shape == b.shape) {
        let kind = run[0].shape.linear_kind();
        writeln!(writer, "{}", kind)?;
        writeln!(writer, "{:8}", run.len())?;

        for cell in run {
            element_id += 1;
            write_cell(writer, mesh, cell, with_ids.then_some(element_id))?;
        }
    }

    Ok(())
}

fn write_cell<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    cell: &Cell,
    element_id: Option<usize>,
) -> Result<(), Error> {
    let mut line = String::new();

    if let Some(id) = element_id {
        push_id(&mut line, id);
    }

    for index in &cell.point_indices {
        push_id(&mut line, point_id(mesh, *index));
    }

    line.push('\n');
    writer.write_all(line.as_bytes())?;

    Ok(())
}

/// ids are right aligned in columns of 8, wider ids still get a separating space
fn push_id(line: &mut String, id: usize) {
    line.push_str(&format!(" {:7}", id));
}
