//! geometry file grammar
//!
//! ```text
//! description line 1
//! description line 2
//! node id <off|given|assign|ignore>
//! element id <off|given|assign|ignore>
//! coordinates
//! <number of points>
//! [id] x y z                    (one line per point)
//! part <n>
//! part description
//! <element keyword>             (unstructured part: any number of sections)
//! <number of elements>
//! [id] n1 n2 ...                (one line per element)
//! part <n>
//! part description
//! block [iblanked]              (structured part)
//! i j k
//! x values, then y values, then z values, 6 per line
//! iblank flags, 10 per line     (only when iblanked)
//! ```

use super::error::{self, Geometry};
use super::lexer::{try_parse_variants, Field, Line, LineReader};
use super::rows::{self, IBLANKS_PER_LINE, RESERVE_LIMIT};
use crate::mesh::{
    ElementKind, IdMode, Mesh, Part, PointIdMap, StructuredPart, UnstructuredPart,
};
use std::io::BufRead;

const COORDINATE_LAYOUTS: [&[Field]; 2] = [
    &[Field::CaptureInt, Field::Capture, Field::Capture, Field::Capture],
    &[Field::Capture, Field::Capture, Field::Capture],
];

const DIMENSION_LAYOUT: [&[Field]; 1] =
    [&[Field::CaptureInt, Field::CaptureInt, Field::CaptureInt]];

/// Decode a geometry file into its points and parts
///
/// `file` names the input in error messages.
pub fn parse_geometry<R: BufRead>(input: R, file: &str) -> Result<Mesh, Geometry> {
    let mut reader = LineReader::new(input, file);
    let mut mesh = Mesh::new();

    let first = read_description(&mut reader)?;
    if is_binary_header(&first) {
        return Err(error::UnsupportedEncoding::new(file.to_string()).into());
    }
    let second = read_description(&mut reader)?;
    mesh.description = [first.text().to_string(), second.text().to_string()];

    mesh.node_ids = read_id_mode(&mut reader, "node")?;
    mesh.element_ids = read_id_mode(&mut reader, "element")?;

    read_coordinates(&mut reader, &mut mesh)?;

    // the part being read, 0 while still in the coordinate block
    let mut last_number = 0;

    while let Some(line) = reader.next_data_line::<Geometry>()? {
        if is_numeric(&line) {
            return Err(too_many_records(&reader, &line, last_number).into());
        }

        let number = part_number::<_, Geometry>(&reader, &line)?;
        last_number = number;
        let id = number - 1;

        if mesh.parts.contains_key(&id) {
            return Err(error::DuplicatePart::new(reader.location_of(&line), number).into());
        }

        let description = read_description(&mut reader)?.text().trim().to_string();
        let layout = reader.expect_data_line::<Geometry>("an element type or `block`")?;

        let part = if layout.first_token() == Some("block") {
            let part = read_structured_part(&mut reader, &layout, description)?;
            log::debug!(
                "part {}: structured {:?}, {} blanked points",
                number,
                part.dimensions,
                part.blanked_points.len()
            );
            Part::Structured(part)
        } else {
            let part = read_unstructured_part(&mut reader, &mesh, number, layout, description)?;
            log::debug!(
                "part {}: {} cells in {} element sections",
                number,
                part.cells.len(),
                part.groups.kinds().count()
            );
            Part::Unstructured(part)
        };

        mesh.parts.insert(id, part);
    }

    Ok(mesh)
}

/// A binary geometry file starts with the line `C Binary`
pub(crate) fn is_binary_header(line: &Line) -> bool {
    let tokens: Vec<&str> = line.tokens().collect();

    match tokens.as_slice() {
        [c, binary] => c.eq_ignore_ascii_case("c") && binary.eq_ignore_ascii_case("binary"),
        _ => false,
    }
}

/// a data line whose first token is a number, rather than a keyword
pub(crate) fn is_numeric(line: &Line) -> bool {
    line.first_token()
        .map(|token| token.parse::<f64>().is_ok())
        .unwrap_or(false)
}

/// the 1-based part number of a `part <n>` line
pub(crate) fn part_number<R: BufRead, E: From<error::MalformedRecord>>(
    reader: &LineReader<R>,
    line: &Line,
) -> Result<usize, E> {
    let mut tokens = line.tokens();

    match (tokens.next(), tokens.next().and_then(|n| n.parse::<usize>().ok())) {
        (Some("part"), Some(number)) if number > 0 => Ok(number),
        _ => Err(reader.malformed(line, "`part <number>`").into()),
    }
}

/// descriptions are free-form and may be blank, so they are read verbatim
fn read_description<R: BufRead>(reader: &mut LineReader<R>) -> Result<Line, Geometry> {
    match reader.read_line::<Geometry>()? {
        Some(line) => Ok(line),
        None => {
            let expected = "a description line".to_string();
            Err(error::TruncatedInput::new(reader.location(), expected).into())
        }
    }
}

fn read_id_mode<R: BufRead>(reader: &mut LineReader<R>, entity: &str) -> Result<IdMode, Geometry> {
    let expected = format!("`{} id <off|given|assign|ignore>`", entity);
    let line = reader.expect_data_line::<Geometry>(&expected)?;
    let mut tokens = line.tokens();

    match (tokens.next(), tokens.next(), tokens.next().and_then(IdMode::from_keyword)) {
        (Some(first), Some("id"), Some(mode)) if first == entity => Ok(mode),
        _ => Err(reader.malformed(&line, &expected).into()),
    }
}

/// parse the first token of a line as a count
pub(crate) fn read_count<R: BufRead, E: error::LineError>(
    reader: &mut LineReader<R>,
    expected: &str,
) -> Result<usize, E> {
    let line = reader.expect_data_line::<E>(expected)?;

    line.first_token()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| reader.malformed(&line, expected).into())
}

fn read_coordinates<R: BufRead>(
    reader: &mut LineReader<R>,
    mesh: &mut Mesh,
) -> Result<(), Geometry> {
    let line = reader.expect_data_line::<Geometry>("`coordinates`")?;
    if line.first_token() != Some("coordinates") {
        return Err(reader.malformed(&line, "`coordinates`").into());
    }

    let count = read_count::<_, Geometry>(reader, "the number of points")?;
    let given = mesh.node_ids == IdMode::Given;

    let mut ids = if given { Some(PointIdMap::new()) } else { None };
    mesh.points.reserve(count.min(RESERVE_LIMIT));

    for _ in 0..count {
        let line = reader.expect_data_line::<Geometry>("a point")?;

        let matched = try_parse_variants(&line, &COORDINATE_LAYOUTS)
            .ok_or_else(|| reader.malformed(&line, "`[id] x y z`"))?;

        let (id, xyz) = if matched.variant == 0 {
            (matched.captures[0].parse::<usize>().ok(), &matched.captures[1..])
        } else {
            (None, &matched.captures[..])
        };

        let mut point = [0.; 3];
        for (slot, token) in point.iter_mut().zip(xyz) {
            *slot = token
                .parse::<f64>()
                .map_err(|_| reader.malformed(&line, "`[id] x y z`"))?;
        }

        if let Some(ids) = ids.as_mut() {
            let id = id.ok_or_else(|| reader.malformed(&line, "`id x y z` (node ids are given)"))?;
            ids.push(id);
        }

        mesh.points.push(point);
    }

    log::debug!("read {} points (node ids {})", count, mesh.node_ids);
    mesh.point_ids = ids;

    Ok(())
}

fn read_structured_part<R: BufRead>(
    reader: &mut LineReader<R>,
    layout: &Line,
    description: String,
) -> Result<StructuredPart, Geometry> {
    let iblanked = layout.token(1) == Some("iblanked");

    let line = reader.expect_data_line::<Geometry>("block dimensions `i j k`")?;
    let matched = try_parse_variants(&line, &DIMENSION_LAYOUT)
        .ok_or_else(|| reader.malformed(&line, "block dimensions `i j k`"))?;

    let mut dimensions = [0; 3];
    for (slot, token) in dimensions.iter_mut().zip(&matched.captures) {
        *slot = token
            .parse::<usize>()
            .map_err(|_| reader.malformed(&line, "block dimensions `i j k`"))?;
    }

    let count = dimensions
        .iter()
        .try_fold(1usize, |count, d| count.checked_mul(*d))
        .ok_or_else(|| reader.malformed(&line, "block dimensions with a representable point count"))?;

    let planes = rows::read_component_major::<_, Geometry>(reader, count, 3, "block coordinates")?;
    let points = planes
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2]])
        .collect();

    let blanked_points = if iblanked {
        rows::read_rows::<_, i64, Geometry>(reader, count, IBLANKS_PER_LINE, "iblank flags")?
            .into_iter()
            .enumerate()
            .filter(|(_, flag)| *flag == 0)
            .map(|(index, _)| index)
            .collect()
    } else {
        Default::default()
    };

    Ok(StructuredPart {
        description,
        dimensions,
        iblanked,
        blanked_points,
        points,
    })
}

fn read_unstructured_part<R: BufRead>(
    reader: &mut LineReader<R>,
    mesh: &Mesh,
    number: usize,
    first_section: Line,
    description: String,
) -> Result<UnstructuredPart, Geometry> {
    let mut part = UnstructuredPart {
        description,
        ..Default::default()
    };

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

        read_element_section(reader, mesh, kind, &mut part)?;

        let next = reader.peek_data_line::<Geometry>()?.cloned();
        let next_is_section = match next {
            None => false,
            Some(line) if line.first_token() == Some("part") => false,
            Some(line) if is_numeric(&line) => {
                return Err(too_many_records(reader, &line, number).into());
            }
            Some(_) => true,
        };

        if !next_is_section {
            return Ok(part);
        }

        section = reader.expect_data_line::<Geometry>("an element type")?;
    }
}

fn read_element_section<R: BufRead>(
    reader: &mut LineReader<R>,
    mesh: &Mesh,
    kind: ElementKind,
    part: &mut UnstructuredPart,
) -> Result<(), Geometry> {
    let count = read_count::<_, Geometry>(reader, &format!("the number of {} elements", kind))?;

    if kind.is_higher_order() && count > 0 {
        log::warn!(
            "{}: {} {} elements are read as linear {:?} cells, mid-side nodes are dropped",
            reader.location(),
            count,
            kind,
            kind.shape()
        );
    }

    let nodes = kind.node_count();
    let with_id: Vec<Field> = std::iter::once(Field::Int)
        .chain(std::iter::repeat(Field::CaptureInt).take(nodes))
        .collect();
    let without_id: Vec<Field> = std::iter::repeat(Field::CaptureInt).take(nodes).collect();
    let layouts = [with_id.as_slice(), without_id.as_slice()];

    let expected = format!("{} node ids of a {} element", nodes, kind);
    let corners = kind.shape().point_count();

    for _ in 0..count {
        let line = reader.expect_data_line::<Geometry>(&expected)?;
        let matched =
            try_parse_variants(&line, &layouts).ok_or_else(|| reader.malformed(&line, &expected))?;

        let point_indices = matched.captures[..corners]
            .iter()
            .map(|token| resolve_point(reader, &line, mesh, token))
            .collect::<Result<Vec<_>, _>>()?;

        part.push_cell(kind, point_indices);
    }

    Ok(())
}

/// turn a 1-based node id from an element record into an index into the mesh's points
fn resolve_point<R: BufRead>(
    reader: &LineReader<R>,
    line: &Line,
    mesh: &Mesh,
    token: &str,
) -> Result<usize, Geometry> {
    let id = token
        .parse::<usize>()
        .map_err(|_| reader.malformed(line, "a positive node id"))?;

    let index = match &mesh.point_ids {
        Some(ids) => ids.resolve(id),
        None => id.checked_sub(1).filter(|index| *index < mesh.point_count()),
    };

    index.ok_or_else(|| error::UnknownPoint::new(reader.location_of(line), id).into())
}

fn too_many_records<R: BufRead>(
    reader: &LineReader<R>,
    line: &Line,
    part: usize,
) -> error::InconsistentEntityCount {
    error::InconsistentEntityCount::new(
        reader.location_of(line),
        part,
        format!("found `{}` after the declared number of records", line.text().trim()),
    )
}
