//! case file grammar
//!
//! ```text
//! FORMAT
//! type: ensight
//! GEOMETRY
//! model: [ts] [fs] geometry_file
//! measured: [ts] [fs] measured_file
//! match: match_file
//! VARIABLE
//! scalar per node: [ts] [fs] description file
//! complex vector per element: [ts] [fs] description real_file imaginary_file
//! TIME
//! ```

use super::error::{self, Case};
use super::lexer::{try_parse_variants, Field, Line, LineReader};
use crate::case::{CaseDescriptor, Sources, VariableDeclaration, VariableKind};
use std::io::BufRead;

/// path lines of the GEOMETRY section, with up to two leading set numbers
const PATH_LAYOUTS: [&[Field]; 3] = [
    &[Field::Word, Field::Int, Field::Int, Field::Capture],
    &[Field::Word, Field::Int, Field::Capture],
    &[Field::Word, Field::Capture],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Format,
    Geometry,
    Variable,
    TimeSeries,
}

impl Section {
    fn of(line: &Line) -> Option<Self> {
        if line.starts_with("FORMAT") {
            Some(Self::Format)
        } else if line.starts_with("GEOMETRY") {
            Some(Self::Geometry)
        } else if line.starts_with("VARIABLE") {
            Some(Self::Variable)
        } else if line.starts_with("TIME") || line.starts_with("FILE") {
            Some(Self::TimeSeries)
        } else {
            None
        }
    }
}

/// Parse a case file into the list of files and variables it describes.
///
/// `file` names the input in error messages.
pub fn parse_case<R: BufRead>(input: R, file: &str) -> Result<CaseDescriptor, Case> {
    let mut reader = LineReader::new(input, file);
    let mut descriptor = CaseDescriptor::default();
    let mut geometry_file = None;

    while let Some(line) = reader.next_data_line::<Case>()? {
        match Section::of(&line) {
            Some(Section::Format) => {
                log::debug!("FORMAT section");
                if let Some(format) = reader.next_data_line::<Case>()? {
                    log::debug!("case format `{}`", format.text().trim());
                }
            }
            Some(Section::Geometry) => {
                log::debug!("GEOMETRY section");
                parse_geometry_section(&mut reader, &mut descriptor, &mut geometry_file)?;
            }
            Some(Section::Variable) => {
                log::debug!("VARIABLE section");
                parse_variable_section(&mut reader, &mut descriptor)?;
            }
            Some(Section::TimeSeries) => {
                return Err(error::UnsupportedTimeSeries::new(format!(
                    "`{}` contains a {} section",
                    file,
                    line.first_token().unwrap_or_default()
                ))
                .into());
            }
            None => {
                log::warn!(
                    "{}: ignoring line outside of any section: `{}`",
                    reader.location_of(&line),
                    line.text().trim()
                );
            }
        }
    }

    descriptor.geometry_file = geometry_file
        .ok_or_else(|| error::MissingDescriptorPath::new(file.to_string()))?;

    Ok(descriptor)
}

/// Read `model:`, `measured:` and `match:` lines. Stops at the first line not starting
/// with `m`, leaving it unread.
fn parse_geometry_section<R: BufRead>(
    reader: &mut LineReader<R>,
    descriptor: &mut CaseDescriptor,
    geometry_file: &mut Option<String>,
) -> Result<(), Case> {
    loop {
        let starts_with_m = match reader.peek_data_line::<Case>()? {
            Some(line) => line.starts_with("m"),
            None => false,
        };

        if !starts_with_m {
            return Ok(());
        }

        let line = reader.expect_data_line::<Case>("a GEOMETRY line")?;

        let slot = match line.first_token() {
            Some("model:") => &mut *geometry_file,
            Some("measured:") => &mut descriptor.measured_file,
            Some("match:") => &mut descriptor.match_file,
            _ => {
                log::warn!(
                    "{}: ignoring unknown GEOMETRY line `{}`",
                    reader.location_of(&line),
                    line.text().trim()
                );
                continue;
            }
        };

        let path = try_parse_variants(&line, &PATH_LAYOUTS)
            .and_then(|matched| matched.captures.first().map(|path| path.to_string()))
            .ok_or_else(|| reader.malformed(&line, "a file name"))?;

        log::debug!("{} -> `{}`", line.first_token().unwrap_or_default(), path);
        *slot = Some(path);
    }
}

/// Read variable declarations until the end of the file or a time series section
fn parse_variable_section<R: BufRead>(
    reader: &mut LineReader<R>,
    descriptor: &mut CaseDescriptor,
) -> Result<(), Case> {
    loop {
        let at_section_end = match reader.peek_data_line::<Case>()? {
            Some(line) => Section::of(line) == Some(Section::TimeSeries),
            None => true,
        };

        if at_section_end {
            return Ok(());
        }

        let line = reader.expect_data_line::<Case>("a VARIABLE line")?;

        if let Some(declaration) = parse_variable_line(reader, &line)? {
            log::debug!(
                "declared {:?} `{}` in {:?}",
                declaration.kind,
                declaration.label,
                declaration.sources.files()
            );
            descriptor.variables.push(declaration);
        }
    }
}

/// Parse one declaration. `constant` lines carry no file and are skipped.
fn parse_variable_line<R: BufRead>(
    reader: &LineReader<R>,
    line: &Line,
) -> Result<Option<VariableDeclaration>, Case> {
    let malformed = || {
        error::MalformedVariableLine::new(reader.location_of(line), line.text().trim().to_string())
    };

    let tokens: Vec<&str> = line.tokens().collect();

    // (kind, number of tokens before the set numbers)
    let (kind, prefix) = match tokens.as_slice() {
        ["constant", ..] => {
            log::warn!(
                "{}: constant variables are not read: `{}`",
                reader.location_of(line),
                line.text().trim()
            );
            return Ok(None);
        }
        ["scalar", "per", "node:", ..] => (VariableKind::ScalarPerNode, 3),
        ["scalar", "per", "element:", ..] => (VariableKind::ScalarPerElement, 3),
        ["scalar", "per", "measured", "node:", ..] => (VariableKind::ScalarPerMeasuredNode, 4),
        ["vector", "per", "node:", ..] => (VariableKind::VectorPerNode, 3),
        ["vector", "per", "element:", ..] => (VariableKind::VectorPerElement, 3),
        ["vector", "per", "measured", "node:", ..] => (VariableKind::VectorPerMeasuredNode, 4),
        ["tensor", "symm", "per", "node:", ..] => (VariableKind::TensorSymmPerNode, 4),
        ["tensor", "symm", "per", "element:", ..] => (VariableKind::TensorSymmPerElement, 4),
        ["complex", "scalar", "per", "node:", ..] => (VariableKind::ComplexScalarPerNode, 4),
        ["complex", "scalar", "per", "element:", ..] => {
            (VariableKind::ComplexScalarPerElement, 4)
        }
        ["complex", "vector", "per", "node:", ..] => (VariableKind::ComplexVectorPerNode, 4),
        ["complex", "vector", "per", "element:", ..] => {
            (VariableKind::ComplexVectorPerElement, 4)
        }
        _ => return Err(malformed().into()),
    };

    // description, then one file or a real / imaginary pair
    let payload = if kind.is_complex() { 3 } else { 2 };

    let layouts: Vec<Vec<Field>> = (0..=2)
        .rev()
        .map(|set_numbers| {
            std::iter::repeat(Field::Word)
                .take(prefix)
                .chain(std::iter::repeat(Field::Int).take(set_numbers))
                .chain(std::iter::repeat(Field::Capture).take(payload))
                .collect()
        })
        .collect();
    let layouts: Vec<&[Field]> = layouts.iter().map(Vec::as_slice).collect();

    let matched = try_parse_variants(line, &layouts).ok_or_else(malformed)?;

    let label = matched.captures[0].to_string();
    let sources = if kind.is_complex() {
        Sources::Complex {
            real: matched.captures[1].to_string(),
            imaginary: matched.captures[2].to_string(),
        }
    } else {
        Sources::Real(matched.captures[1].to_string())
    };

    if kind.is_measured() {
        log::warn!(
            "{}: measured variable `{}` will not be read",
            reader.location_of(line),
            label
        );
    }

    Ok(Some(VariableDeclaration {
        kind,
        label,
        sources,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(input: &str) -> Result<CaseDescriptor, Case> {
        crate::init_log();
        parse_case(input.as_bytes(), "test.case")
    }

    #[test]
    fn full_case_file() {
        let input = "\
FORMAT
type: ensight

GEOMETRY
model: 1 engine.geo
measured: engine.mgeo
match: engine.match

VARIABLE
# a comment between declarations
constant per case: Re 1000
scalar per node: 1 2 Pressure engine.scl
vector per element: Velocity engine.vel
   tensor symm per node: Stress engine.ten
complex scalar per node: Mode engine_r.scl engine_i.scl
scalar per measured node: Probe engine.mscl
";
        let case = parse(input).unwrap();

        assert_eq!(case.geometry_file, "engine.geo");
        assert_eq!(case.measured_file.as_deref(), Some("engine.mgeo"));
        assert_eq!(case.match_file.as_deref(), Some("engine.match"));

        let kinds: Vec<_> = case.variables.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            [
                VariableKind::ScalarPerNode,
                VariableKind::VectorPerElement,
                VariableKind::TensorSymmPerNode,
                VariableKind::ComplexScalarPerNode,
                VariableKind::ScalarPerMeasuredNode,
            ]
        );

        assert_eq!(case.variables[0].label, "Pressure");
        assert_eq!(case.variables[0].sources, Sources::Real("engine.scl".into()));
        assert_eq!(
            case.variables[3].sources,
            Sources::Complex {
                real: "engine_r.scl".into(),
                imaginary: "engine_i.scl".into()
            }
        );
        assert_eq!(case.variables[4].label, "Probe");
        assert_eq!(case.variables[4].sources, Sources::Real("engine.mscl".into()));
    }

    #[test]
    fn model_line_set_numbers_are_optional() {
        for line in ["model: mesh.geo", "model: 1 mesh.geo", "model: 1 2 mesh.geo"] {
            let input = format!("GEOMETRY\n{line}\n");
            assert_eq!(parse(&input).unwrap().geometry_file, "mesh.geo");
        }
    }

    #[test]
    fn geometry_only() {
        let case = parse("FORMAT\ntype: ensight\nGEOMETRY\nmodel: mesh.geo\n").unwrap();
        assert_eq!(case.geometry_file, "mesh.geo");
        assert!(case.variables.is_empty());
        assert!(case.measured_file.is_none());
    }

    #[test]
    fn missing_model_line() {
        let err = parse("FORMAT\ntype: ensight\nGEOMETRY\nmeasured: m.geo\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDescriptorPath);

        let err = parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDescriptorPath);
    }

    #[test]
    fn time_section_is_unsupported() {
        let input = "\
GEOMETRY
model: mesh***.geo
VARIABLE
scalar per node: p p***.scl
TIME
time set: 1
";
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTimeSeries);
    }

    #[test]
    fn malformed_variable_lines() {
        for line in [
            "scalar per face: p p.scl",
            "vector node: v v.vel",
            "scalar per node: p",
            "complex vector per element: v v_r.vel",
            "pressure",
        ] {
            let input = format!("GEOMETRY\nmodel: mesh.geo\nVARIABLE\n{line}\n");
            let err = parse(&input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedVariableLine, "{line}");
            assert!(err.to_string().contains("test.case:4"));
        }
    }

    #[test]
    fn declaration_order_is_file_order() {
        let input = "\
GEOMETRY
model: mesh.geo
VARIABLE
vector per node: b b.vel
scalar per node: a a.scl
scalar per element: c c.scl
";
        let case = parse(input).unwrap();
        let labels: Vec<_> = case.variables.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, ["b", "a", "c"]);
    }
}
