//! fixed width numeric rows
//!
//! Numbers in geometry and variable files are packed a fixed number of values per line
//! (6 for floats, 10 for iblank flags), with a final short line when the count is not a
//! multiple of the row width. Only the expected number of tokens is taken from each line,
//! anything after them is ignored.

use super::error::{self, LineError};
use super::lexer::LineReader;
use ndarray::Array2;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// floats stored on a single line
pub const VALUES_PER_LINE: usize = 6;

/// iblank flags stored on a single line
pub const IBLANKS_PER_LINE: usize = 10;

/// Most entries reserved up front for a count read from a file. Longer inputs grow as their
/// lines are read, so a bogus count fails with truncation instead of a huge allocation.
pub(crate) const RESERVE_LIMIT: usize = 1 << 16;

/// Read `count` numbers packed `per_line` to a line
pub(crate) fn read_rows<R, T, E>(
    reader: &mut LineReader<R>,
    count: usize,
    per_line: usize,
    expected: &str,
) -> Result<Vec<T>, E>
where
    R: BufRead,
    T: FromStr,
    E: LineError,
{
    let mut values = Vec::with_capacity(count.min(RESERVE_LIMIT));

    while values.len() < count {
        let line = reader.expect_data_line::<E>(expected)?;
        let take = per_line.min(count - values.len());
        let mut tokens = line.tokens();

        for _ in 0..take {
            let value = tokens
                .next()
                .and_then(|token| token.parse::<T>().ok())
                .ok_or_else(|| reader.malformed(&line, expected))?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Read `count` entities of `components` values each, stored one entity after another.
///
/// Rows always hold 6 values, so this packs 6 scalars, 2 vectors, or 1 symmetric tensor per
/// line. The returned array has one row per entity.
pub(crate) fn read_entity_major<R, E>(
    reader: &mut LineReader<R>,
    count: usize,
    components: usize,
    expected: &str,
) -> Result<Array2<f64>, E>
where
    R: BufRead,
    E: LineError,
{
    let total = count.checked_mul(components).ok_or_else(|| {
        E::from(error::MalformedRecord::new(
            reader.location(),
            expected.to_string(),
            format!("{} entities of {} values", count, components),
        ))
    })?;
    let values = read_rows::<_, f64, E>(reader, total, VALUES_PER_LINE, expected)?;

    // read_rows returns exactly count * components values
    Ok(Array2::from_shape_vec((count, components), values)
        .unwrap_or_else(|_| Array2::zeros((count, components))))
}

/// Read `count` entities of `components` values each, stored one component plane after
/// another (every x, then every y, ...). Each plane starts on a new line.
pub(crate) fn read_component_major<R, E>(
    reader: &mut LineReader<R>,
    count: usize,
    components: usize,
    expected: &str,
) -> Result<Array2<f64>, E>
where
    R: BufRead,
    E: LineError,
{
    let mut planes = Vec::with_capacity(components);

    for _ in 0..components {
        planes.push(read_rows::<_, f64, E>(reader, count, VALUES_PER_LINE, expected)?);
    }

    // every plane holds exactly `count` values
    Ok(Array2::from_shape_fn((count, components), |(entity, component)| {
        planes[component][entity]
    }))
}

/// numbers that can be written back into a row
pub(crate) trait FormatValue: Copy {
    fn push_to(self, out: &mut String);
}

impl FormatValue for f64 {
    fn push_to(self, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(self));
    }
}

impl FormatValue for usize {
    fn push_to(self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

/// Write values `per_line` to a line, finishing with a short line if needed
pub(crate) fn write_rows<W, T, I>(writer: &mut W, values: I, per_line: usize) -> std::io::Result<()>
where
    W: Write,
    T: FormatValue,
    I: IntoIterator<Item = T>,
{
    let mut line = String::new();
    let mut on_line = 0;

    for value in values {
        if on_line > 0 {
            line.push(' ');
        }
        value.push_to(&mut line);
        on_line += 1;

        if on_line == per_line {
            line.push('\n');
            writer.write_all(line.as_bytes())?;
            line.clear();
            on_line = 0;
        }
    }

    if on_line > 0 {
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }

    Ok(())
}
