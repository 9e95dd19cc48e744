//! Reading point files
//!
//! The format is plain text with one point per line, as two whitespace-separated
//! numbers `x y`. Blank lines and lines starting with `#` are ignored.

use crate::data::{DataError, Point, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse points from a reader
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        // Undecodable text is reported like any other malformed line
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => DataError::Parse {
                line: index + 1,
                reason: e.to_string(),
            },
            _ => DataError::Io(e),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        points.push(parse_line(trimmed, index + 1)?);
    }
    Ok(points)
}

/// Load points from a file on disk
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    profiling::scope!("loader::load_points");

    let file = File::open(path)?;
    let points = read_points(BufReader::new(file))?;
    tracing::debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

fn parse_line(line: &str, line_number: usize) -> Result<Point> {
    let parse_error = |reason: String| DataError::Parse {
        line: line_number,
        reason,
    };

    let mut fields = line.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(parse_error(format!("expected two coordinates, got {line:?}")));
    };

    let x: f64 = x
        .parse()
        .map_err(|e| parse_error(format!("bad x coordinate {x:?}: {e}")))?;
    let y: f64 = y
        .parse()
        .map_err(|e| parse_error(format!("bad y coordinate {y:?}: {e}")))?;
    Point::try_new(x, y).map_err(|e| parse_error(e.to_string()))
}
