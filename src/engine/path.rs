//! SVG path data parsing and flattening.
//!
//! Outline geometry arrives as SVG path data strings. This module parses
//! the command stream and flattens it into closed polygonal subpaths that
//! the rasteriser can fill. Supported commands: M/m, L/l, H/h, V/v, C/c,
//! Q/q, Z/z, with the standard implicit-repeat rules (a moveto continues
//! as a lineto).

use crate::constants::CURVE_SEGMENTS;

use super::error::EngineError;

/// A 2D point in outline coordinates.
pub type Point = (f64, f64);

/// Parse path data into flattened subpaths.
///
/// Each subpath is a polyline; the rasteriser treats it as closed whether
/// or not the source ended it with a `Z`. Curves are flattened with a fixed
/// segment count, which is plenty for wall-outline geometry.
pub fn flatten_path(data: &str) -> Result<Vec<Vec<Point>>, EngineError> {
    let mut scanner = Scanner::new(data);
    let mut subpaths: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut cursor: Point = (0.0, 0.0);
    let mut subpath_start: Point = (0.0, 0.0);
    let mut command: Option<char> = None;

    loop {
        scanner.skip_separators();
        let Some(next) = scanner.peek() else { break };

        if next.is_ascii_alphabetic() {
            scanner.advance();
            command = Some(next);
        } else {
            // Implicit repeat of the previous command; a moveto continues
            // as a lineto per the SVG grammar
            command = match command {
                Some('M') => Some('L'),
                Some('m') => Some('l'),
                Some(c) => Some(c),
                None => {
                    return Err(EngineError::invalid_path_data(
                        "path data must start with a command",
                    ));
                }
            };
        }

        let cmd = command.unwrap_or('M');
        let relative = cmd.is_ascii_lowercase();

        match cmd.to_ascii_uppercase() {
            'M' => {
                let target = scanner.point()?;
                if current.len() > 1 {
                    subpaths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                cursor = resolve(cursor, target, relative);
                subpath_start = cursor;
                current.push(cursor);
            }
            'L' => {
                let target = scanner.point()?;
                if current.is_empty() {
                    current.push(cursor);
                }
                cursor = resolve(cursor, target, relative);
                current.push(cursor);
            }
            'H' => {
                let x = scanner.number()?;
                if current.is_empty() {
                    current.push(cursor);
                }
                cursor.0 = if relative { cursor.0 + x } else { x };
                current.push(cursor);
            }
            'V' => {
                let y = scanner.number()?;
                if current.is_empty() {
                    current.push(cursor);
                }
                cursor.1 = if relative { cursor.1 + y } else { y };
                current.push(cursor);
            }
            'C' => {
                let c1 = resolve(cursor, scanner.point()?, relative);
                let c2 = resolve(cursor, scanner.point()?, relative);
                let end = resolve(cursor, scanner.point()?, relative);
                if current.is_empty() {
                    current.push(cursor);
                }
                flatten_cubic(&mut current, cursor, c1, c2, end);
                cursor = end;
            }
            'Q' => {
                let ctrl = resolve(cursor, scanner.point()?, relative);
                let end = resolve(cursor, scanner.point()?, relative);
                if current.is_empty() {
                    current.push(cursor);
                }
                flatten_quadratic(&mut current, cursor, ctrl, end);
                cursor = end;
            }
            'Z' => {
                if current.len() > 1 {
                    subpaths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                cursor = subpath_start;
            }
            other => {
                return Err(EngineError::invalid_path_data(format!(
                    "unsupported command '{}'",
                    other
                )));
            }
        }
    }

    if current.len() > 1 {
        subpaths.push(current);
    }
    Ok(subpaths)
}

fn resolve(cursor: Point, target: Point, relative: bool) -> Point {
    if relative {
        (cursor.0 + target.0, cursor.1 + target.1)
    } else {
        target
    }
}

fn flatten_cubic(out: &mut Vec<Point>, p0: Point, p1: Point, p2: Point, p3: Point) {
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f64 / CURVE_SEGMENTS as f64;
        let u = 1.0 - t;
        let x = u * u * u * p0.0
            + 3.0 * u * u * t * p1.0
            + 3.0 * u * t * t * p2.0
            + t * t * t * p3.0;
        let y = u * u * u * p0.1
            + 3.0 * u * u * t * p1.1
            + 3.0 * u * t * t * p2.1
            + t * t * t * p3.1;
        out.push((x, y));
    }
}

fn flatten_quadratic(out: &mut Vec<Point>, p0: Point, p1: Point, p2: Point) {
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f64 / CURVE_SEGMENTS as f64;
        let u = 1.0 - t;
        let x = u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0;
        let y = u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1;
        out.push((x, y));
    }
}

/// Byte scanner over path data.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.bytes.get(self.pos).map(|&b| b as char)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while matches!(
            self.bytes.get(self.pos),
            Some(b' ' | b'\t' | b'\n' | b'\r' | b',')
        ) {
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Result<f64, EngineError> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if matches!(self.bytes.get(self.pos), Some(b'.')) {
            self.pos += 1;
            while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or("");
        text.parse::<f64>().map_err(|_| {
            EngineError::invalid_path_data(format!("expected number at offset {}", start))
        })
    }

    fn point(&mut self) -> Result<Point, EngineError> {
        Ok((self.number()?, self.number()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rectangle() {
        let subpaths = flatten_path("M 10 10 L 110 10 L 110 60 L 10 60 Z").unwrap();
        assert_eq!(subpaths.len(), 1);
        assert_eq!(
            subpaths[0],
            vec![(10.0, 10.0), (110.0, 10.0), (110.0, 60.0), (10.0, 60.0)]
        );
    }

    #[test]
    fn test_relative_and_shorthand_commands() {
        let subpaths = flatten_path("m10,10 h100 v50 h-100 z").unwrap();
        assert_eq!(
            subpaths[0],
            vec![(10.0, 10.0), (110.0, 10.0), (110.0, 60.0), (10.0, 60.0)]
        );
    }

    #[test]
    fn test_implicit_lineto_after_moveto() {
        let subpaths = flatten_path("M 0 0 10 0 10 10").unwrap();
        assert_eq!(subpaths[0], vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn test_multiple_subpaths() {
        let subpaths = flatten_path("M0 0 L10 0 L10 10 Z M20 20 L30 20 L30 30 Z").unwrap();
        assert_eq!(subpaths.len(), 2);
    }

    #[test]
    fn test_curves_are_flattened() {
        let subpaths = flatten_path("M0 0 C 0 10, 10 10, 10 0 Z").unwrap();
        let points = &subpaths[0];
        assert_eq!(points.len(), 1 + crate::constants::CURVE_SEGMENTS);
        let (last_x, last_y) = *points.last().unwrap();
        assert!((last_x - 10.0).abs() < 1e-9);
        assert!(last_y.abs() < 1e-9);
    }

    #[test]
    fn test_negative_numbers_without_separators() {
        let subpaths = flatten_path("M10-10L-5-5").unwrap();
        assert_eq!(subpaths[0], vec![(10.0, -10.0), (-5.0, -5.0)]);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(flatten_path("10 10 L 20 20").is_err());
        assert!(flatten_path("M 10").is_err());
        assert!(flatten_path("M 0 0 X 1 1").is_err());
    }
}
