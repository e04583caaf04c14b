//! File input and output helpers for segment data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::geometry::{Segment3D, Vector3D};

pub mod pair;
pub use pair::{read_segment_pair_json, write_segment_pair_json, SegmentPair};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Parses a segment written as `x1,y1,z1,x2,y2,z2`.
pub fn parse_segment(text: &str) -> io::Result<Segment3D> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 6 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected six comma-separated values, found {}", parts.len()),
        ));
    }
    let mut values = [0.0f64; 6];
    for (idx, (slot, raw)) in values.iter_mut().zip(&parts).enumerate() {
        *slot = raw.parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("value {}: {}: {:?}", idx + 1, e, raw),
            )
        })?;
    }
    Ok(Segment3D::new(
        Vector3D::new(values[0], values[1], values[2]),
        Vector3D::new(values[3], values[4], values[5]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segment_works() {
        let seg = parse_segment(" 0, 0,0, 1.5 ,-2, 3e1").unwrap();
        assert_eq!(seg.start, Vector3D::zero());
        assert_eq!(seg.end, Vector3D::new(1.5, -2.0, 30.0));
    }

    #[test]
    fn parse_segment_wrong_arity() {
        let err = parse_segment("1,2,3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn parse_segment_bad_number() {
        let err = parse_segment("1,2,3,4,five,6").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("value 5"));
    }

    #[test]
    fn write_then_read_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let path = path.to_str().unwrap();
        write_string(path, "hello").unwrap();
        assert_eq!(read_to_string(path).unwrap(), "hello");
    }
}
