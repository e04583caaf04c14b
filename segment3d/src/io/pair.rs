use serde::{Deserialize, Serialize};

use crate::geometry::Segment3D;

/// Two segments to be intersected, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPair {
    pub a: Segment3D,
    pub b: Segment3D,
}

impl SegmentPair {
    pub fn new(a: Segment3D, b: Segment3D) -> Self {
        Self { a, b }
    }
}

pub fn read_segment_pair_json(path: &str) -> std::io::Result<SegmentPair> {
    let contents = crate::io::read_to_string(path)?;
    let pair: SegmentPair = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    log::debug!("read segment pair from {path}");
    Ok(pair)
}

pub fn write_segment_pair_json(path: &str, pair: &SegmentPair) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(pair).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}
