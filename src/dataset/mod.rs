use std::{fs::File, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

mod pune;
pub use pune::pune;

use crate::network::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// One undirected track segment of a network description. A network is
/// supplied as a flat list of these, either compiled in ([`pune`]) or read
/// from a CSV file with a `from,to,distance_km,line` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub line: Line,
}

pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>, self::Error> {
    let file = File::open(&path)?;
    let segments = from_reader(file)?;
    info!(
        "Read {} segments from {}",
        segments.len(),
        path.as_ref().display()
    );
    Ok(segments)
}

pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Segment>, self::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut segments = Vec::new();
    for result in rdr.deserialize() {
        let segment: Segment = result?;
        segments.push(segment);
    }
    Ok(segments)
}
