//! Reading of JSON-encoded inputs: score history and search configuration.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::from_reader;

/// Reads a history file or a search config from `path`. Malformed content, including a pair
/// key that does not name two players from one side, surfaces as an [io::Error] of kind
/// [InvalidData](io::ErrorKind::InvalidData).
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(BufReader::new(file))?)
}

/// Loads any deserialisable type from a JSON file, e.g. `SearchConfig::from_json_file(path)`.
pub trait FromJsonFile<D> {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> FromJsonFile<D> for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error> {
        read_json(path)
    }
}
