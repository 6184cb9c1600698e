use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use crate::errors::BenchDiffError;

/// One benchmark's pre-computed statistics within a run.
///
/// Only `mean_ns` is interpreted; any additional fields in the source
/// document are carried through `extra` untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    #[serde(default)]
    pub mean_ns: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BenchmarkResult {
    pub fn new<T: Into<String>>(name: T, mean_ns: f64) -> Self {
        BenchmarkResult {
            name: name.into(),
            mean_ns,
            extra: Map::new(),
        }
    }
}

/// A complete set of benchmark results plus display-only run metadata.
///
/// A missing or wrong-typed `benchmarks` field deserializes to an empty
/// collection; a malformed entry inside a well-typed array is a parse error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunDocument {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "benchmarks_or_empty")]
    pub benchmarks: Vec<BenchmarkResult>,
}

fn benchmarks_or_empty<'de, D>(deserializer: D) -> Result<Vec<BenchmarkResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

pub fn load_results_from_path<P: AsRef<Path>>(path: P) -> Result<RunDocument, BenchDiffError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BenchDiffError::not_found(path.display().to_string()),
        _ => BenchDiffError::io(format!("unable to open {}: {e}", path.display())),
    })?;
    load_results_from_reader(BufReader::new(file))
}

pub fn load_results_from_reader<R: Read>(reader: R) -> Result<RunDocument, BenchDiffError> {
    serde_json::from_reader(reader).map_err(|e| BenchDiffError::parse(e.to_string()))
}
