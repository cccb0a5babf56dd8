use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

/// Read a JSON file into `T`. `-` reads stdin.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json in {}: {e}", path.display()))
}

/// Pair up a flat `lon lat lon lat ...` list.
pub fn pair_up(values: &[f64]) -> Result<Vec<[f64; 2]>> {
    if values.len() % 2 != 0 {
        return Err(anyhow!(
            "coordinates must come in lon/lat pairs, got {} values",
            values.len()
        ));
    }
    Ok(values.chunks_exact(2).map(|p| [p[0], p[1]]).collect())
}
