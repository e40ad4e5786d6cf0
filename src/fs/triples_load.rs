use std::path::Path;

use crate::{fs::LoadResult, ranking::RankedResult};

/// Reads a JSON array of `{"coefficient": .., "row": .., "col": ..}` objects from disk.
pub fn load_triples_from_json(path: impl AsRef<Path>) -> LoadResult<Vec<RankedResult>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let results = triples_from_json_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        count = results.len(),
        "loaded result triples"
    );
    Ok(results)
}

pub fn triples_from_json_str(text: &str) -> LoadResult<Vec<RankedResult>> {
    Ok(serde_json::from_str(text)?)
}
