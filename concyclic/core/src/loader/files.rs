//! Loading point sets from disk

use super::{LoadError, LoadResult, PointSet};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a single point set from a JSON file
pub fn load_point_set<P: AsRef<Path>>(path: P) -> LoadResult<PointSet> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let set = PointSet::from_json(&contents)?;
    debug!(id = %set.id, points = set.points.len(), "loaded point set");
    Ok(set)
}

/// Load every `*.json` point set in a directory, sorted by file name
///
/// Files that fail to load are skipped with a warning.
pub fn load_point_sets<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<PointSet>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.display().to_string()));
    }

    let io_err = |source| LoadError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut sets = Vec::new();
    for path in paths {
        match load_point_set(&path) {
            Ok(set) => sets.push(set),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    Ok(sets)
}
