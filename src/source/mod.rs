//! Baca file daftar TID dan file lokasi

use crate::error::{RekapError, Result};
use rekap_rpl_common::{parse_location_map, parse_tid_list, LocationMap};
use std::path::Path;
use tracing::{debug, info};

/// Daftar TID dari file. File tidak ada atau kosong = error fatal.
pub fn load_tids(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(RekapError::FileNotFound(format!(
            "{} (buat file berisi 1 baris 1 TID)",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let tids = parse_tid_list(&content);
    if tids.is_empty() {
        return Err(RekapError::EmptyTidList(path.display().to_string()));
    }

    info!(path = %path.display(), count = tids.len(), "daftar TID dimuat");
    Ok(tids)
}

/// Peta lokasi dari file. File opsional: tidak ada = peta kosong.
pub fn load_location_map(path: &Path) -> Result<LocationMap> {
    if !path.exists() {
        debug!(path = %path.display(), "file lokasi tidak ada, lokasi dari API");
        return Ok(LocationMap::new());
    }

    let content = std::fs::read_to_string(path)?;
    let map = parse_location_map(&content);
    info!(path = %path.display(), count = map.len(), "peta lokasi dimuat");
    Ok(map)
}
