//! Parsing daftar TID dan peta lokasi dari teks
//!
//! - daftar TID: 1 baris 1 TID, baris kosong dilewati
//! - lokasi: `TID<spasi/tab>LOKASI`, lokasi boleh mengandung spasi

use crate::types::LocationMap;

/// Daftar TID (trim, tanpa baris kosong), urutan dipertahankan
pub fn parse_tid_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Peta TID → lokasi. Baris yang tidak lengkap dilewati;
/// TID duplikat: baris terakhir yang dipakai.
pub fn parse_location_map(content: &str) -> LocationMap {
    let mut map = LocationMap::new();
    for line in content.lines() {
        if let Some((tid, location)) = parse_location_line(line) {
            map.insert(tid, location);
        }
    }
    map
}

fn parse_location_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (tid, rest) = line.split_once(char::is_whitespace)?;
    let location = rest.trim();
    if tid.is_empty() || location.is_empty() {
        return None;
    }
    Some((tid, location))
}
