// Copyright (c) 2026 Decomp-Progress Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File-system boundary. Both reads happen once, before any parsing.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::ProgressError;

/// Read the whole map file. A missing path is `MapFileMissing`, checked
/// before any read is attempted.
///
/// Non-UTF-8 bytes are replaced rather than rejected; map files sometimes carry
/// stray bytes from section names and those never sit inside a symbol entry.
pub fn read_map_file(path: &Path) -> Result<String, ProgressError> {
    if !path.exists() {
        return Err(ProgressError::MapFileMissing(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ProgressError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes of map from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Size in bytes of the reference binary.
pub fn binary_size(path: &Path) -> Result<u64, ProgressError> {
    if !path.exists() {
        return Err(ProgressError::BinaryMissing(path.to_path_buf()));
    }
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| ProgressError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Best-effort variant of [`binary_size`]: a missing binary is logged and
/// measured as 0 so progress can still be reported by function count.
pub fn load_binary_size(path: &Path) -> Result<u64, ProgressError> {
    match binary_size(path) {
        Ok(size) => Ok(size),
        Err(err) if !err.is_fatal() => {
            warn!("{err}");
            Ok(0)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_map_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_map_file(&dir.path().join("nope.map")).unwrap_err();
        assert!(matches!(err, ProgressError::MapFileMissing(_)));
        assert!(err.is_fatal());
        assert!(err.to_string().starts_with("Map file not found: "));
    }

    #[test]
    fn unreadable_map_is_fatal_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_map_file(dir.path()).unwrap_err();
        assert!(matches!(err, ProgressError::Io { .. }), "{err:?}");
        assert!(err.is_fatal());
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn map_is_read_lossily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0x10 a src/a.c\n\xff\xfe junk\n").unwrap();
        let text = read_map_file(file.path()).unwrap();
        assert!(text.starts_with("0x10 a src/a.c\n"));
    }

    #[test]
    fn binary_size_matches_file_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();
        assert_eq!(binary_size(file.path()).unwrap(), 2048);
        assert_eq!(load_binary_size(file.path()).unwrap(), 2048);
    }

    #[test]
    fn missing_binary_falls_back_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SLUS_000.00");
        let err = binary_size(&path).unwrap_err();
        assert!(matches!(err, ProgressError::BinaryMissing(_)));
        assert!(!err.is_fatal());
        assert_eq!(load_binary_size(&path).unwrap(), 0);
    }
}
