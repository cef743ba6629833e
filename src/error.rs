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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the file boundary or while rendering a report.
///
/// Unparseable map content is never reported here; the parser skips it.
#[derive(Error, Debug)]
pub enum ProgressError {
    /// Fatal: there is no symbol data to work with.
    #[error("Map file not found: {}", crate::utils::display_path(.0))]
    MapFileMissing(PathBuf),

    /// Non-fatal for the CLI, which falls back to a zero byte baseline.
    #[error("Binary not found: {}", crate::utils::display_path(.0))]
    BinaryMissing(PathBuf),

    #[error("failed to read {}: {source}", crate::utils::display_path(.path))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize progress report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProgressError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ProgressError::BinaryMissing(_))
    }
}
