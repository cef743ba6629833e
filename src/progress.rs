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

use log::debug;
use serde::{Deserialize, Serialize};

use crate::symbols::{Symbol, SymbolCounts};

/**
 * ProgressReport is the single result of a progress run and the exact shape of the `--json` output.
 * Counts are plain JSON numbers.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ts_rs::TS)]
#[ts(export, export_to = "progress/")]
pub struct ProgressReport {
    /** Every classified function symbol, compiled or assembly. */
    #[ts(type = "number")]
    pub total_functions: usize,
    /** Function symbols whose source is a `.c` file. */
    #[ts(type = "number")]
    pub decompiled_functions: usize,
    /** decompiled_functions / total_functions * 100, or 0.0 when there are no functions. */
    pub function_percent: f64,
    /** Size of the reference binary; 0 when it could not be measured. */
    #[ts(type = "number")]
    pub total_bytes: u64,
    /** total_bytes scaled by function_percent, truncated. */
    #[ts(type = "number")]
    pub decompiled_bytes: u64,
    /** Currently the same value as function_percent. */
    pub byte_percent: f64,
}

impl ProgressReport {
    fn empty(total_bytes: u64) -> Self {
        Self {
            total_functions: 0,
            decompiled_functions: 0,
            function_percent: 0.0,
            total_bytes,
            decompiled_bytes: 0,
            byte_percent: 0.0,
        }
    }
}

/// Aggregate a symbol sequence into a report against a binary of `total_size` bytes.
///
/// The map gives no per-function sizes, so byte progress is estimated from the
/// function ratio: `byte_percent` equals `function_percent` and `decompiled_bytes`
/// is that share of `total_size`.
pub fn calculate(symbols: &[Symbol], total_size: u64) -> ProgressReport {
    let counts = SymbolCounts::tally(symbols);
    debug!(
        "{} compiled / {} assembly symbols, binary is {} bytes",
        counts.compiled, counts.assembly, total_size
    );

    let total_functions = counts.total();
    if total_functions == 0 {
        return ProgressReport::empty(total_size);
    }

    let function_percent = counts.compiled as f64 / total_functions as f64 * 100.0;
    // `as` truncates toward zero, and the product is never negative
    let decompiled_bytes = (total_size as f64 * function_percent / 100.0) as u64;

    ProgressReport {
        total_functions,
        decompiled_functions: counts.compiled,
        function_percent,
        total_bytes: total_size,
        decompiled_bytes,
        byte_percent: function_percent,
    }
}
