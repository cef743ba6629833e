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

/// Logger bootstrap for the CLI. All records go to stderr so `--json` output
/// on stdout stays parseable.
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Default log spec. `RUST_LOG`, when set, wins over this.
pub fn log_spec(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Start the logger. Keep the returned handle alive for the life of the process.
pub fn init(debug: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(log_spec(debug))?
        .format(flexi_logger::default_format)
        .start()
}
