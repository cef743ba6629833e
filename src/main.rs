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

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use decomp_progress::{calculate, input, logging, parse_map, report};

/// Calculate decompilation progress from a linker map file
#[derive(Parser, Debug)]
#[command(name = "decomp-progress", version)]
struct Cli {
    /// Path to linker map file
    map_file: PathBuf,

    /// Path to original binary (for size reference)
    binary: PathBuf,

    /// Output as JSON
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.debug)?;

    let content = input::read_map_file(&cli.map_file)?;
    let symbols = parse_map(&content);
    let total_size = input::load_binary_size(&cli.binary)?;
    let progress = calculate(&symbols, total_size);

    if cli.json {
        println!("{}", report::render_json(&progress)?);
    } else {
        print!("{}", report::render_text(&progress));
    }
    Ok(())
}
