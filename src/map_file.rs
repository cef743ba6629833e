use log::trace;
use regex::Regex;
use std::sync::OnceLock;

use crate::symbols::Symbol;

/// Linker map parsing.
///
/// The map is scanned as one block of text for `0x<addr> <name> <path.c|path.s>`
/// triples. Fields only need whitespace between them, so a GNU ld map that wraps
/// a long input section name onto the next line still matches. Everything else in
/// the file (memory configuration, discarded sections, fill entries) is skipped
/// without complaint.
///
/// The shape is tuned to the maps this project's linker script produces; other
/// linkers may need the pattern adjusted.
const SYMBOL_PATTERN: &str = r"0x([0-9a-fA-F]+)\s+(\w+)\s+(\S+\.(?:c|s))";

fn symbol_regex() -> &'static Regex {
    static SYMBOL_RE: OnceLock<Regex> = OnceLock::new();
    SYMBOL_RE.get_or_init(|| Regex::new(SYMBOL_PATTERN).expect("symbol pattern is valid"))
}

/// Extract every classified symbol from `content`, in the order it appears.
///
/// No deduplication or sorting is done. Matches never overlap.
pub fn parse_map(content: &str) -> Vec<Symbol> {
    let mut symbols = Vec::new();

    for caps in symbol_regex().captures_iter(content) {
        // Still a function even when its address is wider than u64
        let address = u64::from_str_radix(&caps[1], 16).ok();
        if let Some(symbol) = Symbol::new(caps[2].to_string(), address, caps[3].to_string()) {
            trace!(
                "0x{} {} {} -> {:?}",
                &caps[1],
                symbol.name,
                symbol.source_path,
                symbol.origin
            );
            symbols.push(symbol);
        }
    }

    symbols
}
