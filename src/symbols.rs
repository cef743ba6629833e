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

/// Where a function's code came from, judged by the source file the map lists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    /// Built from a `.c` file, i.e. already decompiled.
    Compiled,
    /// Still included as raw `.s` assembly.
    Assembly,
}

impl OriginKind {
    /// Classify a source path by its extension. Anything that is not `.c` or `.s`
    /// has no origin and must not produce a symbol.
    pub fn from_source_path(path: &str) -> Option<Self> {
        if path.ends_with(".c") {
            Some(OriginKind::Compiled)
        } else if path.ends_with(".s") {
            Some(OriginKind::Assembly)
        } else {
            None
        }
    }

    pub fn is_compiled(self) -> bool {
        self == OriginKind::Compiled
    }
}

/// One function entry pulled out of the map file. Names are not unique; the same
/// symbol can appear once per scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// `None` when the map's hex address is wider than 64 bits.
    pub address: Option<u64>,
    pub source_path: String,
    pub origin: OriginKind,
}

impl Symbol {
    /// Returns `None` when `source_path` does not carry a recognized extension.
    pub fn new(name: String, address: Option<u64>, source_path: String) -> Option<Self> {
        let origin = OriginKind::from_source_path(&source_path)?;
        Some(Self {
            name,
            address,
            source_path,
            origin,
        })
    }
}

/// Per-origin tally of a symbol sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolCounts {
    pub compiled: usize,
    pub assembly: usize,
}

impl SymbolCounts {
    pub fn tally(symbols: &[Symbol]) -> Self {
        symbols.iter().fold(Self::default(), |mut counts, symbol| {
            if symbol.origin.is_compiled() {
                counts.compiled += 1;
            } else {
                counts.assembly += 1;
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.compiled + self.assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_decides_origin() {
        assert_eq!(
            OriginKind::from_source_path("src/main/foo.c"),
            Some(OriginKind::Compiled)
        );
        assert_eq!(
            OriginKind::from_source_path("asm/nonmatchings/bar.s"),
            Some(OriginKind::Assembly)
        );
        assert_eq!(OriginKind::from_source_path("build/src/foo.o"), None);
        assert_eq!(OriginKind::from_source_path("include/common.h"), None);
        assert_eq!(OriginKind::from_source_path("src/foo.cpp"), None);
    }

    #[test]
    fn symbol_rejects_unknown_extension() {
        assert!(Symbol::new("func_a".to_string(), Some(0x8001_0000), "lib/libc.a".to_string()).is_none());

        let sym = Symbol::new("func_b".to_string(), Some(0x8001_0100), "asm/bar.s".to_string())
            .expect("assembly symbol");
        assert_eq!(sym.origin, OriginKind::Assembly);
        assert_eq!(sym.address, Some(0x8001_0100));
        assert!(!sym.origin.is_compiled());
    }

    #[test]
    fn symbol_without_address_keeps_origin() {
        let sym = Symbol::new("wide".to_string(), None, "src/wide.c".to_string())
            .expect("compiled symbol");
        assert_eq!(sym.address, None);
        assert_eq!(sym.origin, OriginKind::Compiled);
    }

    #[test]
    fn tally_counts_each_origin() {
        let symbols = vec![
            Symbol::new("a".into(), Some(0x10), "src/a.c".into()).unwrap(),
            Symbol::new("a".into(), Some(0x10), "src/a.c".into()).unwrap(),
            Symbol::new("b".into(), Some(0x20), "asm/b.s".into()).unwrap(),
        ];
        let counts = SymbolCounts::tally(&symbols);
        assert_eq!(
            counts,
            SymbolCounts {
                compiled: 2,
                assembly: 1
            }
        );
        assert_eq!(counts.total(), 3);
        assert_eq!(SymbolCounts::tally(&[]).total(), 0);
    }
}
