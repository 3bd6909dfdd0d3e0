//! Splits an argument string into a preamble and prefixed values.
//!
//! A prefix only counts when it follows whitespace, so `n/` inside a value
//! such as `a/Blk 30 n/a` still starts a new argument, while `d/` inside
//! `did/` does not.

use std::collections::HashMap;

use super::syntax::Prefix;

/// Values found for each prefix, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).and_then(|v| v.last()).map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }

    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Tokenizes `args` against the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {args}");

    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let marker = format!(" {prefix}");
        let mut from = 0;
        while let Some(found) = padded[from..].find(&marker) {
            let start = from + found + 1;
            positions.push((start, *prefix));
            from = start;
        }
    }
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(padded.len());
    let mut map = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(padded.len());
        let value = padded[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    tracing::trace!(args, found = positions.len(), "tokenized arguments");
    map
}
