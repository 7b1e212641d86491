//! Class-name token scanning.
//!
//! A token is a fixed prefix (`Build_` or `BP_`) followed by one or more
//! characters from `[A-Za-z0-9_]`, taken greedily. Tokens are found
//! leftmost-first without overlap, the same way a `Build_[A-Za-z0-9_]+`
//! regular expression would find them. The body is treated as bytes, so
//! arbitrary binary data between tokens is harmless.

use std::collections::HashMap;

use crate::binary::find_bytes;

/// Prefix of buildable class names.
pub const BUILD_PREFIX: &str = "Build_";

/// Prefix of blueprint (vehicle) class names.
pub const BLUEPRINT_PREFIX: &str = "BP_";

/// Suffix of generated class names.
pub const CLASS_SUFFIX: &str = "_C";

/// Returns whether `b` may appear in a token after its prefix.
#[must_use]
pub const fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over the tokens with a given prefix.
#[derive(Debug, Clone)]
pub struct TokenIter<'a> {
    body: &'a [u8],
    prefix: &'a [u8],
    pos: usize,
}

impl<'a> TokenIter<'a> {
    /// Creates an iterator over the `prefix` tokens in `body`.
    #[must_use]
    pub fn new(body: &'a [u8], prefix: &'a str) -> Self {
        Self {
            body,
            prefix: prefix.as_bytes(),
            pos: 0,
        }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.body.len() {
            let start = self.pos + find_bytes(&self.body[self.pos..], self.prefix)?;
            let tail_start = start + self.prefix.len();
            let tail_len = self.body[tail_start..]
                .iter()
                .take_while(|&&b| is_token_byte(b))
                .count();

            if tail_len == 0 {
                self.pos = start + 1;
                continue;
            }

            let end = tail_start + tail_len;
            self.pos = end;
            // Prefix and tail are ASCII, so this cannot fail
            return std::str::from_utf8(&self.body[start..end]).ok();
        }
        None
    }
}

/// Occurrence counts of every distinct token with one prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: HashMap<String, usize>,
}

impl TokenCounts {
    /// Counts every `prefix` token in `body`.
    ///
    /// ```
    /// use sav_stats::stats::tokens::TokenCounts;
    ///
    /// let counts = TokenCounts::scan(b"Build_Foundry_C\0Build_Foundry_C Build_", "Build_");
    /// assert_eq!(counts.get("Build_Foundry_C"), 2);
    /// assert_eq!(counts.distinct(), 1);
    /// ```
    #[must_use]
    pub fn scan(body: &[u8], prefix: &str) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in TokenIter::new(body, prefix) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns the number of occurrences of `token`.
    #[must_use]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns the occurrences of `key` plus those of `key` + `_C`.
    #[must_use]
    pub fn get_with_class_suffix(&self, key: &str) -> usize {
        self.get(key) + self.get(&format!("{key}{CLASS_SUFFIX}"))
    }

    /// Sums the occurrences of every token starting with `prefix`.
    #[must_use]
    pub fn prefix_sum(&self, prefix: &str) -> usize {
        self.counts
            .iter()
            .filter(|(token, _)| token.starts_with(prefix))
            .map(|(_, &count)| count)
            .sum()
    }

    /// Returns the number of distinct tokens.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of token occurrences.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over (token, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens<'a>(body: &'a [u8], prefix: &'a str) -> Vec<&'a str> {
        TokenIter::new(body, prefix).collect()
    }

    #[test]
    fn test_basic_tokens() {
        let body = b"/Game/FactoryGame/Buildable/Build_SmelterMk1.Build_SmelterMk1_C";
        assert_eq!(
            tokens(body, BUILD_PREFIX),
            vec!["Build_SmelterMk1", "Build_SmelterMk1_C"]
        );
    }

    #[test]
    fn test_prefix_without_tail_is_skipped() {
        assert_eq!(tokens(b"Build_ Build_.Build_X", BUILD_PREFIX), vec!["Build_X"]);
        assert!(tokens(b"Build_", BUILD_PREFIX).is_empty());
    }

    #[test]
    fn test_greedy_swallows_nested_prefix() {
        // The inner prefix is made of token characters, so it joins the first token
        assert_eq!(
            tokens(b"Build_ABuild_B", BUILD_PREFIX),
            vec!["Build_ABuild_B"]
        );
    }

    #[test]
    fn test_no_word_boundary_required() {
        assert_eq!(tokens(b"xxBuild_Valve", BUILD_PREFIX), vec!["Build_Valve"]);
        assert_eq!(tokens(b"Testa_BP_WB_C", BLUEPRINT_PREFIX), vec!["BP_WB_C"]);
    }

    #[test]
    fn test_binary_surroundings() {
        let body = b"\x00\xFFBuild_Blender\x80\x00BP_Truck_C\xC3\xA9";
        assert_eq!(tokens(body, BUILD_PREFIX), vec!["Build_Blender"]);
        assert_eq!(tokens(body, BLUEPRINT_PREFIX), vec!["BP_Truck_C"]);
    }

    #[test]
    fn test_overlapping_prefix_candidates() {
        // "BBP_" must still find the token starting at the second B
        assert_eq!(tokens(b"BBP_Tractor", BLUEPRINT_PREFIX), vec!["BP_Tractor"]);
    }

    #[test]
    fn test_counts() {
        let body = b"Build_ConstructorMk1 Build_ConstructorMk1_C Build_ConstructorMk1 BP_Truck1 BP_Truck2";
        let build = TokenCounts::scan(body, BUILD_PREFIX);
        assert_eq!(build.get("Build_ConstructorMk1"), 2);
        assert_eq!(build.get("Build_ConstructorMk1_C"), 1);
        assert_eq!(build.get_with_class_suffix("Build_ConstructorMk1"), 3);
        assert_eq!(build.get("Build_Missing"), 0);
        assert_eq!(build.distinct(), 2);
        assert_eq!(build.total(), 3);

        let vehicles = TokenCounts::scan(body, BLUEPRINT_PREFIX);
        assert_eq!(vehicles.prefix_sum("BP_Truck"), 2);
        assert_eq!(vehicles.prefix_sum("BP_Tractor"), 0);
        assert_eq!(vehicles.iter().count(), 2);
    }

    #[test]
    fn test_empty_body() {
        let counts = TokenCounts::scan(b"", BUILD_PREFIX);
        assert_eq!(counts.distinct(), 0);
        assert_eq!(counts.total(), 0);
    }
}
