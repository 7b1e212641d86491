//! Placed-instance scanning.
//!
//! Actors placed in the world are referenced by path names such as
//! `Persistent_Level:PersistentLevel.Build_ConstructorMk1_C_2147482011`.
//! Collecting the distinct (class, instance id) pairs behind
//! `PersistentLevel.` gives a count of placed objects that does not depend
//! on how many times each object is referenced.

use std::collections::{HashMap, HashSet};

use super::tokens::{is_token_byte, BLUEPRINT_PREFIX, BUILD_PREFIX, CLASS_SUFFIX};
use crate::binary::find_bytes;

/// Text preceding every placed-instance reference.
pub const INSTANCE_MARKER: &str = "PersistentLevel.";

/// One placed-instance reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceRef<'a> {
    /// Generated class name, `_C` suffix included.
    pub class: &'a str,
    /// Numeric instance id as written.
    pub id: &'a str,
}

impl InstanceRef<'_> {
    /// Returns the class name without its `_C` suffix.
    #[must_use]
    pub fn base_class(&self) -> &str {
        self.class.strip_suffix(CLASS_SUFFIX).unwrap_or(self.class)
    }
}

/// Finds every `PersistentLevel.<Build_|BP_>..._C_<digits>` reference.
///
/// Within the token following the marker, the rightmost `_C_<digit>`
/// splits class from id, so class names that themselves contain `_C_` are
/// kept whole.
#[must_use]
pub fn find_instance_refs(body: &[u8]) -> Vec<InstanceRef<'_>> {
    let marker = INSTANCE_MARKER.as_bytes();
    let mut refs = Vec::new();
    let mut pos = 0;

    while let Some(found) = find_bytes(&body[pos..], marker) {
        let token_start = pos + found + marker.len();
        let token_len = body[token_start..]
            .iter()
            .take_while(|&&b| is_token_byte(b))
            .count();
        let token = &body[token_start..token_start + token_len];

        match split_instance_token(token) {
            Some((class_len, id_len)) => {
                let class = ascii_str(&token[..class_len]);
                let id_start = class_len + 1;
                let id = ascii_str(&token[id_start..id_start + id_len]);
                refs.push(InstanceRef { class, id });
                pos = token_start + id_start + id_len;
            }
            None => pos = pos + found + 1,
        }
    }

    refs
}

/// Returns (class length, id length) for a token shaped like
/// `<Build_|BP_><chars>_C_<digits>...`.
fn split_instance_token(token: &[u8]) -> Option<(usize, usize)> {
    let prefix_len = if token.starts_with(BUILD_PREFIX.as_bytes()) {
        BUILD_PREFIX.len()
    } else if token.starts_with(BLUEPRINT_PREFIX.as_bytes()) {
        BLUEPRINT_PREFIX.len()
    } else {
        return None;
    };

    // At least one class character must sit between the prefix and "_C_"
    (prefix_len + 1..token.len().saturating_sub(3))
        .rev()
        .find(|&k| &token[k..k + 3] == b"_C_" && token[k + 3].is_ascii_digit())
        .map(|k| {
            let id_len = token[k + 3..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            (k + 2, id_len)
        })
}

fn ascii_str(bytes: &[u8]) -> &str {
    // Token bytes are always ASCII
    std::str::from_utf8(bytes).unwrap_or_default()
}

/// Counts distinct placed instances per base class (class without `_C`).
#[must_use]
pub fn count_unique_instances(body: &[u8]) -> HashMap<String, usize> {
    let unique: HashSet<InstanceRef<'_>> = find_instance_refs(body).into_iter().collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for instance in unique {
        *counts.entry(instance.base_class().to_string()).or_insert(0) += 1;
    }
    counts
}
