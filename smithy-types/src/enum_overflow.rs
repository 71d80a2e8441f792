/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process-wide storage for enum values the client does not model.
//!
//! Service enums map known names to variants by hash. A name that matches no variant is stored
//! here under its hash so that it can be turned back into the exact original string later. The
//! container is shared by every service crate in the process and lives for the whole process.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

static OVERFLOW: Lazy<RwLock<HashMap<i32, &'static str>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Stable 32-bit hash of a string: `h = h * 31 + byte`, wrapping, bytes read as signed.
///
/// Enum mappers compute the hash of each known name with this function, so the value must
/// never change between releases.
pub fn hash_string(value: &str) -> i32 {
    value
        .as_bytes()
        .iter()
        .fold(0i32, |h, b| h.wrapping_mul(31).wrapping_add(*b as i8 as i32))
}

/// Record `value` in the overflow container and return the key it can be retrieved with.
///
/// Storing the same string twice returns the same key. When a different string already sits
/// under the hash, the next free key is used instead.
pub fn store_overflow(value: &str) -> i32 {
    let mut key = hash_string(value);
    if let Some(existing) = lookup(key, value) {
        return existing;
    }
    let mut container = OVERFLOW.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    loop {
        match container.get(&key) {
            Some(stored) if *stored == value => return key,
            Some(_) => key = key.wrapping_add(1),
            None => {
                let stored: &'static str = Box::leak(value.to_owned().into_boxed_str());
                container.insert(key, stored);
                return key;
            }
        }
    }
}

/// Look up a previously stored value. Returns `None` when nothing was stored under `key`.
pub fn retrieve_overflow(key: i32) -> Option<&'static str> {
    let container = OVERFLOW.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    container.get(&key).copied()
}

fn lookup(mut key: i32, value: &str) -> Option<i32> {
    let container = OVERFLOW.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    while let Some(stored) = container.get(&key) {
        if *stored == value {
            return Some(key);
        }
        key = key.wrapping_add(1);
    }
    None
}

/// An enum value that the client did not recognize.
///
/// Holds the key of the original string in the overflow container; [`UnknownVariantValue::as_str`]
/// yields the string exactly as it was received.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct UnknownVariantValue(i32);

impl UnknownVariantValue {
    /// Store `value` and return a handle to it.
    pub fn new(value: &str) -> Self {
        UnknownVariantValue(store_overflow(value))
    }

    /// Wrap a raw integer key. Keys that were never stored render as the empty string.
    pub fn from_key(key: i32) -> Self {
        UnknownVariantValue(key)
    }

    pub fn key(&self) -> i32 {
        self.0
    }

    pub fn as_str(&self) -> &'static str {
        retrieve_overflow(self.0).unwrap_or("")
    }
}

impl fmt::Debug for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnknownVariantValue")
            .field(&self.as_str())
            .finish()
    }
}

impl fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::{hash_string, retrieve_overflow, store_overflow, UnknownVariantValue};
    use proptest::prelude::*;

    #[test]
    fn hash_is_stable() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("ab"), 97 * 31 + 98);
        assert_eq!(hash_string("SUCCESS"), hash_string("SUCCESS"));
    }

    #[test]
    fn unknown_values_round_trip() {
        let value = UnknownVariantValue::new("SOME_FUTURE_STATUS");
        assert_eq!(value.as_str(), "SOME_FUTURE_STATUS");
        assert_eq!(UnknownVariantValue::new("SOME_FUTURE_STATUS"), value);
    }

    #[test]
    fn missing_key_is_empty() {
        // keys near i32::MIN are unreachable for the short strings stored by other tests
        let value = UnknownVariantValue::from_key(i32::MIN + 7);
        assert_eq!(value.as_str(), "");
        assert_eq!(retrieve_overflow(i32::MIN + 7), None);
    }

    #[test]
    fn collisions_get_distinct_keys() {
        // "Aa" and "BB" hash to the same value
        assert_eq!(hash_string("Aa"), hash_string("BB"));
        let first = store_overflow("Aa");
        let second = store_overflow("BB");
        assert_ne!(first, second);
        assert_eq!(retrieve_overflow(first), Some("Aa"));
        assert_eq!(retrieve_overflow(second), Some("BB"));
        assert_eq!(store_overflow("BB"), second);
    }

    proptest! {
        #[test]
        fn stored_strings_are_returned_verbatim(s in "\\PC{1,24}") {
            let key = store_overflow(&s);
            prop_assert_eq!(retrieve_overflow(key), Some(s.as_str()));
        }
    }
}
