/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client tokens for idempotent operations
//!
//! Mutating operations send an `X-Amzn-Client-Token` header. When the caller doesn't set
//! `client_token` on the input, one is generated from the config's [`IdempotencyTokenProvider`].

use std::sync::{Arc, Mutex};

/// Format 128 random bits as a version 4 UUID
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of idempotency tokens
#[derive(Clone, Debug)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Clone, Debug)]
enum Inner {
    Static(&'static str),
    Random(Arc<Mutex<fastrand::Rng>>),
}

/// Random v4 UUIDs
pub fn default_provider() -> IdempotencyTokenProvider {
    IdempotencyTokenProvider::random()
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }
}

impl IdempotencyTokenProvider {
    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::new()))),
        }
    }

    /// Seeded provider, for reproducible tokens in tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => {
                let input = match rng.lock() {
                    Ok(mut rng) => rng.u128(..),
                    // a panic while holding the lock can't leave the generator in a bad state
                    Err(poisoned) => poisoned.into_inner().u128(..),
                };
                uuid_v4(input)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};

    #[test]
    fn uuid_layout() {
        let uuid = uuid_v4(0);
        assert_eq!(uuid, "00000000-0000-4000-8000-000000000000");
        let uuid = uuid_v4(u128::MAX);
        assert_eq!(uuid, "ffffffff-ffff-4fff-ffff-ffffffffffff");
    }

    #[test]
    fn random_tokens_differ() {
        let provider = IdempotencyTokenProvider::random();
        let first = provider.make_idempotency_token();
        let second = provider.make_idempotency_token();
        assert_eq!(first.len(), 36);
        assert_ne!(first, second);
    }

    #[test]
    fn seeded_tokens_are_reproducible() {
        let first = IdempotencyTokenProvider::with_seed(7).make_idempotency_token();
        let second = IdempotencyTokenProvider::with_seed(7).make_idempotency_token();
        assert_eq!(first, second);
        assert_eq!(&first[14..15], "4");
    }
}
