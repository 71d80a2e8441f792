/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A correct, small, but not especially fast base64 implementation, used for blobs embedded in
//! JSON documents.

use std::fmt;

const BASE64_ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub fn encode<T: AsRef<[u8]>>(inp: T) -> String {
    let inp = inp.as_ref();
    encode_inner(inp)
}

fn encode_inner(inp: &[u8]) -> String {
    // Base 64 encodes groups of 6 bits into characters. Each 3 byte group (24 bits) becomes
    // 4 base64 characters.
    let char_ct = ((inp.len() + 2) / 3) * 4;
    let mut output = String::with_capacity(char_ct);
    for chunk in inp.chunks(3) {
        let mut block: i32 = 0;
        // Write the chunks into the beginning of a 32 bit int
        for (idx, chunk) in chunk.iter().enumerate() {
            block |= (*chunk as i32) << ((3 - idx) * 8);
        }
        let num_sextets = ((chunk.len() * 8) + 5) / 6;
        for idx in 0..num_sextets {
            let slice = block >> (26 - (6 * idx));
            let idx = (slice as u8) & 0b0011_1111;
            output.push(BASE64_ENCODE_TABLE[idx as usize] as char);
        }
        for _ in 0..(4 - num_sextets) {
            output.push('=');
        }
    }
    output
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodeError {
    InvalidByte(u8),
    InvalidLength,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidByte(b) => write!(f, "invalid base64 byte: {:#x}", b),
            DecodeError::InvalidLength => write!(f, "base64 input length must be a multiple of 4"),
        }
    }
}

impl std::error::Error for DecodeError {}

fn decode_sextet(b: u8) -> Result<u8, DecodeError> {
    match b {
        b'A'..=b'Z' => Ok(b - b'A'),
        b'a'..=b'z' => Ok(b - b'a' + 26),
        b'0'..=b'9' => Ok(b - b'0' + 52),
        b'+' => Ok(62),
        b'/' => Ok(63),
        other => Err(DecodeError::InvalidByte(other)),
    }
}

pub fn decode<T: AsRef<[u8]>>(inp: T) -> Result<Vec<u8>, DecodeError> {
    let inp = inp.as_ref();
    if inp.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength);
    }
    let mut output = Vec::with_capacity(inp.len() / 4 * 3);
    for chunk in inp.chunks(4) {
        let padding = chunk.iter().rev().take_while(|b| **b == b'=').count();
        if padding > 2 {
            return Err(DecodeError::InvalidByte(b'='));
        }
        let mut block: u32 = 0;
        for (idx, b) in chunk[..4 - padding].iter().enumerate() {
            block |= (decode_sextet(*b)? as u32) << (18 - 6 * idx);
        }
        let bytes = [(block >> 16) as u8, (block >> 8) as u8, block as u8];
        output.extend_from_slice(&bytes[..3 - padding]);
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use crate::base64::{decode, encode, DecodeError};

    #[test]
    fn test_base64() {
        assert_eq!(encode("abc"), "YWJj");
        assert_eq!(encode("anything you want."), "YW55dGhpbmcgeW91IHdhbnQu");
        assert_eq!(encode("anything you want"), "YW55dGhpbmcgeW91IHdhbnQ=");
        assert_eq!(encode("anything you wan"), "YW55dGhpbmcgeW91IHdhbg==");
    }

    #[test]
    fn test_base64_utf8() {
        let decoded = "ユニコードとはか？";
        let encoded = "44Om44OL44Kz44O844OJ44Go44Gv44GL77yf";
        assert_eq!(encode(decoded), encoded);
        assert_eq!(decode(encoded).unwrap(), decoded.as_bytes());
    }

    #[test]
    fn decode_padding() {
        assert_eq!(decode("YW55dGhpbmcgeW91IHdhbg==").unwrap(), b"anything you wan");
        assert_eq!(decode("YW55dGhpbmcgeW91IHdhbnQ=").unwrap(), b"anything you want");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(decode("abc"), Err(DecodeError::InvalidLength));
        assert_eq!(decode("ab!c"), Err(DecodeError::InvalidByte(b'!')));
    }
}
