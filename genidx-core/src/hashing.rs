//! 32-bit string hashes used to key files and the intervals parsed from them.
//!
//! Every parse hashes the absolute path of its input once with [`one_at_a_time`].
//! That file key is then folded into each record key (see [`record_key_input`]) so two
//! files never hand out the same key for structurally identical lines.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;

///
/// Hash function used to compute per-record keys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HashFunction {
    #[default]
    OneAtATime,
    Fnv1,
}

impl HashFunction {
    #[inline]
    pub fn hash(&self, key: &str) -> u32 {
        match self {
            HashFunction::OneAtATime => one_at_a_time(key),
            HashFunction::Fnv1 => fnv1(key),
        }
    }
}

impl std::str::FromStr for HashFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one_at_a_time" | "one-at-a-time" | "oaat" => Ok(HashFunction::OneAtATime),
            "fnv1" | "fnv-1" | "fnv" => Ok(HashFunction::Fnv1),
            _ => Err(format!("Invalid hash function: {}", s)),
        }
    }
}

/// Bob Jenkins' One-at-a-Time hash. All arithmetic wraps.
pub fn one_at_a_time(key: &str) -> u32 {
    let mut hash: u32 = 0;
    for c in key.chars() {
        hash = hash.wrapping_add(c as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

/// FNV hash over the characters of `key`, xor-ing each character in before the multiply.
pub fn fnv1(key: &str) -> u32 {
    key.chars().fold(FNV_OFFSET_BASIS, |hash, c| {
        (hash ^ c as u32).wrapping_mul(FNV_PRIME)
    })
}

///
/// Build the string a record key is hashed from.
///
/// # Arguments
/// - file_hash_key: key of the file the record was read from
/// - left: left coordinate of the record
/// - right: right coordinate of the record
/// - line_number: 1-based line number of the record in its file
pub fn record_key_input(file_hash_key: u32, left: i64, right: i64, line_number: usize) -> String {
    format!("{}_{}_{}_{}", file_hash_key, left, right, line_number)
}
