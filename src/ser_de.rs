//! Serde support, enabled with the `serde` feature.
//!
//! Human-readable formats (JSON, TOML, ...) carry the `n/d` string form.
//! Binary formats carry the 32-byte big-endian packed word.

use crate::Ratio;
use core::fmt;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.to_be_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(RatioVisitor)
        } else {
            deserializer.deserialize_bytes(RatioVisitor)
        }
    }
}

struct RatioVisitor;

impl<'de> Visitor<'de> for RatioVisitor {
    type Value = Ratio;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a ratio string `n/d` or its 32-byte packed word")
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Ratio, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Ratio, E>
    where
        E: de::Error,
    {
        let bytes: [u8; Ratio::BYTES] = v
            .try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ratio::from_be_bytes(bytes).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Ratio, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0u8; Ratio::BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ratio::from_be_bytes(bytes).map_err(de::Error::custom)
    }
}
