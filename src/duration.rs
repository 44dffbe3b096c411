//! Signed durations as they appear in configuration documents.
//!
//! A duration is written either as a bare integer (nanoseconds) or as a
//! duration string such as `"2s"`, `"1500ms"` or `"-1s"`. Values are kept
//! signed; nothing at this layer rejects a negative duration. Encoding always
//! emits the string form.

use std::fmt;
use std::time::Duration;

use humantime_serde::re::humantime;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A duration in nanoseconds that may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedDuration(i64);

impl SignedDuration {
    pub const ZERO: SignedDuration = SignedDuration(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        SignedDuration(nanos)
    }

    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The value as a [`Duration`], or `None` when negative.
    pub fn to_std(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_nanos)
    }

    fn magnitude(&self) -> Duration {
        Duration::from_nanos(self.0.unsigned_abs())
    }
}

impl TryFrom<Duration> for SignedDuration {
    type Error = std::num::TryFromIntError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_nanos()).map(SignedDuration)
    }
}

impl PartialEq<Duration> for SignedDuration {
    fn eq(&self, other: &Duration) -> bool {
        self.to_std() == Some(*other)
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0s");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", humantime::format_duration(self.magnitude()))
    }
}

impl std::str::FromStr for SignedDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body == "0" {
            return Ok(SignedDuration::ZERO);
        }
        let magnitude = humantime::parse_duration(body.trim())
            .map_err(|e| format!("invalid duration '{s}': {e}"))?;
        let nanos = i64::try_from(magnitude.as_nanos())
            .map_err(|_| format!("duration '{s}' is out of range"))?;
        Ok(SignedDuration(if negative { -nanos } else { nanos }))
    }
}

impl Serialize for SignedDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SignedDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SignedDurationVisitor)
    }
}

struct SignedDurationVisitor;

impl<'de> Visitor<'de> for SignedDurationVisitor {
    type Value = SignedDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer number of nanoseconds or a duration string like \"2s\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SignedDuration, E> {
        Ok(SignedDuration(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SignedDuration, E> {
        i64::try_from(v)
            .map(SignedDuration)
            .map_err(|_| E::custom(format!("duration {v}ns is out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SignedDuration, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<SignedDuration, E> {
        Ok(SignedDuration::ZERO)
    }
}
