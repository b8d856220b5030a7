//! `Serialize`/`Deserialize` for [`Fraction`], as a `(numerator, denominator)` pair.
//!
//! Deserialization goes through [`Fraction::new`], so a zero denominator is
//! rejected and unreduced input comes back normalized.

use crate::{Fraction, FractionInteger};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

impl<T> Serialize for Fraction<T>
where
    T: FractionInteger + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.numer(), self.denom()).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Fraction<T>
where
    T: FractionInteger + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (numer, denom) = <(T, T)>::deserialize(deserializer)?;
        Fraction::new(numer, denom).map_err(de::Error::custom)
    }
}
