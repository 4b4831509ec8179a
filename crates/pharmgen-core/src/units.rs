use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Measurement unit attached to a dosed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Milligram,
    Millilitre,
    Gram,
    /// Percentage weight-in-weight (`% w/w`).
    PercentWeight,
    /// Concentration, only used by commercial strengths.
    MilligramPerMillilitre,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Milligram => "mg",
            Unit::Millilitre => "mL",
            Unit::Gram => "g",
            Unit::PercentWeight => "% w/w",
            Unit::MilligramPerMillilitre => "mg/mL",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mg" => Ok(Unit::Milligram),
            "mL" => Ok(Unit::Millilitre),
            "g" => Ok(Unit::Gram),
            "% w/w" => Ok(Unit::PercentWeight),
            "mg/mL" => Ok(Unit::MilligramPerMillilitre),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// Numeric value plus unit, serialized as the single string `"{value} {unit}"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub unit: Unit,
}

impl Amount {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display already renders 50.0 as "50" and 0.5 as "0.5".
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (number, unit) = value
            .split_once(' ')
            .ok_or_else(|| Error::InvalidAmount(value.to_string()))?;
        let number: f64 = number
            .parse()
            .map_err(|_| Error::InvalidAmount(value.to_string()))?;
        Ok(Amount::new(number, unit.parse()?))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
