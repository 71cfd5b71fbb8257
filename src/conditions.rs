//! CocoScan - External Conditions Survey
//!
//! Weather and soil selections recorded alongside a scan. Both fields
//! are required before a survey counts as submitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ScanError, ScanResult};

/// Weather at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
    Windy,
    Other,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::Sunny,
        Weather::Rainy,
        Weather::Cloudy,
        Weather::Windy,
        Weather::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Rainy => "Rainy",
            Weather::Cloudy => "Cloudy",
            Weather::Windy => "Windy",
            Weather::Other => "Other",
        }
    }

    /// Stored value
    pub fn value(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cloudy => "cloudy",
            Weather::Windy => "windy",
            Weather::Other => "other",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weather {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunny" => Ok(Weather::Sunny),
            "rainy" => Ok(Weather::Rainy),
            "cloudy" => Ok(Weather::Cloudy),
            "windy" => Ok(Weather::Windy),
            "other" => Ok(Weather::Other),
            _ => Err(ScanError::UnknownCondition(s.to_string())),
        }
    }
}

/// Soil type at the scan site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Soil {
    Sandy,
    Clay,
    Loamy,
    Peaty,
    Chalky,
    Silty,
}

impl Soil {
    pub const ALL: [Soil; 6] = [
        Soil::Sandy,
        Soil::Clay,
        Soil::Loamy,
        Soil::Peaty,
        Soil::Chalky,
        Soil::Silty,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Soil::Sandy => "Sandy",
            Soil::Clay => "Clay",
            Soil::Loamy => "Loamy",
            Soil::Peaty => "Peaty",
            Soil::Chalky => "Chalky",
            Soil::Silty => "Silty",
        }
    }

    /// Stored value
    pub fn value(&self) -> &'static str {
        match self {
            Soil::Sandy => "sandy",
            Soil::Clay => "clay",
            Soil::Loamy => "loamy",
            Soil::Peaty => "peaty",
            Soil::Chalky => "chalky",
            Soil::Silty => "silty",
        }
    }
}

impl fmt::Display for Soil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Soil {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandy" => Ok(Soil::Sandy),
            "clay" => Ok(Soil::Clay),
            "loamy" => Ok(Soil::Loamy),
            "peaty" => Ok(Soil::Peaty),
            "chalky" => Ok(Soil::Chalky),
            "silty" => Ok(Soil::Silty),
            _ => Err(ScanError::UnknownCondition(s.to_string())),
        }
    }
}

/// A completed conditions survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalConditions {
    pub weather: Weather,
    pub soil: Soil,
}

impl ExternalConditions {
    pub fn new(weather: Weather, soil: Soil) -> Self {
        Self { weather, soil }
    }

    /// Validate a submission; both selections are required
    pub fn from_options(weather: Option<Weather>, soil: Option<Soil>) -> ScanResult<Self> {
        match (weather, soil) {
            (Some(weather), Some(soil)) => Ok(Self { weather, soil }),
            _ => Err(ScanError::IncompleteConditions),
        }
    }
}
