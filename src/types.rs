//! Domain types for pitches: type codes, location zones, and pitch calls.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A Statcast pitch type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchType {
    #[serde(rename = "FF")]
    FourSeam,
    #[serde(rename = "FA")]
    Fastball,
    #[serde(rename = "FT")]
    TwoSeam,
    #[serde(rename = "FC")]
    Cutter,
    #[serde(rename = "FS")]
    Splitter,
    #[serde(rename = "SI")]
    Sinker,
    #[serde(rename = "SL")]
    Slider,
    #[serde(rename = "CU")]
    Curveball,
    #[serde(rename = "KC")]
    KnuckleCurve,
    #[serde(rename = "EP")]
    Eephus,
    #[serde(rename = "CH")]
    Changeup,
    #[serde(rename = "SC")]
    Screwball,
    #[serde(rename = "KN")]
    Knuckleball,
    #[serde(rename = "ST")]
    Sweeper,
    #[serde(rename = "SV")]
    Slurve,
}

impl PitchType {
    /// The two-letter Statcast code.
    pub fn code(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "FF",
            PitchType::Fastball => "FA",
            PitchType::TwoSeam => "FT",
            PitchType::Cutter => "FC",
            PitchType::Splitter => "FS",
            PitchType::Sinker => "SI",
            PitchType::Slider => "SL",
            PitchType::Curveball => "CU",
            PitchType::KnuckleCurve => "KC",
            PitchType::Eephus => "EP",
            PitchType::Changeup => "CH",
            PitchType::Screwball => "SC",
            PitchType::Knuckleball => "KN",
            PitchType::Sweeper => "ST",
            PitchType::Slurve => "SV",
        }
    }

    /// Human-readable pitch name.
    pub fn name(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "Four-Seam Fastball",
            PitchType::Fastball => "Fastball",
            PitchType::TwoSeam => "Two-Seam Fastball",
            PitchType::Cutter => "Cutter",
            PitchType::Splitter => "Splitter",
            PitchType::Sinker => "Sinker",
            PitchType::Slider => "Slider",
            PitchType::Curveball => "Curveball",
            PitchType::KnuckleCurve => "Knuckle Curve",
            PitchType::Eephus => "Eephus",
            PitchType::Changeup => "Changeup",
            PitchType::Screwball => "Screwball",
            PitchType::Knuckleball => "Knuckleball",
            PitchType::Sweeper => "Sweeper",
            PitchType::Slurve => "Slurve",
        }
    }
}

impl FromStr for PitchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FF" => Ok(PitchType::FourSeam),
            "FA" => Ok(PitchType::Fastball),
            "FT" => Ok(PitchType::TwoSeam),
            "FC" => Ok(PitchType::Cutter),
            "FS" => Ok(PitchType::Splitter),
            "SI" => Ok(PitchType::Sinker),
            "SL" => Ok(PitchType::Slider),
            "CU" => Ok(PitchType::Curveball),
            "KC" => Ok(PitchType::KnuckleCurve),
            "EP" => Ok(PitchType::Eephus),
            "CH" => Ok(PitchType::Changeup),
            "SC" => Ok(PitchType::Screwball),
            "KN" => Ok(PitchType::Knuckleball),
            "ST" => Ok(PitchType::Sweeper),
            "SV" => Ok(PitchType::Slurve),
            _ => Err(Error::UnknownPitchType {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A Statcast location zone: 1-9 inside the strike zone, 11-14 around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Zone(u8);

impl Zone {
    /// Create a zone, validating the Statcast numbering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] unless the value is 1-9 or 11-14.
    pub fn new(zone: u8) -> Result<Self> {
        match zone {
            1..=9 | 11..=14 => Ok(Zone(zone)),
            _ => Err(Error::InvalidZone { zone }),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether the zone lies inside the strike zone proper.
    pub fn is_in_strike_zone(&self) -> bool {
        self.0 <= 9
    }
}

impl TryFrom<u8> for Zone {
    type Error = Error;

    fn try_from(zone: u8) -> Result<Self> {
        Zone::new(zone)
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {}", self.0)
    }
}

/// A pitch call: a specific pitch type thrown to a specific zone.
///
/// This is the action of the at-bat decision process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchCall {
    pub pitch_type: PitchType,
    pub zone: Zone,
}

impl PitchCall {
    pub fn new(pitch_type: PitchType, zone: Zone) -> Self {
        PitchCall { pitch_type, zone }
    }
}

impl fmt::Display for PitchCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.pitch_type, self.zone)
    }
}
