//! Garment attributes - catalog category and size

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Catalog category of a cloth entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothKind {
    Tops,
    Bottoms,
    Outerwear,
    OtherGarments,
    Essentials,
}

impl ClothKind {
    /// All known categories, in display order
    pub const ALL: [Self; 5] = [
        Self::Tops,
        Self::Bottoms,
        Self::Outerwear,
        Self::OtherGarments,
        Self::Essentials,
    ];

    /// Wire/storage representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Outerwear => "outerwear",
            Self::OtherGarments => "other_garments",
            Self::Essentials => "essentials",
        }
    }
}

impl fmt::Display for ClothKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tops" => Ok(Self::Tops),
            "bottoms" => Ok(Self::Bottoms),
            "outerwear" => Ok(Self::Outerwear),
            "other_garments" => Ok(Self::OtherGarments),
            "essentials" => Ok(Self::Essentials),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown cloth category
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown cloth type: {0}")]
pub struct ParseKindError(pub String);

/// Garment size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClothSize {
    S,
    M,
    L,
    XL,
    XXL,
}

impl ClothSize {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
        }
    }
}

impl fmt::Display for ClothSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::XL),
            "XXL" => Ok(Self::XXL),
            _ => Err(ParseSizeError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown size
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown cloth size: {0}")]
pub struct ParseSizeError(pub String);
