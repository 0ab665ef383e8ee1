use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Where the fuel consumption figure comes from.
#[derive(Debug, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum FuelMode {
    /// City driving preset.
    City,

    /// Highway driving preset.
    Highway,

    /// Manually entered figure.
    Custom,
}

impl Display for FuelMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City => write!(f, "City"),
            Self::Highway => write!(f, "Highway"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}
