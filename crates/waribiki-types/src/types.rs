use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Amount in yen
pub type Yen = u64;

/// Disability certificate class (第1種 / 第2種)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabilityClass {
    #[default]
    First,
    Second,
}

impl DisabilityClass {
    pub fn label(&self) -> &'static str {
        match self {
            DisabilityClass::First => "第1種",
            DisabilityClass::Second => "第2種",
        }
    }
}

/// Whether the certified passenger travels with a fare-paying caregiver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelMode {
    #[default]
    WithCaregiver,
    Solo,
}

impl TravelMode {
    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::WithCaregiver => "介護者同伴",
            TravelMode::Solo => "本人のみ",
        }
    }

    pub fn has_caregiver(&self) -> bool {
        matches!(self, TravelMode::WithCaregiver)
    }
}

/// How a discounted amount is brought to a 10-yen boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// 10円未満切り上げ
    #[default]
    Up,
    /// 10円未満切り捨て
    Down,
}

impl RoundingMode {
    pub fn label(&self) -> &'static str {
        match self {
            RoundingMode::Up => "切り上げ",
            RoundingMode::Down => "切り捨て",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Up => write!(f, "up"),
            RoundingMode::Down => write!(f, "down"),
        }
    }
}
