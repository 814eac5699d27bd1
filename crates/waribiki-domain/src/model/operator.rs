//! Rail operator and its discount policy

use serde::{Deserialize, Serialize};
use waribiki_types::RoundingMode;

/// Rail operator (鉄道会社)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "JR")]
    Jr,
    Kintetsu,
    Tobu,
    Odakyu,
    Seibu,
    Meitetsu,
    Nankai,
    Metro,
    Hankyu,
    Hanshin,
    Keihan,
    Nishitetsu,
    Sotetsu,
    Keikyu,
    Keisei,
    Tokyu,
    Other,
}

impl Operator {
    pub const ALL: [Operator; 17] = [
        Operator::Jr,
        Operator::Kintetsu,
        Operator::Tobu,
        Operator::Odakyu,
        Operator::Seibu,
        Operator::Meitetsu,
        Operator::Nankai,
        Operator::Metro,
        Operator::Hankyu,
        Operator::Hanshin,
        Operator::Keihan,
        Operator::Nishitetsu,
        Operator::Sotetsu,
        Operator::Keikyu,
        Operator::Keisei,
        Operator::Tokyu,
        Operator::Other,
    ];

    /// Stable identifier, also the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Operator::Jr => "JR",
            Operator::Kintetsu => "Kintetsu",
            Operator::Tobu => "Tobu",
            Operator::Odakyu => "Odakyu",
            Operator::Seibu => "Seibu",
            Operator::Meitetsu => "Meitetsu",
            Operator::Nankai => "Nankai",
            Operator::Metro => "Metro",
            Operator::Hankyu => "Hankyu",
            Operator::Hanshin => "Hanshin",
            Operator::Keihan => "Keihan",
            Operator::Nishitetsu => "Nishitetsu",
            Operator::Sotetsu => "Sotetsu",
            Operator::Keikyu => "Keikyu",
            Operator::Keisei => "Keisei",
            Operator::Tokyu => "Tokyu",
            Operator::Other => "Other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Operator::Jr => "JR",
            Operator::Kintetsu => "近鉄",
            Operator::Tobu => "東武",
            Operator::Odakyu => "小田急",
            Operator::Seibu => "西武",
            Operator::Meitetsu => "名鉄",
            Operator::Nankai => "南海",
            Operator::Metro => "東京メトロ",
            Operator::Hankyu => "阪急",
            Operator::Hanshin => "阪神",
            Operator::Keihan => "京阪",
            Operator::Nishitetsu => "西鉄",
            Operator::Sotetsu => "相鉄",
            Operator::Keikyu => "京急",
            Operator::Keisei => "京成",
            Operator::Tokyu => "東急",
            Operator::Other => "その他",
        }
    }

    /// Parse an identifier, ignoring ASCII case
    pub fn from_id(id: &str) -> Option<Operator> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.id().eq_ignore_ascii_case(id))
    }

    /// Whether the route fare table may prefill fares for this operator.
    /// Only JR publishes the fixed Shinkansen fares the table holds.
    pub fn publishes_fixed_fares(&self) -> bool {
        matches!(self, Operator::Jr)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Discount policy of one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRule {
    pub operator: Operator,
    /// 単独乗車時の割引適用距離 (km). `None` means no solo discount at all.
    pub distance_limit_km: Option<u32>,
    pub rounding: RoundingMode,
}

impl OperatorRule {
    pub const fn new(operator: Operator, distance_limit_km: Option<u32>, rounding: RoundingMode) -> Self {
        Self {
            operator,
            distance_limit_km,
            rounding,
        }
    }

    /// Rule used for operators missing from a registry: no distance threshold, round up
    pub const fn fallback(operator: Operator) -> Self {
        Self::new(operator, None, RoundingMode::Up)
    }

    /// Whether the over-distance flag can ever unlock a discount
    pub fn has_distance_discount(&self) -> bool {
        self.distance_limit_km.is_some()
    }
}
