//! Text shown next to the over-distance checkbox

use serde::Serialize;
use waribiki_domain::model::OperatorRule;

/// How the over-distance option is presented for an operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceNotice {
    /// Whether the option can be checked at all
    pub enabled: bool,
    pub label: String,
    pub note: String,
}

pub fn distance_notice(rule: &OperatorRule) -> DistanceNotice {
    match rule.distance_limit_km {
        Some(km) => DistanceNotice {
            enabled: true,
            label: format!("片道の営業キロが{}km({}km)を超える", km, km + 1),
            note: format!("※{}kmを超えると単独割引が適用されます。", km),
        },
        None => DistanceNotice {
            enabled: false,
            label: "片道の営業キロが規定を超える".to_string(),
            note: "※選択された会社では、単独割引設定がないか、該当路線がありません。".to_string(),
        },
    }
}
