//! Discount rules per operator
//!
//! Distance limits are the one-way operating distance (営業キロ) above which a
//! solo passenger gets the discount. Several private lines state a 100km rule
//! that no route of theirs can reach; the rule is still recorded as stated.

use std::sync::LazyLock;

use waribiki_types::RoundingMode::{Down, Up};

use crate::model::{Operator, OperatorRule, RuleBook};

pub const OPERATOR_RULES: [OperatorRule; 17] = [
    // JR: 切り捨て
    OperatorRule::new(Operator::Jr, Some(100), Down),
    OperatorRule::new(Operator::Kintetsu, Some(100), Up),
    OperatorRule::new(Operator::Tobu, Some(100), Up),
    OperatorRule::new(Operator::Odakyu, Some(100), Up),
    // 西武のみ50km超
    OperatorRule::new(Operator::Seibu, Some(50), Up),
    OperatorRule::new(Operator::Meitetsu, Some(100), Up),
    OperatorRule::new(Operator::Nankai, Some(100), Up),
    OperatorRule::new(Operator::Metro, Some(100), Up),
    OperatorRule::new(Operator::Hankyu, Some(100), Up),
    OperatorRule::new(Operator::Hanshin, Some(100), Up),
    // 単独割引なし
    OperatorRule::new(Operator::Keihan, None, Up),
    OperatorRule::new(Operator::Nishitetsu, None, Up),
    OperatorRule::new(Operator::Sotetsu, None, Up),
    OperatorRule::new(Operator::Keikyu, None, Up),
    OperatorRule::new(Operator::Keisei, None, Up),
    OperatorRule::new(Operator::Tokyu, None, Up),
    OperatorRule::new(Operator::Other, None, Up),
];

pub static BUILTIN_RULES: LazyLock<RuleBook> =
    LazyLock::new(|| RuleBook::from_rules(OPERATOR_RULES));

/// Rule for an operator identifier; unknown identifiers get no threshold and round-up
pub fn lookup_rule(operator_id: &str) -> OperatorRule {
    BUILTIN_RULES.lookup(operator_id)
}
