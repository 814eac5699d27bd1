//! In-memory operator rule registry

use std::collections::BTreeMap;

use super::operator::{Operator, OperatorRule};

/// Operator rule registry (会社ごとのルール)
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: BTreeMap<Operator, OperatorRule>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = OperatorRule>,
    {
        Self {
            rules: rules.into_iter().map(|r| (r.operator, r)).collect(),
        }
    }

    /// Insert a rule, returning the rule it replaced
    pub fn insert(&mut self, rule: OperatorRule) -> Option<OperatorRule> {
        self.rules.insert(rule.operator, rule)
    }

    pub fn get(&self, operator: Operator) -> Option<&OperatorRule> {
        self.rules.get(&operator)
    }

    /// Rule for a known operator, falling back when the registry has no row for it
    pub fn rule_for(&self, operator: Operator) -> OperatorRule {
        self.get(operator)
            .copied()
            .unwrap_or_else(|| OperatorRule::fallback(operator))
    }

    /// Rule for an operator identifier. Unknown identifiers get the fallback rule.
    pub fn lookup(&self, operator_id: &str) -> OperatorRule {
        match Operator::from_id(operator_id) {
            Some(operator) => self.rule_for(operator),
            None => OperatorRule::fallback(Operator::Other),
        }
    }

    /// One rule per known operator, in declaration order
    pub fn rules(&self) -> Vec<OperatorRule> {
        Operator::ALL.iter().map(|&op| self.rule_for(op)).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waribiki_types::RoundingMode;

    #[test]
    fn test_missing_operator_falls_back() {
        let book = RuleBook::from_rules([OperatorRule::new(
            Operator::Jr,
            Some(100),
            RoundingMode::Down,
        )]);
        let rule = book.rule_for(Operator::Seibu);
        assert_eq!(rule.operator, Operator::Seibu);
        assert_eq!(rule.distance_limit_km, None);
        assert_eq!(rule.rounding, RoundingMode::Up);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let book = RuleBook::new();
        let rule = book.lookup("Hokutetsu");
        assert_eq!(rule, OperatorRule::fallback(Operator::Other));
    }

    #[test]
    fn test_rules_cover_every_operator() {
        let book = RuleBook::new();
        let rules = book.rules();
        assert_eq!(rules.len(), Operator::ALL.len());
        assert_eq!(rules[0].operator, Operator::Jr);
        assert_eq!(rules[16].operator, Operator::Other);
    }
}
