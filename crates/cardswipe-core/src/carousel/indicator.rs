//! Indicator targets and active-state mapping.

use tracing::warn;

/// Card index carried by an indicator activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorTarget {
    /// Attribute held a valid number
    Index(usize),
    /// Attribute was missing or not a number; resolved to card 0
    Coerced,
}

impl IndicatorTarget {
    /// Read a raw target attribute. Missing or non-numeric values resolve
    /// to card 0 and are logged.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.is_empty() => Self::coerced(raw),
            Some(s) => match s.parse::<usize>() {
                Ok(index) => IndicatorTarget::Index(index),
                Err(_) => Self::coerced(raw),
            },
            None => Self::coerced(raw),
        }
    }

    fn coerced(raw: Option<&str>) -> Self {
        warn!(?raw, "Malformed indicator target, using card 0");
        IndicatorTarget::Coerced
    }

    pub fn index(self) -> usize {
        match self {
            IndicatorTarget::Index(index) => index,
            IndicatorTarget::Coerced => 0,
        }
    }
}

impl From<usize> for IndicatorTarget {
    fn from(index: usize) -> Self {
        IndicatorTarget::Index(index)
    }
}

/// Active flag for each of `len` indicators
pub fn indicator_states(current: usize, len: usize) -> Vec<bool> {
    (0..len).map(|i| i == current).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(IndicatorTarget::parse(Some("3")), IndicatorTarget::Index(3));
        assert_eq!(IndicatorTarget::parse(Some(" 2 ")), IndicatorTarget::Index(2));
    }

    #[test]
    fn test_parse_malformed_is_card_zero() {
        for raw in [None, Some(""), Some("abc"), Some("-1"), Some("1.5")] {
            let target = IndicatorTarget::parse(raw);
            assert_eq!(target, IndicatorTarget::Coerced, "{:?}", raw);
            assert_eq!(target.index(), 0);
        }
    }

    #[test]
    fn test_exactly_one_active() {
        let states = indicator_states(2, 5);
        assert_eq!(states, vec![false, false, true, false, false]);
    }
}
