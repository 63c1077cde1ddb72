use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// The four combinators of CSS Selectors level 3.
///
/// [`Selector::combine`](super::Selector::combine) takes any `AsRef<str>`, so
/// these are a convenience, not a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, strum::Display)]
pub enum Combinator {
    #[strum(serialize = " ")]
    Descendant,
    #[strum(serialize = ">")]
    Child,
    #[strum(serialize = "+")]
    NextSibling,
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// How a combinator is padded between the rendered halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombinatorSpacing {
    /// One space on each side, verbatim. The descendant combinator renders as
    /// three spaces.
    #[default]
    Padded,
    /// Whitespace-only combinators render as a single space, others are
    /// trimmed and padded with one space.
    Collapsed,
}

impl CombinatorSpacing {
    pub fn join(self, left: &str, combinator: &str, right: &str) -> String {
        match self {
            CombinatorSpacing::Padded => format!("{left} {combinator} {right}"),
            CombinatorSpacing::Collapsed => {
                let combinator = combinator.trim();
                if combinator.is_empty() {
                    format!("{left} {right}")
                } else {
                    format!("{left} {combinator} {right}")
                }
            }
        }
    }
}

#[cfg(test)]
mod test_combinator {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn symbols() {
        let symbols: Vec<String> = Combinator::iter().map(|c| c.to_string()).collect();
        assert_eq!(symbols, [" ", ">", "+", "~"]);
        for c in Combinator::iter() {
            assert_eq!(Combinator::from_str(c.as_ref()), Ok(c));
        }
        assert!(Combinator::from_str("||").is_err());
    }

    #[test]
    fn padded_keeps_whitespace() {
        assert_eq!(CombinatorSpacing::Padded.join("a", " ", "b"), "a   b");
        assert_eq!(CombinatorSpacing::Padded.join("a", ">", "b"), "a > b");
        assert_eq!(CombinatorSpacing::Padded.join("a", "", "b"), "a  b");
    }

    #[test]
    fn collapsed_trims() {
        assert_eq!(CombinatorSpacing::Collapsed.join("a", " ", "b"), "a b");
        assert_eq!(CombinatorSpacing::Collapsed.join("a", "", "b"), "a b");
        assert_eq!(CombinatorSpacing::Collapsed.join("a", " > ", "b"), "a > b");
    }
}
