//! JSON description of a builder call chain.
//!
//! A chain is an array of single-key objects applied in order, a combination
//! nests two recipes around a combinator:
//!
//! ```json
//! { "left": [{ "element": "ul" }], "combinator": ">", "right": [{ "class": "item" }] }
//! ```

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::selector::{CombinatorSpacing, Selector, SelectorBuilder, SelectorError, SelectorResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Element(String),
    Id(String),
    Class(String),
    Attr(String),
    PseudoClass(String),
    PseudoElement(String),
}

impl Step {
    fn apply(&self, selector: &Selector) -> SelectorResult<Selector> {
        use Step::*;
        return match self {
            Element(value) => selector.element(value),
            Id(value) => selector.id(value),
            Class(value) => Ok(selector.class(value)),
            Attr(value) => Ok(selector.attr(value)),
            PseudoClass(value) => Ok(selector.pseudo_class(value)),
            PseudoElement(value) => selector.pseudo_element(value),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recipe {
    Chain(Vec<Step>),
    Combine {
        left: Box<Recipe>,
        combinator: String,
        right: Box<Recipe>,
    },
}

impl Recipe {
    pub fn from_json(text: &str) -> Result<Recipe, RecipeError> {
        return Ok(crate::json::from_json(text)?);
    }

    pub fn build(&self) -> SelectorResult<Selector> {
        self.build_with(CombinatorSpacing::default())
    }

    /// Replays the recipe from the builder root. Restricted parts repeated in
    /// a chain fail exactly as the direct calls would.
    pub fn build_with(&self, spacing: CombinatorSpacing) -> SelectorResult<Selector> {
        match self {
            Recipe::Chain(steps) => {
                debug!(steps = steps.len(), "building chain");
                steps
                    .iter()
                    .try_fold(SelectorBuilder::new().root(), |selector, step| step.apply(&selector))
            }
            Recipe::Combine {
                left,
                combinator,
                right,
            } => {
                let left = left.build_with(spacing)?;
                let right = right.build_with(spacing)?;
                Ok(Selector::combine_with(&left, combinator, &right, spacing))
            }
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum RecipeError {
    #[error("could not read selector recipe")]
    #[diagnostic(
        code(selcraft::recipe::json),
        help("a recipe is an array of steps like `{{\"class\": \"a\"}}` or an object with `left`, `combinator` and `right`")
    )]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Selector(#[from] SelectorError),
}

/// Parses and builds in one go.
pub fn build_from_json(text: &str, spacing: CombinatorSpacing) -> Result<Selector, RecipeError> {
    let recipe = Recipe::from_json(text)?;
    return Ok(recipe.build_with(spacing)?);
}

#[cfg(test)]
mod test_recipe {
    use super::*;
    use crate::selector::SelectorPart;

    fn assert_builds(text: &str, expected: &str) {
        let selector = build_from_json(text, CombinatorSpacing::Padded)
            .unwrap_or_else(|err| panic!("recipe `{text}` failed: {err}"));
        assert_eq!(selector.stringify(), expected, "recipe `{text}` rendered differently");
    }

    #[test]
    fn chains() {
        assert_builds("[]", "");
        assert_builds(
            r#"[{"class": "container"}, {"class": "editable"}, {"id": "main"}]"#,
            "#main.container.editable",
        );
        assert_builds(
            r#"[{"element": "a"}, {"attr": "href$=\".png\""}, {"pseudoClass": "focus"}]"#,
            "a[href$=\".png\"]:focus",
        );
        assert_builds(r#"[{"pseudoElement": "first-line"}, {"element": "p"}]"#, "p::first-line");
    }

    #[test]
    fn combinations() {
        assert_builds(
            r#"{"left": [{"element": "div"}], "combinator": "+", "right": [{"element": "span"}]}"#,
            "div + span",
        );
        assert_builds(
            r#"{
                "left": [{"element": "div"}, {"id": "main"}],
                "combinator": "~",
                "right": {"left": [{"element": "p"}], "combinator": " ", "right": [{"class": "note"}]}
            }"#,
            "div#main ~ p   .note",
        );
        let collapsed = build_from_json(
            r#"{"left": [{"element": "p"}], "combinator": " ", "right": [{"class": "note"}]}"#,
            CombinatorSpacing::Collapsed,
        )
        .unwrap();
        assert_eq!(collapsed.stringify(), "p .note");
    }

    #[test]
    fn duplicate_part_fails() {
        let err = build_from_json(r#"[{"id": "a"}, {"class": "x"}, {"id": "b"}]"#, CombinatorSpacing::Padded)
            .unwrap_err();
        assert!(
            matches!(
                err,
                RecipeError::Selector(SelectorError::DuplicateSelectorPart { part: SelectorPart::Id })
            ),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn malformed_json_fails() {
        for text in [r#"[{"colour": "red"}]"#, r#"{"left": []}"#, "[", r#"[{"id": 3}]"#] {
            let err = Recipe::from_json(text).unwrap_err();
            assert!(matches!(err, RecipeError::Json(_)), "expected json error for `{text}`, got {err:?}");
        }
    }
}
