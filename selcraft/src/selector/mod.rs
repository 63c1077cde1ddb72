//! Fluent builder for CSS compound and complex selectors.
//!
//! Every call returns a new [`Selector`]; nothing is mutated in place. The
//! element, id and pseudo-element slots accept one value per chain, classes,
//! attributes and pseudo-classes accumulate in call order.
//!
//! ```
//! use selcraft::selector::SelectorBuilder;
//!
//! let builder = SelectorBuilder::new();
//! let selector = builder.element("a")?.attr("href$=\".png\"").pseudo_class("focus");
//! assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
//! # Ok::<(), selcraft::selector::SelectorError>(())
//! ```

mod combinator;
mod error;
mod specificity;

pub use combinator::{Combinator, CombinatorSpacing};
pub use error::{SelectorError, SelectorPart, SelectorResult};
pub use specificity::Specificity;

use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace, warn};

/// A selector part that may be set once per chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Slot {
    #[default]
    Vacant,
    Filled(String),
}

impl Slot {
    fn fill(&self, part: SelectorPart, text: String) -> SelectorResult<Slot> {
        match self {
            Slot::Vacant => Ok(Slot::Filled(text)),
            Slot::Filled(existing) => {
                warn!(%part, %existing, rejected = %text, "restricted selector part set twice");
                Err(SelectorError::DuplicateSelectorPart { part })
            }
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Slot::Vacant => "",
            Slot::Filled(text) => text,
        }
    }

    fn is_filled(&self) -> bool {
        matches!(self, Slot::Filled(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rendered {
    text: String,
    specificity: Specificity,
}

/// Immutable selector accumulator.
///
/// Fragments are stored pre-formatted (`#id`, `.class`, `[attr]`, `:pseudo`,
/// `::pseudo-element`) so rendering is plain concatenation in the fixed
/// compound order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    element: Slot,
    id: Slot,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Slot,
    // set by `combine`, wins over the fields above
    rendered: Option<Rendered>,
}

impl Selector {
    pub fn element(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        let value = value.as_ref();
        trace!(value, "element");
        let element = self.element.fill(SelectorPart::Element, value.to_owned())?;
        return Ok(Selector {
            element,
            ..self.clone()
        });
    }

    pub fn id(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        let value = value.as_ref();
        trace!(value, "id");
        let id = self.id.fill(SelectorPart::Id, format!("#{value}"))?;
        return Ok(Selector { id, ..self.clone() });
    }

    pub fn class(&self, value: impl AsRef<str>) -> Selector {
        let value = value.as_ref();
        trace!(value, "class");
        let mut next = self.clone();
        next.classes.push(format!(".{value}"));
        return next;
    }

    /// Appends an attribute selector. `value` is the expression without the
    /// surrounding brackets and is emitted verbatim.
    pub fn attr(&self, value: impl AsRef<str>) -> Selector {
        let value = value.as_ref();
        trace!(value, "attr");
        let mut next = self.clone();
        next.attributes.push(format!("[{value}]"));
        return next;
    }

    pub fn pseudo_class(&self, value: impl AsRef<str>) -> Selector {
        let value = value.as_ref();
        trace!(value, "pseudo_class");
        let mut next = self.clone();
        next.pseudo_classes.push(format!(":{value}"));
        return next;
    }

    pub fn pseudo_element(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        let value = value.as_ref();
        trace!(value, "pseudo_element");
        let pseudo_element = self
            .pseudo_element
            .fill(SelectorPart::PseudoElement, format!("::{value}"))?;
        return Ok(Selector {
            pseudo_element,
            ..self.clone()
        });
    }

    /// Joins two selectors as `left combinator right`, one space on each side
    /// of the combinator. The combinator is not validated.
    pub fn combine(left: &Selector, combinator: impl AsRef<str>, right: &Selector) -> Selector {
        return Self::combine_with(left, combinator, right, CombinatorSpacing::Padded);
    }

    pub fn combine_with(
        left: &Selector,
        combinator: impl AsRef<str>,
        right: &Selector,
        spacing: CombinatorSpacing,
    ) -> Selector {
        let combinator = combinator.as_ref();
        let text = spacing.join(&left.stringify(), combinator, &right.stringify());
        debug!(combinator, ?spacing, rendered = %text, "combine");
        return Selector {
            rendered: Some(Rendered {
                text,
                specificity: left.specificity() + right.specificity(),
            }),
            ..Default::default()
        };
    }

    pub fn stringify(&self) -> String {
        if let Some(rendered) = &self.rendered {
            return rendered.text.clone();
        }
        return [self.element.as_str(), self.id.as_str()]
            .into_iter()
            .chain(self.classes.iter().map(String::as_str))
            .chain(self.attributes.iter().map(String::as_str))
            .chain(self.pseudo_classes.iter().map(String::as_str))
            .chain([self.pseudo_element.as_str()])
            .join("");
    }

    pub fn specificity(&self) -> Specificity {
        if let Some(rendered) = &self.rendered {
            return rendered.specificity;
        }
        let element = match &self.element {
            Slot::Filled(name) if name != "*" => 1,
            _ => 0,
        };
        return Specificity::new(
            self.id.is_filled() as u32,
            (self.classes.len() + self.attributes.len() + self.pseudo_classes.len()) as u32,
            element + self.pseudo_element.is_filled() as u32,
        );
    }

    /// Whether this selector was produced by [`Selector::combine`].
    pub fn is_combined(&self) -> bool {
        self.rendered.is_some()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

/// Stateless root every chain starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    pub const fn new() -> Self {
        Self
    }

    pub fn root(&self) -> Selector {
        Selector::default()
    }

    pub fn element(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        self.root().element(value)
    }

    pub fn id(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        self.root().id(value)
    }

    pub fn class(&self, value: impl AsRef<str>) -> Selector {
        self.root().class(value)
    }

    pub fn attr(&self, value: impl AsRef<str>) -> Selector {
        self.root().attr(value)
    }

    pub fn pseudo_class(&self, value: impl AsRef<str>) -> Selector {
        self.root().pseudo_class(value)
    }

    pub fn pseudo_element(&self, value: impl AsRef<str>) -> SelectorResult<Selector> {
        self.root().pseudo_element(value)
    }

    pub fn combine(&self, left: &Selector, combinator: impl AsRef<str>, right: &Selector) -> Selector {
        Selector::combine(left, combinator, right)
    }

    pub fn stringify(&self, selector: &Selector) -> String {
        selector.stringify()
    }
}
