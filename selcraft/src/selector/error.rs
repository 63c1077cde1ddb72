use miette::Diagnostic;
use thiserror::Error;

/// The selector parts a compound selector may contain at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectorPart {
    Element,
    Id,
    PseudoElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SelectorError {
    #[error("element, id and pseudo-element should not occur more than one time inside the selector (`{part}` is already set)")]
    #[diagnostic(
        code(selcraft::selector::duplicate_part),
        help("start a new chain from the builder root, or combine two selectors")
    )]
    DuplicateSelectorPart { part: SelectorPart },
}

pub type SelectorResult<T> = Result<T, SelectorError>;
