//! Fixtures shared by the selector benchmarks.

use selcraft::{Combinator, Selector, SelectorBuilder, SelectorError};

pub fn random_ident(rng: &mut fastrand::Rng) -> String {
    let len = rng.usize(3..10);
    std::iter::once(rng.lowercase())
        .chain((1..len).map(|_| rng.alphanumeric()))
        .collect()
}

/// `element#id` followed by `parts` classes, attributes and pseudo-classes each.
pub fn compound(rng: &mut fastrand::Rng, parts: usize) -> Result<Selector, SelectorError> {
    let builder = SelectorBuilder::new();
    let mut selector = builder
        .element(random_ident(rng))?
        .id(random_ident(rng))?;
    for _ in 0..parts {
        selector = selector
            .class(random_ident(rng))
            .attr(format!("data-{}", random_ident(rng)))
            .pseudo_class(random_ident(rng));
    }
    return Ok(selector);
}

/// Left-deep chain of `depth` combinations over small compounds.
pub fn complex(rng: &mut fastrand::Rng, depth: usize) -> Result<Selector, SelectorError> {
    let combinators = [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ];
    let mut selector = compound(rng, 1)?;
    for i in 0..depth {
        let right = compound(rng, 1)?;
        selector = Selector::combine(&selector, combinators[i % combinators.len()], &right);
    }
    return Ok(selector);
}
