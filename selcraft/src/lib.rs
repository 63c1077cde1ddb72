#![allow(clippy::needless_return)]

pub mod config;
pub mod json;
pub mod logging;
pub mod recipe;
pub mod selector;
pub mod shapes;

pub use selector::{Combinator, Selector, SelectorBuilder, SelectorError};
