use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Selector specificity, compared lexicographically.
///
/// https://www.w3.org/TR/selectors-3/#specificity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Specificity {
    // count of identifiers (e.g. `#app`)
    pub ids: u32,
    // count of attributes (`[type="number"]`), classes (`.container-fluid`), and pseudo-classes (`:hover`)
    pub classes: u32,
    // count of tag names (`div`), and pseudo-elements (`::before`)
    pub types: u32,
}

impl Specificity {
    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self { ids, classes, types }
    }
}

impl Add for Specificity {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        return self;
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        self.ids += rhs.ids;
        self.classes += rhs.classes;
        self.types += rhs.types;
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Specificity::default(), Add::add)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.ids, self.classes, self.types)
    }
}
