use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const FIELD_COUNT: usize = 2;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a rectangle from positional values in field order (`width`, `height`).
    pub fn from_fields(fields: &[f64]) -> Result<Self, ShapeError> {
        match *fields {
            [width, height] => Ok(Self::new(width, height)),
            _ => Err(ShapeError::FieldCount {
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }

    pub fn area(&self) -> f64 {
        return self.width * self.height;
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("expected {expected} positional fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}
