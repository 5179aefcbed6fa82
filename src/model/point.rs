use super::Element1D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the address line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    x: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32) -> Self {
        Self { x }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }
}

impl Element1D for Point {
    #[inline]
    fn center(&self) -> i32 {
        self.x
    }

    #[inline]
    fn length(&self) -> i32 {
        0
    }

    #[inline]
    fn moved_by(&self, n: i32) -> Self {
        Self::new(self.x + n)
    }
}

impl From<i32> for Point {
    fn from(x: i32) -> Self {
        Self::new(x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.x)
    }
}
