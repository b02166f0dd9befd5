use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use approx::{AbsDiffEq, abs_diff_eq};
use ordered_float::OrderedFloat;
use radix_heap::Radix;

/// Weight of a directed edge, e.g. the walking distance between two campus locations.
///
/// Distances are expected to be non-negative: the shortest path search relies on it and
/// negative values are outside of its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    pub fn is_negative(&self) -> bool {
        self.value() < 0.0
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, distance| total + distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl AbsDiffEq for Distance {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        abs_diff_eq!(self.value(), other.value(), epsilon = epsilon)
    }
}

// The IEEE 754 bit pattern of a non-negative float grows monotonically with its value,
// which is all the radix heap needs to order the search frontier.
impl Radix for Distance {
    const RADIX_BITS: u32 = u64::RADIX_BITS;

    fn radix_similarity(&self, other: &Self) -> u32 {
        self.value()
            .to_bits()
            .radix_similarity(&other.value().to_bits())
    }
}

/// Location on a 2D map, e.g. the campus coordinate of a building entrance.
/// Two points are the same node only if their coordinates match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    pub const fn x(&self) -> f64 {
        self.x.0
    }

    pub const fn y(&self) -> f64 {
        self.y.0
    }

    /// Straight line (euclidean) distance between two points.
    pub fn distance_to(&self, other: &Self) -> Distance {
        Distance::new((self.x() - other.x()).hypot(self.y() - other.y()))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
