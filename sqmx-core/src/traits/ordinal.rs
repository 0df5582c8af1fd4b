//! Value contract for matrix cells
//!
//! This module defines the trait that constrains what types can be
//! stored in a matrix and folded by its algorithms.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};

/// Trait for totally ordered values closed under basic arithmetic
///
/// All arithmetic is resolved per matrix instantiation, so the engines
/// are generic over `T: Ordinal` rather than dispatching per cell. Values
/// are `Clone` rather than `Copy` so arbitrary-precision types can
/// implement the contract too.
pub trait Ordinal: Clone + PartialEq + Debug + Display {
    /// Neutral element of addition
    fn zero() -> Self;

    /// Build a value from a raw integer (literal and random initializers)
    ///
    /// Conversion follows `as` casts: a narrower integer type keeps only
    /// the low bits (`i32` wraps), a float type rounds to nearest.
    fn from_i64(value: i64) -> Self;

    /// Build a value from a raw float
    ///
    /// Integer types truncate toward zero and saturate at their bounds;
    /// NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn subtract(&self, other: &Self) -> Self;

    fn multiply(&self, other: &Self) -> Self;

    /// Division per the value type; integer types truncate toward zero
    fn divide(&self, other: &Self) -> Self;

    /// Division by a raw integer count
    ///
    /// The count is converted like [`Ordinal::from_i64`], so it must fit
    /// the value type.
    fn divide_by(&self, count: i64) -> Self;

    fn abs(&self) -> Self;

    fn negate(&self) -> Self;

    /// Larger of `self` and `other`
    fn max(&self, other: &Self) -> Self {
        if self.compare(other) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Strictly greater than zero
    fn positive(&self) -> bool {
        self.compare(&Self::zero()) == Ordering::Greater
    }

    /// Total order over all values of the type
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_ordinal_integer {
    ($($t:ty),*) => {$(
        impl Ordinal for $t {
            fn zero() -> Self {
                0
            }

            fn from_i64(value: i64) -> Self {
                value as $t
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn add(&self, other: &Self) -> Self {
                *self + *other
            }

            fn subtract(&self, other: &Self) -> Self {
                *self - *other
            }

            fn multiply(&self, other: &Self) -> Self {
                *self * *other
            }

            fn divide(&self, other: &Self) -> Self {
                *self / *other
            }

            fn divide_by(&self, count: i64) -> Self {
                *self / (count as $t)
            }

            fn abs(&self) -> Self {
                <$t>::abs(*self)
            }

            fn negate(&self) -> Self {
                -*self
            }

            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

macro_rules! impl_ordinal_float {
    ($($t:ty),*) => {$(
        impl Ordinal for $t {
            fn zero() -> Self {
                0.0
            }

            fn from_i64(value: i64) -> Self {
                value as $t
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn add(&self, other: &Self) -> Self {
                *self + *other
            }

            fn subtract(&self, other: &Self) -> Self {
                *self - *other
            }

            fn multiply(&self, other: &Self) -> Self {
                *self * *other
            }

            fn divide(&self, other: &Self) -> Self {
                *self / *other
            }

            fn divide_by(&self, count: i64) -> Self {
                *self / (count as $t)
            }

            // `f32::abs` lives in std, so strip the sign by comparison
            fn abs(&self) -> Self {
                if *self < 0.0 {
                    -*self
                } else {
                    *self
                }
            }

            fn negate(&self) -> Self {
                -*self
            }

            fn compare(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

impl_ordinal_integer!(i32, i64, i128);
impl_ordinal_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(Ordinal::add(&3i64, &4), 7);
        assert_eq!(Ordinal::subtract(&3i64, &4), -1);
        assert_eq!(Ordinal::multiply(&3i64, &4), 12);
        assert_eq!(Ordinal::divide(&-7i64, &2), -3);
        assert_eq!((-7i64).divide_by(2), -3);
        assert_eq!(Ordinal::abs(&-5i32), 5);
        assert_eq!((5i128).negate(), -5);
        assert_eq!(<i64 as Ordinal>::zero(), 0);
    }

    #[test]
    fn test_integer_order_helpers() {
        assert_eq!(Ordinal::max(&3i64, &9), 9);
        assert_eq!(Ordinal::max(&9i64, &3), 9);
        assert!(1i64.positive());
        assert!(!0i64.positive());
        assert!(!(-1i64).positive());
        assert_eq!(2i64.compare(&3), Ordering::Less);
    }

    #[test]
    fn test_float_total_order() {
        assert_eq!(1.5f64.compare(&1.5), Ordering::Equal);
        assert_eq!((-0.5f64).compare(&0.5), Ordering::Less);
        assert_eq!(Ordinal::abs(&-2.5f64), 2.5);
        assert_eq!(Ordinal::abs(&2.5f32), 2.5);
        assert_eq!(3.0f64.divide_by(2), 1.5);
        assert_eq!(<f64 as Ordinal>::from_i64(-4), -4.0);
        assert_eq!(<i64 as Ordinal>::from_f64(2.9), 2);
    }

    #[test]
    fn test_narrowing_conversions_follow_casts() {
        assert_eq!(<i32 as Ordinal>::from_i64(i64::from(i32::MAX) + 1), i32::MIN);
        assert_eq!(<i32 as Ordinal>::from_i64(-3), -3);
        assert_eq!(<i32 as Ordinal>::from_f64(-2.9), -2);
        assert_eq!(<i32 as Ordinal>::from_f64(1e12), i32::MAX);
        assert_eq!(<i64 as Ordinal>::from_f64(f64::NAN), 0);
        assert_eq!(7i32.divide_by(2), 3);
    }
}
