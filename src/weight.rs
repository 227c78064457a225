//! Numeric bounds shared by weighted edges and flow capacities.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};

/// A type that has a zero value.
pub trait Zero {
    fn zero() -> Self;
}

macro_rules! impl_zero(
    ( $( $t:ident ),* ) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    0
                }
            }
        )*
    }
);

impl_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A type that has minimum and maximum values.
pub trait Bounded {
    fn min_value() -> Self;
    fn max_value() -> Self;
}

macro_rules! impl_bounded(
    ( $( $t:ident ),* ) => {
        $(
            impl Bounded for $t {
                fn min_value() -> Self {
                    $t::MIN
                }

                fn max_value() -> Self {
                    $t::MAX
                }
            }
        )*
    }
);

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The bound required of an edge/flow weight: a totally-ordered, hashable, additive
/// quantity with a zero and known bounds.
pub trait Weight:
    Copy + Eq + Hash + Ord + Debug + Add<Output = Self> + Sub<Output = Self> + Zero + Bounded
{
}

impl<T> Weight for T where
    T: Copy + Eq + Hash + Ord + Debug + Add<Output = T> + Sub<Output = T> + Zero + Bounded
{
}
