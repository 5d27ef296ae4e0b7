//! # Number types
//!
//! Unit costs can be of any ordered primitive numeric type, integer or float. Other types, like
//! exact rationals, qualify once they implement `CheckedArithmetic` next to the relevant
//! `num-traits` traits.
use std::fmt::{Debug, Display};
use std::ops::Sub;

use num_traits::{CheckedAdd, CheckedMul, FromPrimitive, Zero};

/// Operations needed on unit cost values.
///
/// Quantities shipped are always integral; `FromPrimitive` is used to bring them into the cost
/// type when accumulating the total cost of a solution. Sums and products that could leave the
/// range of the type go through `CheckedArithmetic`.
pub trait Cost:
    Clone +
    PartialOrd +
    Zero +
    Sub<Output = Self> +
    CheckedArithmetic +
    FromPrimitive +
    Display +
    Debug +
{
}

impl<T> Cost for T
where
    T: Clone + PartialOrd + Zero + Sub<Output = T> + CheckedArithmetic + FromPrimitive + Display + Debug,
{
}

/// Addition and multiplication that report leaving the representable range.
///
/// Integers use the `num-traits` checked operations. Floats don't wrap, so for them a result is
/// rejected when it isn't finite.
pub trait CheckedArithmetic: Sized {
    /// Sum, `None` if it can't be represented.
    fn checked_sum(&self, other: &Self) -> Option<Self>;
    /// Product, `None` if it can't be represented.
    fn checked_product(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_checked_arithmetic_integer {
    ($($t:ty),*) => {
        $(
            impl CheckedArithmetic for $t {
                fn checked_sum(&self, other: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, other)
                }

                fn checked_product(&self, other: &Self) -> Option<Self> {
                    CheckedMul::checked_mul(self, other)
                }
            }
        )*
    }
}
impl_checked_arithmetic_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_checked_arithmetic_float {
    ($($t:ty),*) => {
        $(
            impl CheckedArithmetic for $t {
                fn checked_sum(&self, other: &Self) -> Option<Self> {
                    Some(self + other).filter(|value| value.is_finite())
                }

                fn checked_product(&self, other: &Self) -> Option<Self> {
                    Some(self * other).filter(|value| value.is_finite())
                }
            }
        )*
    }
}
impl_checked_arithmetic_float!(f32, f64);
