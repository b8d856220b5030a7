//! Trait system for generic fraction arithmetic over primitive signed integers.
//!
//! This module provides the traits that let `Fraction<T>` work with any of
//! `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`MagnitudeInteger`]: Minimal operations on the unsigned magnitude used by GCD
//! - [`FractionInteger`]: Full operations for element types of `Fraction<T>`
//!
//! # Example
//!
//! ```
//! use int_fraction::FractionInteger;
//!
//! assert_eq!(i32::gcd(-12, 18), 6);
//! assert_eq!(i32::lcm(4, -6), 12);
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Operations on the unsigned magnitude of a [`FractionInteger`].
///
/// GCD runs on magnitudes so that the sign never takes part in the
/// reduction and `T::MIN` has a representable absolute value.
pub trait MagnitudeInteger: Copy + Debug + PartialEq + Eq + PartialOrd + Ord + 'static {
    /// Returns `true` if this value is zero.
    fn is_zero_bool(&self) -> bool;

    /// Returns the number of trailing zero bits.
    fn trailing_zeros_u32(&self) -> u32;

    /// Right shift by `shift` bits.
    fn shr_u32(&self, shift: u32) -> Self;

    /// Left shift by `shift` bits.
    fn shl_u32(&self, shift: u32) -> Self;

    /// Subtract with wrapping on underflow.
    fn wrapping_sub(&self, other: &Self) -> Self;
}

/// Signed integer type suitable for use in `Fraction<T>`.
///
/// Arithmetic goes through the plain operator traits, so overflow behaves
/// exactly as it does for `T` itself (a panic in debug builds, wrapping in
/// release builds).
///
/// # Implemented Types
///
/// `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
pub trait FractionInteger:
    Copy
    + Debug
    + Display
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// The unsigned type holding `|self|`.
    type Magnitude: MagnitudeInteger;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Returns `true` if this value is zero.
    fn is_zero_bool(&self) -> bool;

    /// Returns `true` if this value is strictly negative.
    fn is_negative_bool(&self) -> bool;

    /// Absolute value as the unsigned magnitude type.
    fn magnitude(&self) -> Self::Magnitude;

    /// Convert a magnitude back, reinterpreting the bits.
    ///
    /// Only values up to `T::MAX` round-trip; `2^(BITS-1)` comes back as `T::MIN`.
    fn from_magnitude(m: Self::Magnitude) -> Self;

    /// Greatest common divisor of the magnitudes of `a` and `b`, as a magnitude.
    ///
    /// `gcd(0, 0)` is `0`, and `gcd(T::MIN, 0)` is `|T::MIN|`, which only the
    /// magnitude type can hold.
    #[inline]
    fn gcd(a: Self, b: Self) -> Self::Magnitude {
        gcd_generic(a.magnitude(), b.magnitude())
    }

    /// Least common multiple of the magnitudes of `a` and `b`.
    ///
    /// Returns `0` if either argument is zero. Overflows like `T` when the
    /// result exceeds `T::MAX`.
    #[inline]
    fn lcm(a: Self, b: Self) -> Self {
        if a.is_zero_bool() || b.is_zero_bool() {
            return Self::ZERO;
        }
        let g = Self::from_magnitude(Self::gcd(a, b));
        let l = a / g * b;
        if l.is_negative_bool() {
            -l
        } else {
            l
        }
    }
}

/// Macro to implement MagnitudeInteger for a primitive unsigned type.
macro_rules! impl_magnitude_integer {
    ($type:ty) => {
        impl MagnitudeInteger for $type {
            #[inline(always)]
            fn is_zero_bool(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn trailing_zeros_u32(&self) -> u32 {
                self.trailing_zeros()
            }

            #[inline(always)]
            fn shr_u32(&self, shift: u32) -> Self {
                *self >> shift
            }

            #[inline(always)]
            fn shl_u32(&self, shift: u32) -> Self {
                *self << shift
            }

            #[inline(always)]
            fn wrapping_sub(&self, other: &Self) -> Self {
                <$type>::wrapping_sub(*self, *other)
            }
        }
    };
}

/// Macro to implement FractionInteger for a (signed, unsigned) type pair.
macro_rules! impl_fraction_integer {
    ($signed:ty, $unsigned:ty) => {
        impl_magnitude_integer!($unsigned);

        impl FractionInteger for $signed {
            type Magnitude = $unsigned;

            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn is_zero_bool(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn is_negative_bool(&self) -> bool {
                *self < 0
            }

            #[inline(always)]
            fn magnitude(&self) -> $unsigned {
                self.unsigned_abs()
            }

            #[inline(always)]
            fn from_magnitude(m: $unsigned) -> Self {
                m as $signed
            }
        }
    };
}

impl_fraction_integer!(i8, u8);
impl_fraction_integer!(i16, u16);
impl_fraction_integer!(i32, u32);
impl_fraction_integer!(i64, u64);
impl_fraction_integer!(i128, u128);
impl_fraction_integer!(isize, usize);

/// Compute GCD of two magnitudes with the binary (Stein) algorithm.
///
/// # Examples
///
/// ```
/// use int_fraction::fraction_trait::gcd_generic;
///
/// assert_eq!(gcd_generic(48u32, 18u32), 6);
/// assert_eq!(gcd_generic(0u64, 7u64), 7);
/// ```
pub fn gcd_generic<M: MagnitudeInteger>(mut a: M, mut b: M) -> M {
    if a.is_zero_bool() {
        return b;
    }
    if b.is_zero_bool() {
        return a;
    }
    if a == b {
        return a;
    }

    let shift = a.trailing_zeros_u32().min(b.trailing_zeros_u32());
    a = a.shr_u32(a.trailing_zeros_u32());
    b = b.shr_u32(b.trailing_zeros_u32());

    loop {
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        b = b.wrapping_sub(&a);
        if b.is_zero_bool() {
            return a.shl_u32(shift);
        }
        b = b.shr_u32(b.trailing_zeros_u32());
    }
}
