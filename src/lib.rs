//! Exact rational number arithmetic over primitive signed integers.
//!
//! This library provides `Fraction<T>`, a generic fraction type over any
//! primitive signed integer from `i8` to `i128`.
//!
//! # Features
//!
//! - **Generic over integer width**: Works with `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//! - **Always canonical**: Every value is kept in lowest terms with a positive denominator
//! - **Recoverable errors**: Zero denominators and zero divisors surface as [`FractionError`]
//! - **Optional serde**: Enable the `serde` feature for `Serialize`/`Deserialize`
//!
//! # Design Philosophy
//!
//! Every constructor and every arithmetic operation normalizes its result, so
//! each rational value has exactly one representation. Equality is therefore
//! a field-wise comparison and hashing is sound.
//!
//! The named methods ([`Fraction::add`], [`Fraction::subtract`],
//! [`Fraction::multiply`], [`Fraction::divide`]) are the primary API. The
//! operators from `core::ops` are sugar over them; `/` panics on a zero
//! divisor the same way integer division does, while [`Fraction::divide`]
//! returns an error instead.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use int_fraction::Fraction;
//!
//! let a = Fraction::new(1, 3).unwrap();
//! let b = Fraction::new(5, 3).unwrap();
//!
//! let sum = a + b;
//! assert_eq!(sum.to_string(), "Fraction(2, 1)");
//!
//! let q = a.divide(Fraction::new(-1, 3).unwrap()).unwrap();
//! assert_eq!(q.to_string(), "Fraction(-1, 1)");
//! ```
//!
//! ## Errors
//!
//! ```
//! use int_fraction::{Fraction32, FractionError};
//!
//! assert_eq!(Fraction32::new(1, 0), Err(FractionError::InvalidDenominator));
//!
//! let zero = Fraction32::zero();
//! assert_eq!(Fraction32::one().divide(zero), Err(FractionError::UndefinedInverse));
//! ```

pub mod error;
pub mod fraction_trait;
#[cfg(feature = "serde")]
mod serde_support;

pub use crate::error::FractionError;
pub use crate::fraction_trait::{FractionInteger, MagnitudeInteger};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A rational number stored as a signed numerator over a positive denominator.
///
/// # Type Parameter
///
/// `T` must implement [`FractionInteger`], which covers the primitive signed
/// integers.
///
/// # Invariants
///
/// - Denominator is never zero, and is always positive
/// - `gcd(|numer|, denom) == 1`
/// - Zero is always represented as `0/1`
///
/// # Examples
///
/// ```
/// use int_fraction::Fraction;
///
/// let r = Fraction::<i64>::new(2, -6).unwrap();
/// assert_eq!(*r.numer(), -1);
/// assert_eq!(*r.denom(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fraction<T: FractionInteger> {
    numer: T,
    denom: T,
}

impl<T: FractionInteger> Fraction<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a fraction in lowest terms.
    ///
    /// Fails with [`FractionError::InvalidDenominator`] when `denom` is zero.
    /// The sign is moved onto the numerator and zero becomes `0/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_fraction::Fraction;
    ///
    /// let r = Fraction::new(-1, -3).unwrap();
    /// assert_eq!(r.to_string(), "Fraction(1, 3)");
    ///
    /// let z = Fraction::new(0, -7).unwrap();
    /// assert_eq!(z.to_string(), "Fraction(0, 1)");
    /// ```
    pub fn new(numer: T, denom: T) -> Result<Self, FractionError> {
        if denom.is_zero_bool() {
            return Err(FractionError::InvalidDenominator);
        }
        let mut r = Self { numer, denom };
        r.normalize();
        Ok(r)
    }

    /// Create a fraction representing the integer `n`.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        Self {
            numer: n,
            denom: T::ONE,
        }
    }

    /// Create a fraction representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ONE,
        }
    }

    /// Create a fraction representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            numer: T::ZERO,
            denom: T::ONE,
        }
    }

    /// The numerator, carrying the sign of the fraction.
    #[inline(always)]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// The denominator, always positive.
    #[inline(always)]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    // ========================================================================
    // BASIC OPERATIONS
    // ========================================================================

    /// Check if the fraction is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero_bool()
    }

    /// Check if the fraction is strictly negative.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative_bool()
    }

    /// Check if the fraction is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Check if the fraction represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    /// Flip the sign. The denominator stays positive, so no renormalization is needed.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }

    /// Get the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    /// Get the reciprocal (1/x).
    ///
    /// Fails with [`FractionError::UndefinedInverse`] if the fraction is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_fraction::Fraction;
    ///
    /// let r = Fraction::new(-2, 3).unwrap().inverse().unwrap();
    /// assert_eq!(r.to_string(), "Fraction(-3, 2)");
    /// ```
    pub fn inverse(self) -> Result<Self, FractionError> {
        if self.is_zero() {
            return Err(FractionError::UndefinedInverse);
        }
        Self::new(self.denom, self.numer)
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// Bring the fields back to canonical form after construction or mutation.
    fn normalize(&mut self) {
        if self.numer.is_zero_bool() {
            self.denom = T::ONE;
            return;
        }
        if self.denom.is_negative_bool() {
            self.numer = -self.numer;
            self.denom = -self.denom;
        }
        // Bounded by the now-positive denominator, so it fits in `T`.
        let g = T::from_magnitude(T::gcd(self.numer, self.denom));
        if g != T::ONE {
            self.numer = self.numer / g;
            self.denom = self.denom / g;
        }
    }

    // ========================================================================
    // ARITHMETIC - ADDITION
    // ========================================================================

    /// Add two fractions.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_fraction::Fraction;
    ///
    /// let a = Fraction::new(1, 3).unwrap();
    /// let sum = a.add(a);
    /// assert_eq!(sum.to_string(), "Fraction(2, 3)");
    /// ```
    #[allow(clippy::should_implement_trait)] // Add is implemented and forwards here
    #[inline]
    pub fn add(self, other: Self) -> Self {
        let mut r = self;
        r.add_assign(other);
        r
    }

    /// Add `other` into `self`.
    ///
    /// Scales both numerators onto `lcm(denominators)` before summing.
    pub fn add_assign(&mut self, other: Self) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = other;
            return;
        }

        let common = T::lcm(self.denom, other.denom);
        let scale_self = common / self.denom;
        let scale_other = common / other.denom;
        debug_assert!(
            scale_self > T::ZERO && scale_other > T::ZERO,
            "negative denominator encountered"
        );

        self.numer = self.numer * scale_self + other.numer * scale_other;
        self.denom = common;
        self.normalize();
    }

    /// Subtract another fraction.
    ///
    /// Equivalent to `self.add(other.negate())`.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self.add(other.negate())
    }

    /// Subtract `other` from `self` in place.
    #[inline]
    pub fn subtract_assign(&mut self, other: Self) {
        self.add_assign(other.negate());
    }

    // ========================================================================
    // ARITHMETIC - MULTIPLICATION
    // ========================================================================

    /// Multiply two fractions.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_fraction::Fraction;
    ///
    /// let a = Fraction::new(2, 6).unwrap();
    /// let b = Fraction::new(3, 6).unwrap();
    /// assert_eq!(a.multiply(b).to_string(), "Fraction(1, 6)");
    /// ```
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        let mut r = self;
        r.multiply_assign(other);
        r
    }

    /// Multiply `self` by `other` in place.
    pub fn multiply_assign(&mut self, other: Self) {
        if self.is_zero() {
            return;
        }
        if other.is_zero() {
            *self = Self::zero();
            return;
        }
        self.numer = self.numer * other.numer;
        self.denom = self.denom * other.denom;
        self.normalize();
    }

    /// Divide by another fraction.
    ///
    /// Fails with [`FractionError::UndefinedInverse`] if `other` is zero.
    #[inline]
    pub fn divide(self, other: Self) -> Result<Self, FractionError> {
        let mut r = self;
        r.divide_assign(other)?;
        Ok(r)
    }

    /// Divide `self` by `other` in place.
    ///
    /// On error `self` is left untouched.
    pub fn divide_assign(&mut self, other: Self) -> Result<(), FractionError> {
        let inv = other.inverse()?;
        self.multiply_assign(inv);
        Ok(())
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Equality of the canonical representations.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        (self.is_zero() && other.is_zero())
            || (self.numer == other.numer && self.denom == other.denom)
    }

    /// Strict less-than.
    ///
    /// A negative value is smaller than a non-negative one. For a shared sign
    /// the cross products decide; both denominators are positive, so the
    /// inequality keeps its direction.
    ///
    /// # Panics
    ///
    /// The cross products are not widened: like any arithmetic on `T`, they
    /// panic on overflow in debug builds and wrap in release builds.
    pub fn less_than(&self, other: &Self) -> bool {
        if self.is_negative() != other.is_negative() {
            return self.is_negative();
        }
        self.numer * other.denom < other.numer * self.denom
    }

    /// Strict greater-than, as neither less-than nor equal.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        !(self.less_than(other) || self.equals(other))
    }

    /// Three-way comparison consistent with [`equals`](Fraction::equals) and
    /// [`less_than`](Fraction::less_than).
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.equals(other) {
            Ordering::Equal
        } else if self.less_than(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    /// Write the canonical form to stdout, followed by a newline.
    pub fn display(&self) {
        println!("{}", self);
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: FractionInteger> Default for Fraction<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FractionInteger> From<T> for Fraction<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: FractionInteger> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, {})", self.numer, self.denom)
    }
}

impl<T: FractionInteger> Add for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Fraction::add(self, other)
    }
}

impl<T: FractionInteger> Add for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn add(self, other: Self) -> Fraction<T> {
        Fraction::add(*self, *other)
    }
}

impl<T: FractionInteger> AddAssign for Fraction<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        Fraction::add_assign(self, other)
    }
}

impl<T: FractionInteger> Sub for Fraction<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Fraction::subtract(self, other)
    }
}

impl<T: FractionInteger> Sub for &Fraction<T> {
    type Output = Fraction<T>;
    fn sub(self, other: Self) -> Fraction<T> {
        Fraction::subtract(*self, *other)
    }
}

impl<T: FractionInteger> SubAssign for Fraction<T> {
    fn sub_assign(&mut self, other: Self) {
        Fraction::subtract_assign(self, other)
    }
}

impl<T: FractionInteger> Mul for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Fraction::multiply(self, other)
    }
}

impl<T: FractionInteger> Mul for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn mul(self, other: Self) -> Fraction<T> {
        Fraction::multiply(*self, *other)
    }
}

impl<T: FractionInteger> MulAssign for Fraction<T> {
    fn mul_assign(&mut self, other: Self) {
        Fraction::multiply_assign(self, other)
    }
}

/// # Panics
///
/// Panics if `other` is zero. Use [`Fraction::divide`] to get an error instead.
impl<T: FractionInteger> Div for Fraction<T> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        match Fraction::divide(self, other) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FractionInteger> Div for &Fraction<T> {
    type Output = Fraction<T>;
    fn div(self, other: Self) -> Fraction<T> {
        *self / *other
    }
}

/// # Panics
///
/// Panics if `other` is zero. Use [`Fraction::divide_assign`] to get an error instead.
impl<T: FractionInteger> DivAssign for Fraction<T> {
    fn div_assign(&mut self, other: Self) {
        if let Err(e) = Fraction::divide_assign(self, other) {
            panic!("{}", e);
        }
    }
}

impl<T: FractionInteger> Neg for Fraction<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: FractionInteger> Neg for &Fraction<T> {
    type Output = Fraction<T>;
    #[inline(always)]
    fn neg(self) -> Fraction<T> {
        self.negate()
    }
}

impl<T: FractionInteger> Sum for Fraction<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::add)
    }
}

impl<T: FractionInteger> Product for Fraction<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Self::multiply)
    }
}

impl<T: FractionInteger> PartialEq for Fraction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: FractionInteger> Eq for Fraction<T> {}

// Field-wise hashing agrees with `eq` since the representation is canonical.
impl<T: FractionInteger> Hash for Fraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

impl<T: FractionInteger> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FractionInteger> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Fraction over `i8`.
pub type Fraction8 = Fraction<i8>;

/// Fraction over `i16`.
pub type Fraction16 = Fraction<i16>;

/// Fraction over `i32`.
pub type Fraction32 = Fraction<i32>;

/// Fraction over `i64` (recommended for most use cases).
pub type Fraction64 = Fraction<i64>;

/// Fraction over `i128`.
pub type Fraction128 = Fraction<i128>;

/// Fraction over `isize`.
pub type FractionIsize = Fraction<isize>;
