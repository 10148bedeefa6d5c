use std::fmt;
use std::hash::Hash;

/// Which arithmetic rules a search runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDomain {
    /// Signed 64-bit integers; division only when exact
    Integer,
    /// 64-bit floats; goal matched within a tolerance
    Real,
}

impl fmt::Display for NumericDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericDomain::Integer => write!(f, "integer"),
            NumericDomain::Real => write!(f, "real"),
        }
    }
}

/// A machine-sized number the engine can combine and key nodes by.
///
/// All operators are checked: `None` means the result is not a value of the
/// domain (overflow, non-finite, division by zero, inexact integer division)
/// and the candidate is dropped.
pub trait Scalar:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Exact identity used for the closed and open maps
    type Key: Copy + Eq + Hash + fmt::Debug + Send + Sync;

    const DOMAIN: NumericDomain;

    fn key(self) -> Self::Key;

    /// Absolute value
    fn magnitude(self) -> Self;

    fn is_finite(self) -> bool;

    fn is_zero(self) -> bool;

    fn try_add(self, rhs: Self) -> Option<Self>;

    fn try_sub(self, rhs: Self) -> Option<Self>;

    fn try_mul(self, rhs: Self) -> Option<Self>;

    fn try_div(self, rhs: Self) -> Option<Self>;

    /// Goal matching: exact for integers, `|a - b| <= tolerance` for reals
    fn within(self, other: Self, tolerance: f64) -> bool;
}

impl Scalar for i64 {
    type Key = i64;

    const DOMAIN: NumericDomain = NumericDomain::Integer;

    #[inline]
    fn key(self) -> i64 {
        self
    }

    #[inline]
    fn magnitude(self) -> i64 {
        self.saturating_abs()
    }

    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == 0
    }

    #[inline]
    fn try_add(self, rhs: i64) -> Option<i64> {
        self.checked_add(rhs)
    }

    #[inline]
    fn try_sub(self, rhs: i64) -> Option<i64> {
        self.checked_sub(rhs)
    }

    #[inline]
    fn try_mul(self, rhs: i64) -> Option<i64> {
        self.checked_mul(rhs)
    }

    fn try_div(self, rhs: i64) -> Option<i64> {
        if rhs.is_zero() || self.checked_rem(rhs)? != 0 {
            return None;
        }
        self.checked_div(rhs)
    }

    #[inline]
    fn within(self, other: i64, _tolerance: f64) -> bool {
        self == other
    }
}

#[inline]
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Scalar for f64 {
    type Key = u64;

    const DOMAIN: NumericDomain = NumericDomain::Real;

    /// Bit pattern, with `-0.0` folded onto `0.0`
    #[inline]
    fn key(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == 0.0
    }

    #[inline]
    fn try_add(self, rhs: f64) -> Option<f64> {
        finite(self + rhs)
    }

    #[inline]
    fn try_sub(self, rhs: f64) -> Option<f64> {
        finite(self - rhs)
    }

    #[inline]
    fn try_mul(self, rhs: f64) -> Option<f64> {
        finite(self * rhs)
    }

    fn try_div(self, rhs: f64) -> Option<f64> {
        if rhs.is_zero() {
            return None;
        }
        finite(self / rhs)
    }

    #[inline]
    fn within(self, other: f64, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}
