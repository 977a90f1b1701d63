//! Definitions.

use std::collections::TryReserveError;

use smallvec::CollectionAllocErr;
use thiserror::Error;

/// A word.
pub type Word = u64;

/// Doubled word.
pub type DoubleWord = u128;

/// Word with sign.
pub type SignedWord = i128;

/// An exponent.
pub type Exponent = i64;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = 1 << 60;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = -(1 << 60);

/// Maximum value of a word.
pub const WORD_MAX: Word = Word::MAX;

/// Base of words.
pub const WORD_BASE: DoubleWord = WORD_MAX as DoubleWord + 1;

/// Size of a word in bits.
pub const WORD_BIT_SIZE: usize = core::mem::size_of::<Word>() * 8;

/// Word with the most significant bit set.
pub const WORD_SIGNIFICANT_BIT: Word = WORD_MAX << (WORD_BIT_SIZE - 1);

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision of floating point numbers in bits.
pub const DEFAULT_P: usize = 512;

/// Smallest supported precision in bits.
pub const PRECISION_MIN: usize = 2;

/// Largest supported precision in bits.
pub const PRECISION_MAX: usize = 1 << 32;

/// Upper bound for the estimated size in bits of the result of factorial, primorial and fibonacci.
pub const COMBINATORIAL_MAX_BITS: usize = 1 << 20;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Sign of the product of values with signs `self` and `other`.
    pub fn mul(&self, other: Sign) -> Self {
        if *self == other {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string does not represent a number in the given radix.
    #[error("failed to parse {input:?} as a number in radix {radix}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Radix used for parsing; 0 means the radix was detected from the prefix.
        radix: u32,
    },

    /// The operation is not defined for the argument.
    #[error("argument is outside of the domain: {0}")]
    Domain(&'static str),

    /// The result would exceed the size guard.
    #[error("result is too large: {0}")]
    Overflow(&'static str),

    /// An iterative algorithm did not converge within its iteration bound.
    #[error("no convergence after {iterations} iterations")]
    Convergence {
        /// Number of completed iterations.
        iterations: usize,
    },

    /// The exponent value becomes greater than the upper limit of the range of exponent values.
    #[error("{} exponent overflow", overflow_side(.0))]
    ExponentOverflow(Sign),

    /// Divizor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Memory allocation error.
    #[error("memory allocation failure")]
    MemoryAllocation,
}

fn overflow_side(s: &Sign) -> &'static str {
    if s.is_positive() {
        "positive"
    } else {
        "negative"
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::MemoryAllocation
    }
}

impl From<CollectionAllocErr> for Error {
    fn from(_: CollectionAllocErr) -> Self {
        Error::MemoryAllocation
    }
}

/// Radix.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Radix {
    /// Binary.
    Bin = 2,

    /// Octal.
    Oct = 8,

    /// Decimal.
    Dec = 10,

    /// Hexadecimal.
    Hex = 16,
}

impl Radix {
    /// Numeric value of the radix.
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// Prefix used when the radix is shown, e.g. `0x`.
    pub fn prefix(&self, uppercase: bool) -> &'static str {
        match (self, uppercase) {
            (Radix::Bin, false) => "0b",
            (Radix::Bin, true) => "0B",
            (Radix::Oct, _) => "0",
            (Radix::Dec, _) => "",
            (Radix::Hex, false) => "0x",
            (Radix::Hex, true) => "0X",
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            2 => Ok(Radix::Bin),
            8 => Ok(Radix::Oct),
            10 => Ok(Radix::Dec),
            16 => Ok(Radix::Hex),
            _ => Err(Error::InvalidArgument("radix must be 2, 8, 10 or 16")),
        }
    }
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Skip rounding: excess bits are dropped.
    None = 1,

    /// Round toward positive infinity.
    Up = 2,

    /// Round toward negative infinity.
    Down = 4,

    /// Round toward zero.
    ToZero = 8,

    /// Round away from zero.
    FromZero = 16,

    /// Round to nearest, half to even.
    ToEven = 32,

    /// Round to nearest, half to odd.
    ToOdd = 64,
}

impl RoundingMode {
    /// Returns true if the mode rounds to the nearest value.
    pub fn is_nearest(&self) -> bool {
        matches!(self, RoundingMode::ToEven | RoundingMode::ToOdd)
    }
}
