//! Formatting of numbers: `core::fmt` traits and stream-style format flags.

use crate::common::util::digit_char;
use crate::defs::Exponent;
use crate::defs::Radix;
use crate::float::BigFloat;
use crate::int::BigInt;
use crate::ratio::Rational;
use crate::strop::default_digits;
use core::fmt::Binary;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::LowerExp;
use core::fmt::LowerHex;
use core::fmt::Octal;
use core::fmt::UpperExp;
use core::fmt::UpperHex;

/// Floating point notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `precision` significant digits, scientific notation for very large and very small values,
    /// trailing zeros removed.
    #[default]
    Default,

    /// `precision` digits after the point.
    Fixed,

    /// One digit before the point, `precision` digits after the point, and an exponent.
    Scientific,
}

/// Placement of the fill characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjust {
    /// Fill after the number.
    Left,

    /// Fill before the number.
    #[default]
    Right,

    /// Fill between the sign with the radix prefix and the digits.
    Internal,
}

/// Format flags of a number.
///
/// ```
/// use astro_bignum::{BigInt, FormatSpec, Adjust, Radix, ToFormatted};
///
/// let spec = FormatSpec::new()
///     .radix(Radix::Hex)
///     .show_base(true)
///     .width(8)
///     .fill('0')
///     .adjust(Adjust::Internal);
///
/// assert_eq!(BigInt::from(-255).to_formatted(&spec), "-0x000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    radix: Radix,
    uppercase: bool,
    show_base: bool,
    show_pos: bool,
    show_point: bool,
    notation: Notation,
    precision: usize,
    width: usize,
    fill: char,
    adjust: Adjust,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            radix: Radix::Dec,
            uppercase: false,
            show_base: false,
            show_pos: false,
            show_point: false,
            notation: Notation::Default,
            precision: 6,
            width: 0,
            fill: ' ',
            adjust: Adjust::Right,
        }
    }
}

impl FormatSpec {
    /// Decimal, right adjusted, precision 6, no width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Radix of the digits.
    pub fn radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    /// Upper case digits, radix prefix and exponent marker.
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Prefix the digits with `0x`, `0b` or `0` for non-decimal radix.
    pub fn show_base(mut self, show_base: bool) -> Self {
        self.show_base = show_base;
        self
    }

    /// Print `+` before non-negative values.
    pub fn show_pos(mut self, show_pos: bool) -> Self {
        self.show_pos = show_pos;
        self
    }

    /// Always print the point and keep trailing zeros of floating point numbers.
    pub fn show_point(mut self, show_point: bool) -> Self {
        self.show_point = show_point;
        self
    }

    /// Floating point notation.
    pub fn notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Number of digits of floating point numbers, see [`Notation`].
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Minimum number of characters.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Character used to reach the width.
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Placement of the fill characters.
    pub fn adjust(mut self, adjust: Adjust) -> Self {
        self.adjust = adjust;
        self
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.show_pos {
            "+"
        } else {
            ""
        }
    }

    fn prefix(&self, is_zero: bool) -> &'static str {
        if self.show_base && !is_zero {
            self.radix.prefix(self.uppercase)
        } else {
            ""
        }
    }

    fn pad(&self, sign: &str, prefix: &str, body: &str) -> String {
        let len = sign.len() + prefix.len() + body.chars().count();
        let fill: String = core::iter::repeat(self.fill)
            .take(self.width.saturating_sub(len))
            .collect();

        match self.adjust {
            Adjust::Left => format!("{sign}{prefix}{body}{fill}"),
            Adjust::Right => format!("{fill}{sign}{prefix}{body}"),
            Adjust::Internal => format!("{sign}{prefix}{fill}{body}"),
        }
    }
}

/// Conversion to a string according to [`FormatSpec`].
pub trait ToFormatted {
    /// Formats the value using the flags of `spec`.
    fn to_formatted(&self, spec: &FormatSpec) -> String;
}

impl ToFormatted for BigInt {
    fn to_formatted(&self, spec: &FormatSpec) -> String {
        let body = self.abs_digits(spec.radix.value(), spec.uppercase);
        spec.pad(spec.sign(self.is_negative()), spec.prefix(self.is_zero()), &body)
    }
}

impl ToFormatted for Rational {
    fn to_formatted(&self, spec: &FormatSpec) -> String {
        let n = self.numer().abs_digits(spec.radix.value(), spec.uppercase);
        let body = if self.is_int() {
            n
        } else {
            let d = self.denom().abs_digits(spec.radix.value(), spec.uppercase);
            format!("{n}/{}{d}", spec.prefix(false))
        };
        spec.pad(spec.sign(self.is_negative()), spec.prefix(self.is_zero()), &body)
    }
}

impl ToFormatted for BigFloat {
    fn to_formatted(&self, spec: &FormatSpec) -> String {
        let body = match spec.notation {
            Notation::Default => general(self, spec.radix, spec.precision, spec.uppercase, spec.show_point),
            Notation::Fixed => fixed(self, spec.radix, spec.precision, spec.uppercase, spec.show_point),
            Notation::Scientific => {
                scientific(self, spec.radix, spec.precision, spec.uppercase, spec.show_point, false)
            }
        };
        spec.pad(spec.sign(self.is_negative()), spec.prefix(self.is_zero()), &body)
    }
}

fn push_digits(s: &mut String, d: &[u8], upper: bool) {
    s.extend(d.iter().map(|&d| digit_char(d, upper)));
}

// Removes trailing zeros after the point and then the point itself.
fn strip_fraction(s: &mut String) {
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
}

fn exponent_suffix(s: &mut String, rdx: Radix, x: Exponent, upper: bool) {
    let marker = match (rdx, upper) {
        (Radix::Dec, false) => 'e',
        (Radix::Dec, true) => 'E',
        _ => '@',
    };
    s.push(marker);
    s.push_str(&format!("{x:+03}"));
}

// `frac` digits after the point.
fn fixed(v: &BigFloat, rdx: Radix, frac: usize, upper: bool, show_point: bool) -> String {
    let mut d = v.to_fixed_digits(rdx, frac);
    if d.len() <= frac {
        let mut z = vec![0; frac + 1 - d.len()];
        z.append(&mut d);
        d = z;
    }

    let int_len = d.len() - frac;
    let mut s = String::with_capacity(d.len() + 1);
    push_digits(&mut s, &d[..int_len], upper);
    if frac > 0 || show_point {
        s.push('.');
    }
    push_digits(&mut s, &d[int_len..], upper);
    s
}

// One digit before the point and `frac` digits after it.
fn scientific(v: &BigFloat, rdx: Radix, frac: usize, upper: bool, show_point: bool, strip: bool) -> String {
    let (d, x) = v.to_digits(rdx, frac + 1);
    let x = if v.is_zero() { 0 } else { x - 1 };
    mantissa_exponent(&d, rdx, x, upper, show_point, strip)
}

fn mantissa_exponent(d: &[u8], rdx: Radix, x: Exponent, upper: bool, show_point: bool, strip: bool) -> String {
    let mut s = String::with_capacity(d.len() + 8);
    push_digits(&mut s, &d[..1], upper);
    if d.len() > 1 || show_point {
        s.push('.');
    }
    push_digits(&mut s, &d[1..], upper);
    if strip && !show_point {
        strip_fraction(&mut s);
    }
    exponent_suffix(&mut s, rdx, x, upper);
    s
}

// `p` significant digits: positional for exponents in [-4, p), scientific otherwise.
fn general(v: &BigFloat, rdx: Radix, p: usize, upper: bool, show_point: bool) -> String {
    let p = p.max(1);
    let (d, x) = v.to_digits(rdx, p);
    let x = if v.is_zero() { 0 } else { x - 1 };

    if x < -4 || x >= p as Exponent {
        return mantissa_exponent(&d, rdx, x, upper, show_point, true);
    }

    let mut s = String::with_capacity(p + 6);
    if x < 0 {
        s.push_str("0.");
        s.extend(core::iter::repeat('0').take((-x - 1) as usize));
        push_digits(&mut s, &d, upper);
    } else {
        let int_len = x as usize + 1;
        push_digits(&mut s, &d[..int_len], upper);
        s.push('.');
        push_digits(&mut s, &d[int_len..], upper);
    }

    if !show_point {
        strip_fraction(&mut s);
    }
    s
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.abs_digits(10, false))
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.abs_digits(16, false))
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.abs_digits(16, true))
    }
}

impl Octal for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.abs_digits(8, false))
    }
}

impl Binary for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.abs_digits(2, false))
    }
}

macro_rules! impl_fmt_rational {
    ($($trait:ident, $rdx:expr, $prefix:expr, $upper:expr;)*) => {
        $(
            impl $trait for Rational {
                fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                    let n = self.numer().abs_digits($rdx, $upper);
                    let body = if self.is_int() {
                        n
                    } else {
                        format!("{n}/{}", self.denom().abs_digits($rdx, $upper))
                    };
                    f.pad_integral(!self.is_negative(), $prefix, &body)
                }
            }
        )*
    };
}

impl_fmt_rational!(
    Display, 10, "", false;
    LowerHex, 16, "0x", false;
    UpperHex, 16, "0x", true;
    Octal, 8, "0o", false;
    Binary, 2, "0b", false;
);

// Without an explicit precision the number of digits is derived from the precision of the value.
impl Display for BigFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let body = match f.precision() {
            Some(n) => fixed(self, Radix::Dec, n, false, false),
            None => general(self, Radix::Dec, default_digits(self.precision(), Radix::Dec), false, false),
        };
        f.pad_integral(!self.is_negative(), "", &body)
    }
}

impl LowerExp for BigFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let body = match f.precision() {
            Some(n) => scientific(self, Radix::Dec, n, false, false, false),
            None => {
                let n = default_digits(self.precision(), Radix::Dec) - 1;
                scientific(self, Radix::Dec, n, false, false, true)
            }
        };
        f.pad_integral(!self.is_negative(), "", &body)
    }
}

impl UpperExp for BigFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let body = match f.precision() {
            Some(n) => scientific(self, Radix::Dec, n, true, false, false),
            None => {
                let n = default_digits(self.precision(), Radix::Dec) - 1;
                scientific(self, Radix::Dec, n, true, false, true)
            }
        };
        f.pad_integral(!self.is_negative(), "", &body)
    }
}

macro_rules! impl_fmt_float_radix {
    ($($trait:ident, $rdx:expr, $prefix:expr, $upper:expr;)*) => {
        $(
            impl $trait for BigFloat {
                fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                    let body = match f.precision() {
                        Some(n) => fixed(self, $rdx, n, $upper, false),
                        None => general(self, $rdx, default_digits(self.precision(), $rdx), $upper, false),
                    };
                    f.pad_integral(!self.is_negative(), $prefix, &body)
                }
            }
        )*
    };
}

impl_fmt_float_radix!(
    LowerHex, Radix::Hex, "0x", false;
    UpperHex, Radix::Hex, "0x", true;
    Octal, Radix::Oct, "0o", false;
    Binary, Radix::Bin, "0b", false;
);
