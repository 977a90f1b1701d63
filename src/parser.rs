//! Parser of numbers in positional notation with an optional exponent.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use core::str::Chars;

/// The result of parsing: digit values of the mantissa, the number of digits after the point
/// and the exponent, which is a power of the radix.
#[derive(Debug)]
pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    input: &'a str,
    req_radix: u32,
    pub sign: Sign,
    pub radix: u32,
    pub digits: Vec<u8>,
    pub frac_len: usize,
    pub exp: Exponent,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str, radix: u32) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            input: s,
            req_radix: radix,
            sign: Sign::Pos,
            radix,
            digits: Vec::new(),
            frac_len: 0,
            exp: 0,
        }
    }

    // Returns next character of a string, or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn error(&self) -> Error {
        Error::Parse {
            input: self.input.to_owned(),
            radix: self.req_radix,
        }
    }

    /// Power of the radix the digits are scaled with: value = digits * radix^scale().
    pub fn scale(&self) -> Exponent {
        self.exp - self.frac_len as Exponent
    }

    /// Returns true if all mantissa digits are zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

fn check_radix(radix: u32) -> Result<(), Error> {
    if radix == 0 || (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidArgument("radix must be 0 or in the range 2..=36"))
    }
}

/// Parse an integer: optional sign, optional radix prefix when `radix` is 0, digits.
/// With radix 0, `0x` selects hexadecimal, `0b` binary, a leading `0` octal, otherwise decimal.
pub fn parse_int(s: &str, radix: u32) -> Result<ParserState, Error> {
    check_radix(radix)?;
    let mut ps = ParserState::new(s.trim(), radix);
    ps.next_char();

    parse_sign(&mut ps);
    detect_radix(&mut ps, true);
    parse_digits(&mut ps);

    if ps.digits.is_empty() || ps.cur_char().is_some() {
        return Err(ps.error());
    }

    Ok(ps)
}

/// Parse a number with optional point and exponent.
/// The exponent is introduced by `@`, or by `e`/`E` when the radix does not exceed 10.
/// Exponent digits are decimal and the exponent is a power of the radix.
/// With radix 0, `0x` selects hexadecimal, `0b` binary, otherwise decimal.
pub fn parse_float(s: &str, radix: u32) -> Result<ParserState, Error> {
    check_radix(radix)?;
    let mut ps = ParserState::new(s.trim(), radix);
    ps.next_char();

    parse_sign(&mut ps);
    detect_radix(&mut ps, false);
    parse_digits(&mut ps);

    if ps.cur_char() == Some('.') {
        ps.next_char();
        let int_len = ps.digits.len();
        parse_digits(&mut ps);
        ps.frac_len = ps.digits.len() - int_len;
    }

    if ps.digits.is_empty() {
        return Err(ps.error());
    }

    match ps.cur_char() {
        Some('@') => parse_exp(&mut ps)?,
        Some('e' | 'E') if ps.radix <= 10 => parse_exp(&mut ps)?,
        Some(_) => return Err(ps.error()),
        None => {}
    }

    Ok(ps)
}

fn parse_sign(ps: &mut ParserState) {
    match ps.cur_char() {
        Some('+') => {
            ps.next_char();
        }
        Some('-') => {
            ps.sign = Sign::Neg;
            ps.next_char();
        }
        _ => {}
    }
}

fn detect_radix(ps: &mut ParserState, octal: bool) {
    if ps.radix != 0 {
        return;
    }

    ps.radix = 10;
    if ps.cur_char() == Some('0') {
        match ps.peek_char() {
            Some('x' | 'X') => {
                ps.radix = 16;
                ps.next_char();
                ps.next_char();
            }
            Some('b' | 'B') => {
                ps.radix = 2;
                ps.next_char();
                ps.next_char();
            }
            Some(c) if octal && c.is_ascii_digit() => {
                ps.radix = 8;
            }
            _ => {}
        }
    }
}

fn parse_digits(ps: &mut ParserState) {
    while let Some(d) = ps.cur_char().and_then(|c| c.to_digit(ps.radix)) {
        ps.digits.push(d as u8);
        ps.next_char();
    }
}

fn parse_exp(ps: &mut ParserState) -> Result<(), Error> {
    let mut ch = ps.next_char();
    let mut neg = false;

    match ch {
        Some('+') => ch = ps.next_char(),
        Some('-') => {
            neg = true;
            ch = ps.next_char();
        }
        _ => {}
    }

    let mut e: Exponent = 0;
    let mut any = false;
    while let Some(d) = ch.and_then(|c| c.to_digit(10)) {
        any = true;
        e = e
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as Exponent))
            .ok_or(Error::ExponentOverflow(if neg { Sign::Neg } else { Sign::Pos }))?;
        ch = ps.next_char();
    }

    if !any || ch.is_some() {
        return Err(ps.error());
    }

    ps.exp = if neg { -e } else { e };
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse_int() {
        let ps = parse_int("-0x1F", 0).unwrap();
        assert_eq!(ps.sign, Sign::Neg);
        assert_eq!(ps.radix, 16);
        assert_eq!(ps.digits, vec![1, 15]);

        let ps = parse_int("017", 0).unwrap();
        assert_eq!(ps.radix, 8);
        assert_eq!(ps.digits, vec![0, 1, 7]);

        let ps = parse_int("0", 0).unwrap();
        assert_eq!(ps.radix, 10);
        let ps = parse_int(" +0b101 ", 0).unwrap();
        assert_eq!(ps.radix, 2);
        assert_eq!(ps.digits, vec![1, 0, 1]);

        assert!(parse_int("12a", 10).is_err());
        assert!(parse_int("", 10).is_err());
        assert!(parse_int("-", 10).is_err());
        assert!(parse_int("0x", 0).is_err());
        assert!(parse_int("018", 0).is_err());
        assert!(parse_int("1", 1).is_err());
        assert_eq!(
            parse_int("z", 10).unwrap_err(),
            Error::Parse {
                input: "z".to_owned(),
                radix: 10
            }
        );
    }

    #[test]
    fn test_parse_float() {
        let ps = parse_float("-12.345e-2", 10).unwrap();
        assert_eq!(ps.sign, Sign::Neg);
        assert_eq!(ps.digits, vec![1, 2, 3, 4, 5]);
        assert_eq!(ps.frac_len, 3);
        assert_eq!(ps.exp, -2);
        assert_eq!(ps.scale(), -5);

        let ps = parse_float("a.b@+3", 16).unwrap();
        assert_eq!(ps.digits, vec![10, 11]);
        assert_eq!(ps.scale(), 2);

        let ps = parse_float("0x.8", 0).unwrap();
        assert_eq!(ps.radix, 16);
        assert_eq!(ps.frac_len, 1);

        let ps = parse_float(".5", 10).unwrap();
        assert_eq!(ps.digits, vec![5]);
        let ps = parse_float("5.", 10).unwrap();
        assert_eq!(ps.frac_len, 0);

        assert!(parse_float(".", 10).is_err());
        assert!(parse_float("1e", 10).is_err());
        assert!(parse_float("1e5x", 10).is_err());
        assert!(parse_float("1.2.3", 10).is_err());
        assert!(parse_float("1e99999999999999999999", 10).is_err());
        // 'e' is a digit in hexadecimal
        let ps = parse_float("1e", 16).unwrap();
        assert_eq!(ps.digits, vec![1, 14]);
    }
}
