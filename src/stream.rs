//! Extraction of numbers from a text stream.

use crate::defs::Error;
use core::str::FromStr;
use std::io::BufRead;
use tracing::debug;

/// Reads whitespace-delimited tokens from a reader and converts them to numbers.
///
/// A token that can not be read or parsed puts the scanner into the failed state instead of
/// returning an error. While the state is failed, reads return `None` and consume nothing
/// until [`Scanner::clear`] is called.
///
/// ```
/// use astro_bignum::{BigInt, Rational, Scanner};
///
/// let mut sc = Scanner::new("42 -3/6 x".as_bytes());
/// let mut a = BigInt::new();
/// let mut q = Rational::default();
/// sc.read_into(&mut a).read_into(&mut q);
/// assert!(!sc.fail());
/// assert_eq!(a, 42);
/// assert_eq!(q, Rational::new(BigInt::from(-1), BigInt::from(2)).unwrap());
///
/// assert!(sc.read::<BigInt>().is_none());
/// assert!(sc.fail());
/// ```
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    failed: bool,
    eof: bool,
}

impl<R: BufRead> Scanner<R> {
    /// Scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            failed: false,
            eof: false,
        }
    }

    /// Returns true if a read failed.
    pub fn fail(&self) -> bool {
        self.failed
    }

    /// Returns true if the end of the input was reached.
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Resets the failed state.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next token. Sets the failed state at the end of the input, on an I/O error,
    /// or when the token is not valid UTF-8.
    pub fn token(&mut self) -> Option<String> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(Some(t)) => Some(t),
            Ok(None) => {
                self.failed = true;
                None
            }
            Err(e) => {
                debug!(error = %e, "token can not be read");
                self.failed = true;
                None
            }
        }
    }

    /// Reads the next token and parses it with `FromStr`.
    pub fn read<T: FromStr<Err = Error>>(&mut self) -> Option<T> {
        self.read_with(|s| s.parse())
    }

    /// Reads the next token and converts it with `f`, e.g. with a parsing function of a context.
    pub fn read_with<T, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce(&str) -> Result<T, Error>,
    {
        let t = self.token()?;
        match f(&t) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(token = t.as_str(), error = %e, "token is not a number");
                self.failed = true;
                None
            }
        }
    }

    /// Reads the next token into `v`. The value is left unchanged on failure.
    pub fn read_into<T: FromStr<Err = Error>>(&mut self, v: &mut T) -> &mut Self {
        if let Some(r) = self.read() {
            *v = r;
        }
        self
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                self.eof = true;
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !bytes.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    bytes.push(b);
                }
                used += 1;
            }
            self.reader.consume(used);

            if done {
                break;
            }
        }

        if bytes.is_empty() {
            return Ok(None);
        }

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Radix;
    use crate::float::BigFloat;
    use crate::int::BigInt;
    use crate::ratio::Rational;
    use crate::Context;
    use std::io::BufReader;

    #[test]
    fn test_read() {
        let mut sc = Scanner::new("  12\n\t-7/14   0x1p 3.5".as_bytes());
        assert_eq!(sc.read::<BigInt>(), Some(BigInt::from(12)));
        assert_eq!(
            sc.read::<Rational>(),
            Some(Rational::new(BigInt::from(-1), BigInt::from(2)).unwrap())
        );
        assert!(!sc.fail());

        assert!(sc.read::<BigFloat>().is_none());
        assert!(sc.fail());
        // nothing is consumed in the failed state
        assert!(sc.read::<BigFloat>().is_none());

        sc.clear();
        let v = sc.read::<BigFloat>().unwrap();
        assert_eq!(v, 3.5);
        assert!(sc.eof());

        assert!(sc.token().is_none());
        assert!(sc.fail());
    }

    #[test]
    fn test_read_into() {
        let mut a = BigInt::from(1);
        let mut b = BigInt::from(2);
        let mut sc = Scanner::new("5 five 6".as_bytes());
        sc.read_into(&mut a).read_into(&mut b);
        assert_eq!(a, 5);
        assert_eq!(b, 2);
        assert!(sc.fail());
    }

    #[test]
    fn test_read_with() {
        let mut ctx = Context::new();
        ctx.precision(80).radix(Radix::Hex);

        // a tiny buffer splits tokens between reads
        let mut sc = Scanner::new(BufReader::with_capacity(2, "ff.8 -10 zz".as_bytes()));
        let v = sc.read_with(|s| ctx.float_from_str(s)).unwrap();
        assert_eq!(v, 255.5);
        assert_eq!(v.precision(), 80);
        assert_eq!(sc.read_with(|s| ctx.int_from_str(s)), Some(BigInt::from(-16)));
        assert!(sc.read_with(|s| ctx.int_from_str(s)).is_none());
        assert!(sc.fail());

        let mut sc = Scanner::new(&[b'1', b' ', 0xff, 0xfe][..]);
        assert_eq!(sc.read::<BigInt>(), Some(BigInt::from(1)));
        assert!(sc.token().is_none());
        assert!(sc.fail());
    }
}
