//! Number-theoretic and combinatorial functions of integers.

use crate::defs::Error;
use crate::defs::Word;
use crate::defs::COMBINATORIAL_MAX_BITS;
use crate::int::BigInt;
use crate::mag::Magnitude;

impl BigInt {
    /// Integer square root rounded toward zero.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is negative.
    pub fn sqrt(&self) -> Result<Self, Error> {
        self.sqrt_rem().map(|(s, _)| s)
    }

    /// Integer square root `s` and remainder `r` such that `self = s*s + r`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the value is negative.
    pub fn sqrt_rem(&self) -> Result<(Self, Self), Error> {
        if self.is_negative() {
            return Err(Error::Domain("square root of a negative integer"));
        }

        let (s, r) = self.m.sqrt_rem();
        Ok((BigInt::from_magnitude(s), BigInt::from_magnitude(r)))
    }

    /// Greatest common divisor of absolute values. `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &Self) -> Self {
        BigInt::from_magnitude(self.m.gcd(&other.m))
    }

    /// Least common multiple of absolute values. The result is 0 if any of the values is 0.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return BigInt::new();
        }

        let g = self.m.gcd(&other.m);
        BigInt::from_magnitude(self.m.div_exact(&g).mul(&other.m))
    }

    fn combinatorial_arg(n: &Self) -> Result<u64, Error> {
        if n.is_negative() {
            return Err(Error::Domain("argument must not be negative"));
        }
        n.m.to_u64()
            .ok_or(Error::Overflow("argument does not fit in 64 bits"))
    }

    /// `n!`
    ///
    /// ## Errors
    ///
    ///  - Domain: `n` is negative.
    ///  - Overflow: `n` does not fit in 64 bits, or the result would be too large.
    pub fn factorial(n: &Self) -> Result<Self, Error> {
        Self::factorial_u64(Self::combinatorial_arg(n)?)
    }

    /// `n!`
    ///
    /// ## Errors
    ///
    ///  - Overflow: the result would be too large.
    pub fn factorial_u64(n: u64) -> Result<Self, Error> {
        // log2(n!) < n*log2(n)
        let est = if n < 2 { 1.0 } else { n as f64 * (n as f64).log2() };
        if est > COMBINATORIAL_MAX_BITS as f64 {
            return Err(Error::Overflow("factorial is too large"));
        }

        Ok(BigInt::from_magnitude(product(2..=n)))
    }

    /// Product of all primes not exceeding `n`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `n` is negative.
    ///  - Overflow: `n` does not fit in 64 bits, or the result would be too large.
    pub fn primorial(n: &Self) -> Result<Self, Error> {
        Self::primorial_u64(Self::combinatorial_arg(n)?)
    }

    /// Product of all primes not exceeding `n`.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the result would be too large.
    pub fn primorial_u64(n: u64) -> Result<Self, Error> {
        // log2(n#) < 1.443*n
        if n as f64 * core::f64::consts::LOG2_E > COMBINATORIAL_MAX_BITS as f64 {
            return Err(Error::Overflow("primorial is too large"));
        }

        if n < 2 {
            return Ok(BigInt::from(1));
        }

        let primes = OddSieve::new(n);
        let iter = core::iter::once(2).chain(primes.iter());
        Ok(BigInt::from_magnitude(product(iter)))
    }

    /// Fibonacci number `F(n)`. For negative `n`, `F(n) = (-1)^(n+1) * F(-n)`.
    ///
    /// ## Errors
    ///
    ///  - Overflow: `|n|` does not fit in 64 bits, or the result would be too large.
    pub fn fibonacci(n: &Self) -> Result<Self, Error> {
        let k = n
            .m
            .to_u64()
            .ok_or(Error::Overflow("argument does not fit in 64 bits"))?;
        let mut f = Self::fibonacci_u64(k)?;
        if n.is_negative() && k & 1 == 0 {
            f.inv_sign();
        }
        Ok(f)
    }

    /// Fibonacci number `F(n)`.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the result would be too large.
    pub fn fibonacci_u64(n: u64) -> Result<Self, Error> {
        // log2(phi) < 0.695
        if n as f64 * 0.695 > COMBINATORIAL_MAX_BITS as f64 {
            return Err(Error::Overflow("fibonacci number is too large"));
        }

        // fast doubling: F(2k) = F(k)(2F(k+1) - F(k)), F(2k+1) = F(k)^2 + F(k+1)^2
        let mut a = Magnitude::zero();
        let mut b = Magnitude::from_word(1);
        for i in (0..64 - n.leading_zeros()).rev() {
            let c = a.mul(&b.shl(1).sub(&a));
            let d = a.sqr().add(&b.sqr());
            if (n >> i) & 1 == 0 {
                a = c;
                b = d;
            } else {
                b = c.add(&d);
                a = d;
            }
        }

        Ok(BigInt::from_magnitude(a))
    }

    /// Random non-negative integer with at most `bits` bits.
    #[cfg(feature = "random")]
    pub fn random_bits(bits: usize) -> Self {
        let n = (bits + crate::defs::WORD_BIT_SIZE - 1) / crate::defs::WORD_BIT_SIZE;
        let w: Vec<Word> = (0..n).map(|_| rand::random::<Word>()).collect();
        BigInt::from_magnitude(Magnitude::from_words(&w).low_bits(bits))
    }
}

/// Product of the values using a balanced product tree.
/// Consecutive values are first multiplied into words.
fn product(iter: impl Iterator<Item = u64>) -> Magnitude {
    let mut words: Vec<Magnitude> = Vec::new();
    let mut acc: Word = 1;
    for v in iter {
        match acc.checked_mul(v) {
            Some(p) => acc = p,
            None => {
                words.push(Magnitude::from_word(acc));
                acc = v;
            }
        }
    }
    words.push(Magnitude::from_word(acc));

    while words.len() > 1 {
        let mut next = Vec::with_capacity((words.len() + 1) / 2);
        let mut it = words.into_iter();
        while let Some(a) = it.next() {
            match it.next() {
                Some(b) => next.push(a.mul(&b)),
                None => next.push(a),
            }
        }
        words = next;
    }

    words.pop().unwrap_or_else(|| Magnitude::from_word(1))
}

/// Sieve of Eratosthenes over odd numbers.
struct OddSieve {
    composite: Vec<u64>,
    n: u64,
}

impl OddSieve {
    // bit i represents the odd number 2i + 1
    fn new(n: u64) -> Self {
        let sz = (n / 2 + 1) as usize;
        let mut composite = vec![0u64; sz / 64 + 1];
        composite[0] |= 1;

        let mut p = 3u64;
        while p * p <= n {
            if composite[(p / 2) as usize / 64] & (1 << ((p / 2) % 64)) == 0 {
                let mut q = p * p;
                while q <= n {
                    let i = (q / 2) as usize;
                    composite[i / 64] |= 1 << (i % 64);
                    q += 2 * p;
                }
            }
            p += 2;
        }

        OddSieve { composite, n }
    }

    fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.n)
            .step_by(2)
            .filter(move |&v| {
                let i = (v / 2) as usize;
                self.composite[i / 64] & (1 << (i % 64)) == 0
            })
    }
}
