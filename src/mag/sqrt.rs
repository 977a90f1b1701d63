//! Integer square root.

use crate::mag::Magnitude;

impl Magnitude {
    /// Returns the integer square root `s` rounded down and the remainder `self - s^2`.
    pub fn sqrt_rem(&self) -> (Self, Self) {
        if self.is_zero() {
            return (Self::zero(), Self::zero());
        }

        if let Some(v) = self.to_u64() {
            let s = sqrt_u64(v);
            return (Self::from_word(s), Self::from_word(v - s * s));
        }

        // Newton iteration from above: x' = (x + n / x) / 2
        let mut x = Self::pow2((self.bit_len() + 1) / 2);
        loop {
            let (q, _) = self.div_rem(&x);
            let y = x.add(&q).shr(1);
            if y >= x {
                break;
            }
            x = y;
        }

        let r = self.sub(&x.sqr());
        (x, r)
    }
}

fn sqrt_u64(v: u64) -> u64 {
    let mut s = (v as f64).sqrt() as u64;
    while s.checked_mul(s).map_or(true, |sq| sq > v) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).map_or(false, |sq| sq <= v) {
        s += 1;
    }
    s
}
