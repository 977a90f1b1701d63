//! Natural logarithm of 10.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::float::BigFloat;
use crate::ops::consts::Consts;

/// Returns the natural logarithm of 10 with precision `p` rounded using the rounding mode `rm`.
/// The value is computed anew on each call.
///
/// ## Errors
///
///  - Convergence: the computation did not converge.
pub fn ln_10(p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    let mut cc = Consts::new();
    BigFloat::from(10).ln(p, rm, &mut cc)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Radix;

    #[test]
    fn test_ln10() {
        assert_eq!(ln_10(53, RoundingMode::ToEven).unwrap().to_f64(), core::f64::consts::LN_10);

        let v = ln_10(256, RoundingMode::ToEven).unwrap();
        let (s, e) = v.to_string_radix(Radix::Dec, 50);
        assert_eq!(s, "23025850929940456840179914546843642076011014886288");
        assert_eq!(e, 1);
    }
}
