//! Macros implementing operator traits for owned and borrowed operands.

/// Implements a binary operator trait for all combinations of owned and borrowed operands
/// using the method `$op(&self, &rhs) -> $out`.
macro_rules! impl_binop {
    ($t:ty, $rhs:ty, $out:ty, $trait:ident, $fn:ident, $op:ident) => {
        impl core::ops::$trait<&$rhs> for &$t {
            type Output = $out;
            fn $fn(self, rhs: &$rhs) -> $out {
                <$t>::$op(self, rhs)
            }
        }

        impl core::ops::$trait<$rhs> for $t {
            type Output = $out;
            fn $fn(self, rhs: $rhs) -> $out {
                <$t>::$op(&self, &rhs)
            }
        }

        impl core::ops::$trait<&$rhs> for $t {
            type Output = $out;
            fn $fn(self, rhs: &$rhs) -> $out {
                <$t>::$op(&self, rhs)
            }
        }

        impl core::ops::$trait<$rhs> for &$t {
            type Output = $out;
            fn $fn(self, rhs: $rhs) -> $out {
                <$t>::$op(self, &rhs)
            }
        }
    };
}

/// Implements a compound assignment operator trait for owned and borrowed right operands
/// using the method `$op(&mut self, &rhs)`.
macro_rules! impl_assignop {
    ($t:ty, $rhs:ty, $trait:ident, $fn:ident, $op:ident) => {
        impl core::ops::$trait<&$rhs> for $t {
            fn $fn(&mut self, rhs: &$rhs) {
                <$t>::$op(self, rhs)
            }
        }

        impl core::ops::$trait<$rhs> for $t {
            fn $fn(&mut self, rhs: $rhs) {
                <$t>::$op(self, &rhs)
            }
        }
    };
}

/// Implements `PartialEq` and `PartialOrd` between `$t` and native integer types
/// by converting the native value with `From`.
macro_rules! impl_cmp_native {
    ($t:ty; $($n:ty)*) => {
        $(
            impl PartialEq<$n> for $t {
                fn eq(&self, other: &$n) -> bool {
                    *self == <$t>::from(*other)
                }
            }

            impl PartialOrd<$n> for $t {
                fn partial_cmp(&self, other: &$n) -> Option<core::cmp::Ordering> {
                    self.partial_cmp(&<$t>::from(*other))
                }
            }

            impl PartialEq<$t> for $n {
                fn eq(&self, other: &$t) -> bool {
                    <$t>::from(*self) == *other
                }
            }

            impl PartialOrd<$t> for $n {
                fn partial_cmp(&self, other: &$t) -> Option<core::cmp::Ordering> {
                    <$t>::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}
