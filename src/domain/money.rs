use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};

use super::errors::PriceError;

/// A whole, non-negative rupiah amount.
///
/// Free text only becomes a `Rupiah` through [`FromStr`], which accepts plain
/// decimal notation only (`15000`, `15000.00`) and nothing above
/// [`Rupiah::MAX`], the largest value the price column holds. Display groups
/// thousands with `.` the way Indonesian prices are written (`15.000`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rupiah(u64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);
    /// Largest storable price: `NUMERIC(14,0)`.
    pub const MAX: Rupiah = Rupiah(99_999_999_999_999);
    const MAX_DIGITS: usize = 14;
    const MAX_SCALE: i64 = 32;

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units. Saturates instead of wrapping.
    pub fn times(self, quantity: u32) -> Rupiah {
        Rupiah(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn to_decimal(self) -> BigDecimal {
        BigDecimal::from(self.0)
    }
}

impl FromStr for Rupiah {
    type Err = PriceError;

    /// Parses `digits[.digits]`, optionally with a leading `-` so negative
    /// input is reported as such. Exponents and other notations are refused.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let not_a_number = || PriceError::NotANumber(trimmed.to_string());

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return Err(not_a_number());
        }

        let whole = whole.trim_start_matches('0');
        let fraction_is_zero = fraction.unwrap_or("").bytes().all(|b| b == b'0');
        if negative && !(whole.is_empty() && fraction_is_zero) {
            return Err(PriceError::Negative);
        }
        if !fraction_is_zero {
            return Err(PriceError::Fractional);
        }
        if whole.len() > Self::MAX_DIGITS {
            return Err(PriceError::TooLarge);
        }
        if whole.is_empty() {
            return Ok(Rupiah::ZERO);
        }
        whole.parse().map(Rupiah).map_err(|_| not_a_number())
    }
}

impl TryFrom<&BigDecimal> for Rupiah {
    type Error = PriceError;

    fn try_from(value: &BigDecimal) -> Result<Self, Self::Error> {
        if value.is_zero() {
            return Ok(Rupiah::ZERO);
        }
        if value.is_negative() {
            return Err(PriceError::Negative);
        }
        // Rescaling cost grows with the exponent, so out-of-range scales are
        // refused before touching the digits.
        let (_, scale) = value.as_bigint_and_exponent();
        if scale < -(Self::MAX_DIGITS as i64) {
            return Err(PriceError::TooLarge);
        }
        if scale > Self::MAX_SCALE {
            return Err(PriceError::Fractional);
        }
        if value.with_scale(0) != *value {
            return Err(PriceError::Fractional);
        }
        value
            .to_u64()
            .filter(|amount| *amount <= Self::MAX.0)
            .map(Rupiah)
            .ok_or(PriceError::TooLarge)
    }
}

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::ZERO, Add::add)
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_amounts() {
        assert_eq!("15000".parse::<Rupiah>(), Ok(Rupiah::new(15_000)));
        assert_eq!(" 2500 ".parse::<Rupiah>(), Ok(Rupiah::new(2_500)));
        assert_eq!("0".parse::<Rupiah>(), Ok(Rupiah::ZERO));
    }

    #[test]
    fn accepts_zero_fraction() {
        assert_eq!("15000.00".parse::<Rupiah>(), Ok(Rupiah::new(15_000)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            "abc".parse::<Rupiah>(),
            Err(PriceError::NotANumber("abc".to_string()))
        );
        assert_eq!("".parse::<Rupiah>(), Err(PriceError::Empty));
        assert_eq!("   ".parse::<Rupiah>(), Err(PriceError::Empty));
    }

    #[test]
    fn rejects_negative_and_fractional_input() {
        assert_eq!("-5".parse::<Rupiah>(), Err(PriceError::Negative));
        assert_eq!("12.5".parse::<Rupiah>(), Err(PriceError::Fractional));
    }

    #[test]
    fn rejects_amounts_beyond_the_column() {
        assert_eq!("99999999999999".parse::<Rupiah>(), Ok(Rupiah::MAX));
        assert_eq!("000099999999999999".parse::<Rupiah>(), Ok(Rupiah::MAX));
        assert_eq!(
            "100000000000000".parse::<Rupiah>(),
            Err(PriceError::TooLarge)
        );
        assert_eq!(
            "100000000000000000000000".parse::<Rupiah>(),
            Err(PriceError::TooLarge)
        );
    }

    #[test]
    fn rejects_exponent_and_signed_notation() {
        for input in ["1e-300000000", "1e3", "1E3", "+5", ".5", "5.", "1.2.3", "1 000"] {
            assert_eq!(
                input.parse::<Rupiah>(),
                Err(PriceError::NotANumber(input.to_string())),
                "{input}"
            );
        }
        assert_eq!("-0".parse::<Rupiah>(), Ok(Rupiah::ZERO));
        assert_eq!("-0.5".parse::<Rupiah>(), Err(PriceError::Negative));
    }

    #[test]
    fn stored_decimals_with_extreme_exponents_are_refused() {
        let tiny: BigDecimal = "1e-300000000".parse().unwrap();
        assert_eq!(Rupiah::try_from(&tiny), Err(PriceError::Fractional));

        let huge: BigDecimal = "1e300000000".parse().unwrap();
        assert_eq!(Rupiah::try_from(&huge), Err(PriceError::TooLarge));

        let too_big: BigDecimal = "100000000000000".parse().unwrap();
        assert_eq!(Rupiah::try_from(&too_big), Err(PriceError::TooLarge));
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(Rupiah::ZERO.to_string(), "0");
        assert_eq!(Rupiah::new(999).to_string(), "999");
        assert_eq!(Rupiah::new(15_000).to_string(), "15.000");
        assert_eq!(Rupiah::new(1_234_567).to_string(), "1.234.567");
    }

    #[test]
    fn times_and_sum() {
        let subtotal = Rupiah::new(15_000).times(2);
        assert_eq!(subtotal, Rupiah::new(30_000));

        let total: Rupiah = [Rupiah::new(1), Rupiah::new(2), Rupiah::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Rupiah::new(6));
    }

    #[test]
    fn decimal_roundtrip_for_storage() {
        let price = Rupiah::new(42_000);
        assert_eq!(Rupiah::try_from(&price.to_decimal()), Ok(price));
    }
}
