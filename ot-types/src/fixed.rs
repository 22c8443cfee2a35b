//! fixed-point numerical types

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// An error returned when parsing the `I:F` text form of a fixed-point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFixedError {
    /// The text has no `:` between the integer and fractional parts.
    MissingSeparator,
    /// The integer part is not a non-negative decimal integer.
    InvalidInteger,
    /// The fractional part is not a non-negative decimal integer.
    InvalidFraction,
    /// The fractional part does not fit in the fractional bits of the type.
    FractionOutOfRange,
    /// The value does not fit in the type.
    OutOfRange,
}

impl fmt::Display for ParseFixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFixedError::MissingSeparator => f.write_str("missing ':' separator"),
            ParseFixedError::InvalidInteger => f.write_str("invalid integer part"),
            ParseFixedError::InvalidFraction => f.write_str("invalid fractional part"),
            ParseFixedError::FractionOutOfRange => f.write_str("fractional part out of range"),
            ParseFixedError::OutOfRange => f.write_str("value out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFixedError {}

// shared between all fixed point types: storage, raw access and float conversion.
macro_rules! fixed_repr {
    ($name:ident, $bits:literal, $fract_bits:literal, $ty:ty, $raw:ty) => {
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "bytemuck", derive(bytemuck_derive::AnyBitPattern))]
        #[repr(transparent)]
        #[doc = concat!(stringify!($bits), "-bit signed fixed point number with ", stringify!($fract_bits), " bits of fraction." )]
        pub struct $name($ty);

        impl $name {
            /// Minimum value.
            pub const MIN: Self = Self(<$ty>::MIN);

            /// Maximum value.
            pub const MAX: Self = Self(<$ty>::MAX);

            /// This type's smallest representable positive value.
            pub const EPSILON: Self = Self(1);

            /// Representation of 0.0.
            pub const ZERO: Self = Self(0);

            /// Representation of 1.0.
            pub const ONE: Self = Self(1 << Self::FRACT_BITS);

            const FRACT_BITS: u32 = $fract_bits;

            /// Creates a new value from the raw two's-complement bits.
            #[inline(always)]
            pub const fn from_bits(bits: $ty) -> Self {
                Self(bits)
            }

            /// Returns the raw two's-complement bits.
            #[inline(always)]
            pub const fn to_bits(self) -> $ty {
                self.0
            }

            /// Creates a value from an integer.
            ///
            /// Bits that do not fit in the integer part are discarded.
            #[inline(always)]
            pub const fn from_i32(x: i32) -> Self {
                Self((x << $fract_bits) as $ty)
            }

            /// Creates a fixed point value from an f64.
            ///
            /// This operation is lossy; the float is rounded to the nearest
            /// representable value, with ties rounded away from zero. Values
            /// outside the representable range saturate.
            pub fn from_f64(x: f64) -> Self {
                let scaled = x * Self::ONE.0 as f64;
                let rounded = if scaled.is_sign_negative() {
                    scaled - 0.5
                } else {
                    scaled + 0.5
                };
                Self(rounded as $ty)
            }

            /// Creates a fixed point value from an f32.
            ///
            /// See [`from_f64`][Self::from_f64] for the rounding behaviour.
            pub fn from_f32(x: f32) -> Self {
                Self::from_f64(x as f64)
            }

            /// Returns the value as an f64.
            ///
            /// This operation is lossless: all representable values can be
            /// round-tripped.
            #[inline(always)]
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / Self::ONE.0 as f64
            }

            /// Returns the value as an f32.
            #[inline(always)]
            pub fn to_f32(self) -> f32 {
                self.0 as f32 / Self::ONE.0 as f32
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, other: Self) -> Self {
                Self(self.0.wrapping_add(other.0))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                Self(self.0.wrapping_sub(other.0))
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline(always)]
            fn neg(self) -> Self {
                // MIN has no positive counterpart and negates to itself
                Self(self.0.wrapping_neg())
            }
        }

        //hack: we can losslessly go to float, so use those fmt impls
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(&self.to_f64(), f)
            }
        }

        crate::newtype_scalar!($name, $raw);
    };
}

// integer rounding, multiplication and the `I:F` text form.
//
// `$wide` must be able to hold the product of two raw values plus the
// rounding constant.
macro_rules! fixed_arith {
    ($name:ident, $ty:ty, $wide:ty) => {
        impl $name {
            const FRACT_MASK: $ty = !(!0 << Self::FRACT_BITS);
            const HALF: $wide = 1 << (Self::FRACT_BITS - 1);
            const CEIL: $wide = (1 << Self::FRACT_BITS) - 1;

            /// Returns the largest integer less than or equal to the number.
            ///
            /// Negative non-integers round toward negative infinity.
            #[inline(always)]
            pub const fn floor(self) -> i32 {
                (self.0 >> Self::FRACT_BITS) as i32
            }

            /// Returns the nearest integer, with ties rounded toward positive
            /// infinity.
            #[inline(always)]
            pub const fn round(self) -> i32 {
                ((self.0 as $wide + Self::HALF) >> Self::FRACT_BITS) as i32
            }

            /// Returns the smallest integer greater than or equal to the number.
            #[inline(always)]
            pub const fn ceil(self) -> i32 {
                ((self.0 as $wide + Self::CEIL) >> Self::FRACT_BITS) as i32
            }

            /// Returns the fractional part of the number.
            ///
            /// This is always non-negative: `x == floor(x) + fract(x)`.
            #[inline(always)]
            pub const fn fract(self) -> Self {
                Self(self.0 & Self::FRACT_MASK)
            }

            /// Returns the absolute value of the number.
            ///
            /// The absolute value of [`MIN`][Self::MIN] is not representable
            /// and wraps back to `MIN`.
            #[inline(always)]
            pub const fn abs(self) -> Self {
                Self(self.0.wrapping_abs())
            }

            /// Multiplies two values, rounding the discarded bits half up.
            ///
            /// The product is computed at double width and wraps if the result
            /// does not fit.
            #[inline(always)]
            pub const fn wrapping_mul(self, other: Self) -> Self {
                let product = self.0 as $wide * other.0 as $wide;
                Self(((product + Self::HALF) >> Self::FRACT_BITS) as $ty)
            }

            /// Wrapping addition.
            pub const fn wrapping_add(self, other: Self) -> Self {
                Self(self.0.wrapping_add(other.0))
            }

            /// Saturating addition.
            pub const fn saturating_add(self, other: Self) -> Self {
                Self(self.0.saturating_add(other.0))
            }

            /// Wrapping subtraction.
            pub const fn wrapping_sub(self, other: Self) -> Self {
                Self(self.0.wrapping_sub(other.0))
            }

            /// Saturating subtraction.
            pub const fn saturating_sub(self, other: Self) -> Self {
                Self(self.0.saturating_sub(other.0))
            }
        }

        impl Mul for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        /// Renders as `I:F`, the integer part and the raw fractional bits of
        /// the magnitude, prefixed with `-` for negative values.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if *self == Self::MIN {
                    // the magnitude of MIN is not representable
                    return write!(f, "-{}:0", Self::MIN.floor().unsigned_abs());
                }
                let sign = if self.0 < 0 { "-" } else { "" };
                let magnitude = self.0.abs();
                write!(
                    f,
                    "{sign}{}:{}",
                    magnitude >> Self::FRACT_BITS,
                    magnitude & Self::FRACT_MASK
                )
            }
        }

        impl FromStr for $name {
            type Err = ParseFixedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (negative, rest) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s),
                };
                let (int, fract) = rest
                    .split_once(':')
                    .ok_or(ParseFixedError::MissingSeparator)?;
                if !is_decimal(int) {
                    return Err(ParseFixedError::InvalidInteger);
                }
                if !is_decimal(fract) {
                    return Err(ParseFixedError::InvalidFraction);
                }
                let int: i64 = int.parse().map_err(|_| ParseFixedError::OutOfRange)?;
                let fract: i64 = fract
                    .parse()
                    .map_err(|_| ParseFixedError::FractionOutOfRange)?;
                if fract > Self::FRACT_MASK as i64 {
                    return Err(ParseFixedError::FractionOutOfRange);
                }
                let magnitude = int
                    .checked_mul(1 << Self::FRACT_BITS)
                    .ok_or(ParseFixedError::OutOfRange)?
                    | fract;
                let value = if negative { -magnitude } else { magnitude };
                <$ty>::try_from(value)
                    .map(Self)
                    .map_err(|_| ParseFixedError::OutOfRange)
            }
        }
    };
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fixed_repr!(F2Dot14, 16, 14, i16, [u8; 2]);
fixed_repr!(Fixed, 32, 16, i32, [u8; 4]);
fixed_repr!(F26Dot6, 32, 6, i32, [u8; 4]);
fixed_arith!(F2Dot14, i16, i32);
fixed_arith!(Fixed, i32, i64);

impl Fixed {
    /// Converts a 2.14 value to 16.16 without loss.
    pub const fn from_f2dot14(x: F2Dot14) -> Self {
        Self((x.0 as i32) << 2)
    }

    /// Converts to 2.14, discarding the two lowest fractional bits.
    ///
    /// The integer part wraps if it is outside `-2..2`.
    pub const fn to_f2dot14(self) -> F2Dot14 {
        F2Dot14((self.0 >> 2) as i16)
    }
}

impl From<F2Dot14> for Fixed {
    fn from(x: F2Dot14) -> Self {
        Self::from_f2dot14(x)
    }
}

#[cfg(test)]
mod tests {
    #![allow(overflowing_literals)] // we want to specify byte values directly
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;
    use std::string::ToString;

    #[rstest]
    #[case(0x0001_4000, 1, 1, 2, "1:16384", 1.25)]
    #[case(0xFFFE_0000, -2, -2, -2, "-2:0", -2.0)]
    #[case(0x8000_0000, -32768, -32768, -32768, "-32768:0", -32768.0)]
    #[case(0x0001_8000, 1, 2, 2, "1:32768", 1.5)]
    #[case(0xFFFE_8000, -2, -1, -1, "-1:32768", -1.5)]
    #[case(0x0000_0000, 0, 0, 0, "0:0", 0.0)]
    #[case(0x7FFF_FFFF, 32767, 32768, 32768, "32767:65535", 32767.99998)]
    fn fixed_scenarios(
        #[case] raw: i32,
        #[case] floor: i32,
        #[case] round: i32,
        #[case] ceil: i32,
        #[case] text: &str,
        #[case] float: f32,
    ) {
        let x = Fixed::from_bits(raw);
        assert_eq!(x.floor(), floor);
        assert_eq!(x.round(), round);
        assert_eq!(x.ceil(), ceil);
        assert_eq!(x.to_string(), text);
        assert!((x.to_f32() - float).abs() <= f32::EPSILON * float.abs().max(1.0));
    }

    #[rstest]
    #[case(0x5000, 1, 1, 2, "1:4096", 1.25)]
    #[case(0x8000, -2, -2, -2, "-2:0", -2.0)]
    #[case(0x7000, 1, 2, 2, "1:12288", 1.75)]
    #[case(0xE000, -1, 0, 0, "-0:8192", -0.5)]
    #[case(0xFFFF, -1, 0, 0, "-0:1", -0.000061035156)]
    fn f2dot14_scenarios(
        #[case] raw: i16,
        #[case] floor: i32,
        #[case] round: i32,
        #[case] ceil: i32,
        #[case] text: &str,
        #[case] float: f32,
    ) {
        let x = F2Dot14::from_bits(raw);
        assert_eq!(x.floor(), floor);
        assert_eq!(x.round(), round);
        assert_eq!(x.ceil(), ceil);
        assert_eq!(x.to_string(), text);
        assert!((x.to_f32() - float).abs() <= f32::EPSILON);
    }

    #[test]
    fn f2dot14_floats() {
        // Examples from https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types
        assert_eq!(F2Dot14(0x7fff), F2Dot14::from_f32(1.999939));
        assert_eq!(F2Dot14(0x7000), F2Dot14::from_f32(1.75));
        assert_eq!(F2Dot14(0x0001), F2Dot14::from_f32(0.0000610356));
        assert_eq!(F2Dot14(0x0000), F2Dot14::from_f32(0.0));
        assert_eq!(F2Dot14(0xffff), F2Dot14::from_f32(-0.000061));
        assert_eq!(F2Dot14(0x8000), F2Dot14::from_f32(-2.0));
    }

    #[test]
    fn fixed_floats() {
        assert_eq!(Fixed(0x7fff_0000), Fixed::from_f64(32767.));
        assert_eq!(Fixed(0x7000_0001), Fixed::from_f64(28672.00001525879));
        assert_eq!(Fixed(0x0001_0000), Fixed::from_f64(1.0));
        assert_eq!(Fixed(0x0000_0000), Fixed::from_f64(0.0));
        assert_eq!(
            Fixed(i32::from_be_bytes([0xff; 4])),
            Fixed::from_f64(-0.000015259)
        );
        assert_eq!(Fixed(0x7fff_ffff), Fixed::from_f64(32768.0));
    }

    #[test]
    fn f2dot14_exhaustive_properties() {
        for raw in i16::MIN..=i16::MAX {
            let x = F2Dot14::from_bits(raw);
            let exact = x.to_f64();
            let (floor, ceil) = (x.floor(), x.ceil());
            assert!(floor as f64 <= exact && exact <= ceil as f64, "{raw:#x}");
            assert!(ceil - floor <= 1);
            assert_eq!(x.round(), (exact + 0.5).floor() as i32, "{raw:#x}");
            assert_eq!(exact * 16384.0, raw as f64);
            assert_eq!(x.to_f32() as f64, exact);
            assert_eq!(x, F2Dot14::from_f64(exact));
            assert_eq!(x.to_string().parse::<F2Dot14>(), Ok(x), "{raw:#x}");
        }
    }

    #[test]
    fn fixed_random_properties() {
        let mut rng = StdRng::seed_from_u64(0x1616);
        for _ in 0..100_000 {
            let raw: i32 = rng.gen();
            let x = Fixed::from_bits(raw);
            let exact = x.to_f64();
            let (floor, ceil) = (x.floor(), x.ceil());
            assert!(floor as f64 <= exact && exact <= ceil as f64, "{raw:#x}");
            assert!(ceil - floor <= 1);
            assert_eq!(x.round() as i64, (exact + 0.5).floor() as i64, "{raw:#x}");
            assert_eq!(exact * 65536.0, raw as f64);
            let single = x.to_f32() as f64;
            assert!((single - exact).abs() <= exact.abs() * 2f64.powi(-23));
            assert_eq!(x.to_string().parse::<Fixed>(), Ok(x), "{raw:#x}");
        }
    }

    #[test]
    fn mul_is_within_half_ulp() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100_000 {
            // keep the product inside the representable range
            let a: i32 = rng.gen_range(-(1 << 23)..(1 << 23));
            let b: i32 = rng.gen_range(-(1 << 23)..(1 << 23));
            let product = Fixed::from_bits(a) * Fixed::from_bits(b);
            let exact = a as i128 * b as i128;
            let error = (product.to_bits() as i128 * 65536 - exact).abs();
            assert!(error <= 1 << 15, "{a:#x} * {b:#x}");
        }
        for a in (i16::MIN..=i16::MAX).step_by(7) {
            for b in (i16::MIN..=i16::MAX).step_by(131) {
                let exact = a as i64 * b as i64;
                // skip products that do not round into [-2, 2)
                if exact >= (1 << 29) - (1 << 13) || exact < -(1 << 29) {
                    continue;
                }
                let product = F2Dot14::from_bits(a) * F2Dot14::from_bits(b);
                let error = (product.to_bits() as i64 * 16384 - exact).abs();
                assert!(error <= 1 << 13, "{a:#x} * {b:#x}");
            }
        }
    }

    #[test]
    fn mul_rounds_half_up() {
        // 1.5 * 1.5 = 2.25
        assert_eq!(
            Fixed::from_f64(1.5) * Fixed::from_f64(1.5),
            Fixed::from_f64(2.25)
        );
        // 2^-16 * 0.5 = 2^-17, which rounds up to 2^-16
        assert_eq!(Fixed::EPSILON * Fixed::from_f64(0.5), Fixed::EPSILON);
        // -2^-17 rounds toward positive infinity, to zero
        assert_eq!(-Fixed::EPSILON * Fixed::from_f64(0.5), Fixed::ZERO);
        assert_eq!(
            F2Dot14::from_f32(-1.0) * F2Dot14::from_f32(0.5),
            F2Dot14::from_f32(-0.5)
        );
    }

    #[test]
    fn mul_wraps_on_overflow() {
        let big = Fixed::from_i32(256);
        assert_eq!(big * big, Fixed::ZERO);
    }

    #[test]
    fn min_text_is_idempotent() {
        let text = Fixed::MIN.to_string();
        assert_eq!(text, "-32768:0");
        let parsed: Fixed = text.parse().unwrap();
        assert_eq!(parsed, Fixed::MIN);
        assert_eq!(parsed.to_string(), text);
        assert_eq!(F2Dot14::MIN.to_string(), "-2:0");
        assert_eq!("-2:0".parse::<F2Dot14>(), Ok(F2Dot14::MIN));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("1.5".parse::<Fixed>(), Err(ParseFixedError::MissingSeparator));
        assert_eq!(":5".parse::<Fixed>(), Err(ParseFixedError::InvalidInteger));
        assert_eq!("1:+5".parse::<Fixed>(), Err(ParseFixedError::InvalidFraction));
        assert_eq!(
            "1:65536".parse::<Fixed>(),
            Err(ParseFixedError::FractionOutOfRange)
        );
        assert_eq!("32768:0".parse::<Fixed>(), Err(ParseFixedError::OutOfRange));
        assert_eq!("2:0".parse::<F2Dot14>(), Err(ParseFixedError::OutOfRange));
    }

    #[test]
    fn fract_and_abs() {
        let x = Fixed::from_f64(-1.25);
        assert_eq!(x.floor(), -2);
        assert_eq!(x.fract(), Fixed::from_f64(0.75));
        assert_eq!(x.abs(), Fixed::from_f64(1.25));
        assert_eq!(Fixed::MIN.abs(), Fixed::MIN);
    }

    #[test]
    fn add_sub_neg_wrap() {
        assert_eq!(-Fixed::MIN, Fixed::MIN);
        assert_eq!(-F2Dot14::MIN, F2Dot14::MIN);
        assert_eq!(-Fixed::ONE, Fixed::from_i32(-1));
        assert_eq!(Fixed::MAX + Fixed::EPSILON, Fixed::MIN);
        assert_eq!(F2Dot14::MIN - F2Dot14::EPSILON, F2Dot14::MAX);
        assert_eq!(F2Dot14::from_i32(-2) - F2Dot14::EPSILON, F2Dot14::MAX);

        let mut x = Fixed::MAX;
        x += Fixed::ONE;
        assert_eq!(x, Fixed::MIN + Fixed::ONE - Fixed::EPSILON);
        x -= Fixed::ONE;
        assert_eq!(x, Fixed::MAX);
    }

    #[test]
    fn f2dot14_widening() {
        let x = F2Dot14::from_f32(-1.25);
        assert_eq!(Fixed::from(x), Fixed::from_f64(-1.25));
        assert_eq!(Fixed::from(x).to_f2dot14(), x);
    }

    #[test]
    fn f26dot6_is_pass_through() {
        let x = F26Dot6::from_bits(0x60);
        assert_eq!(x.to_f64(), 1.5);
        assert_eq!(F26Dot6::from_f64(1.5), x);
        assert_eq!((x + x).to_bits(), 0xC0);
    }
}
