const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Rounds `x` to two decimals, judged on the exact binary value of `x` rather than on `x * 100`.
///
/// `0.015` is stored as `0.01499999..` and rounds down to `0.01`.
/// Values exactly halfway between two hundredths (e.g. `0.125`) round away from zero.
pub fn round_to_hundredths(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }

    //|x| = mantissa * 2^exponent
    let bits = x.abs().to_bits();
    let biased_exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & ((1 << MANTISSA_BITS) - 1);
    let (mantissa, exponent) = match biased_exponent {
        0 => (fraction, 1 - EXPONENT_BIAS),
        _ => (fraction | (1 << MANTISSA_BITS), biased_exponent - EXPONENT_BIAS),
    };

    if exponent >= 0 {
        //integral, nothing to round
        return x;
    }

    //|x| * 100 = scaled / 2^shift, exactly
    let shift = exponent.unsigned_abs();
    let scaled = mantissa as u128 * 100;
    let cents = match shift {
        s if s >= u128::BITS => 0,
        s => {
            let whole = scaled >> s;
            let remainder = scaled & ((1 << s) - 1);
            match remainder >= 1 << (s - 1) {
                true => whole + 1,
                false => whole,
            }
        }
    };

    let rounded = match cents < 1 << f64::MANTISSA_DIGITS {
        //single correctly rounded division
        true => cents as f64 / 100.0,
        false => (cents / 100) as f64 + (cents % 100) as f64 / 100.0,
    };
    rounded.copysign(x)
}
