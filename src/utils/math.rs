//! Sum, mean and median over mixed integer and float lists.

use log::trace;

use crate::error::StatsError;
use crate::number::Number;

const EXACT_FLOAT_LIMIT: u128 = 1 << f64::MANTISSA_DIGITS;

/// Sum left to right. Integers accumulate exactly until the first float,
/// after which the running total is a float. An empty list sums to `0`.
pub fn sum(list: &[Number]) -> Number {
    let mut int_total: i128 = 0;
    let mut float_total: Option<f64> = None;
    for number in list {
        float_total = match (float_total, *number) {
            (None, Number::Int(i)) => match int_total.checked_add(i) {
                Some(total) => {
                    int_total = total;
                    None
                }
                None => Some(int_total as f64 + i as f64),
            },
            (None, Number::Float(f)) => Some(int_total as f64 + f),
            (Some(total), n) => Some(total + n.as_f64()),
        };
    }
    match float_total {
        Some(total) => Number::Float(total),
        None => Number::Int(int_total),
    }
}

/// Arithmetic mean. An all-integer list with an exact quotient stays an integer;
/// otherwise the exact quotient is rounded once to a float.
pub fn mean(list: &[Number]) -> Result<Number, StatsError> {
    if list.is_empty() {
        return Err(StatsError::EmptyInput { statistic: "mean" });
    }
    let len = list.len();
    let count = len as i128;
    let mean = match sum(list) {
        Number::Int(total) if total % count == 0 => Number::Int(total / count),
        Number::Int(total) => Number::Float(ratio(total, count)),
        total => Number::Float(total.as_f64() / len as f64),
    };
    trace!("mean of {} values: {}", len, mean);
    Ok(mean)
}

/// Middle value after sorting, or the average of the two middle values.
pub fn median(list: &[Number]) -> Result<Number, StatsError> {
    if list.is_empty() {
        return Err(StatsError::EmptyInput {
            statistic: "median",
        });
    }
    let mut sorted = list.to_vec();
    sorted.sort_by(Number::total_cmp);

    let len = sorted.len();
    let mid = len / 2;
    let median = if len % 2 == 0 {
        let middle = match (sorted[mid - 1], sorted[mid]) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(total) => ratio(total, 2),
                None => (a as f64 + b as f64) / 2.0,
            },
            (a, b) => (a.as_f64() + b.as_f64()) / 2.0,
        };
        Number::Float(middle)
    } else {
        sorted[mid]
    };
    trace!("median of {} values: {}", len, median);
    Ok(median)
}

/// `numerator / denominator` rounded once to the nearest float, ties to even.
/// `denominator` must be non-zero and at most 64 bits wide.
fn ratio(numerator: i128, denominator: i128) -> f64 {
    let negative = (numerator < 0) != (denominator < 0);
    let a = numerator.unsigned_abs();
    let b = denominator.unsigned_abs();

    let magnitude = if a < EXACT_FLOAT_LIMIT && b < EXACT_FLOAT_LIMIT {
        // Both operands are exact floats, so a single division rounds once.
        a as f64 / b as f64
    } else {
        // Scale until the integer quotient carries exactly 53 significant bits,
        // then round it with the remainder.
        let bits = |x: u128| 128 - x.leading_zeros() as i32;
        let mut shift = f64::MANTISSA_DIGITS as i32 - (bits(a) - bits(b));
        let (quotient, remainder, divisor) = loop {
            let (n, d) = if shift >= 0 {
                (a << shift, b)
            } else {
                (a, b << -shift)
            };
            let quotient = n / d;
            if quotient >= EXACT_FLOAT_LIMIT {
                shift -= 1;
                continue;
            }
            break (quotient, n % d, d);
        };
        let twice_remainder = remainder * 2;
        let round_up = twice_remainder > divisor
            || (twice_remainder == divisor && quotient & 1 == 1);
        let quotient = if round_up { quotient + 1 } else { quotient };
        quotient as f64 * 2f64.powi(-shift)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Round to `digits` decimal places, ties to even on the exact binary value.
/// Integers and non-finite floats are returned unchanged.
pub fn round_to(number: Number, digits: usize) -> Number {
    match number {
        Number::Float(v) if v.is_finite() => {
            let rounded = format!("{:.*}", digits, v).parse().unwrap_or(v);
            Number::Float(rounded)
        }
        n => n,
    }
}
