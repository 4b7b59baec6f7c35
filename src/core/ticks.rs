use smallvec::SmallVec;

/// Tick buffer sized for the default tick count; spills to the heap for
/// larger counts.
pub type TickBuffer = SmallVec<[f64; 5]>;

pub const DEFAULT_NUM_OF_TICKS: usize = 5;
pub const DEFAULT_GRANULARITY: f64 = 0.5;

/// Generates `num_of_ticks` evenly spaced "nice" tick values covering
/// `[min, max]`.
///
/// The rough step `(max - min) / (num_of_ticks - 1)` is normalized to its
/// base-10 magnitude and rounded up to the next multiple of `granularity`,
/// producing increments such as 0.5x, 1.0x, 1.5x a power of ten. Anchoring:
/// a range straddling zero places zero exactly on the middle tick; a range
/// entirely at or below zero ends exactly on `max`; otherwise ticks start at
/// `min`. Ticks are rounded to the decimal precision of the increment.
///
/// `num_of_ticks <= 1` yields an empty buffer. Equal `min` and `max` expand
/// symmetrically by 10% of the value's order of magnitude (by 1 when the
/// value is 0) so the value lands on the middle tick. Expects `min <= max`
/// and finite bounds.
#[must_use]
pub fn generate_ticks(min: f64, max: f64, num_of_ticks: usize, granularity: f64) -> TickBuffer {
    if num_of_ticks <= 1 {
        return TickBuffer::new();
    }

    let mut start = min;
    let mut stop = max;

    if min == max {
        // expand the range equally by 10%
        let mut offset = 1.0;
        if min != 0.0 {
            let magnitude = 10f64.powf(min.abs().log10().floor());
            offset = magnitude * 0.1;
        }
        start = min - offset;
        stop = min + offset;
    }

    let mut step = (stop - start) / (num_of_ticks - 1) as f64;
    if step == 0.0 {
        step = 1.0;
    }
    let magnitude = 10f64.powf(step.log10().floor());
    let normalized_step = step / magnitude;
    let factor = (normalized_step / granularity).ceil() * granularity;
    let increment = round_to_significant(factor * magnitude, 12);

    let decimals = decimal_digits(increment);

    let axis_min = if start < 0.0 && stop > 0.0 {
        -((num_of_ticks / 2) as f64) * increment
    } else if stop <= 0.0 {
        stop - increment * (num_of_ticks - 1) as f64
    } else {
        start
    };

    let scale = 10f64.powi(decimals);
    (0..num_of_ticks)
        .map(|index| round_half_up((axis_min + index as f64 * increment) * scale) / scale)
        .collect()
}

/// Convenience wrapper using the default tick count and granularity.
#[must_use]
pub fn generate_default_ticks(min: f64, max: f64) -> TickBuffer {
    generate_ticks(min, max, DEFAULT_NUM_OF_TICKS, DEFAULT_GRANULARITY)
}

/// Snaps `value` to `digits` significant decimal digits, discarding binary
/// floating-point residue from the increment computation.
fn round_to_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits - 1 - exponent);
    (value * scale).round() / scale
}

/// Number of decimal digits in the shortest decimal rendering of `value`.
fn decimal_digits(value: f64) -> i32 {
    let rendered = value.to_string();
    match rendered.find('.') {
        Some(index) => (rendered.len() - index - 1) as i32,
        None => 0,
    }
}

/// Rounds to the nearest integer with ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
