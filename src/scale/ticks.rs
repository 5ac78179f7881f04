//! "Nice" tick generation and tick label formatting.
//!
//! Tick steps are powers of ten times 1, 2 or 5, chosen so that roughly
//! `count` ticks cover the domain. Values are computed from integer tick
//! indices so they come out as exact decimals (`0.1 * 3` is never produced).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// `(first index, last index, increment)`. A negative increment means the
/// tick value is `index / -inc` (used for sub-unit steps to stay exact).
fn tick_bounds(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        i1 = (start * pos).round();
        i2 = (stop * pos).round();
        if i1 / pos < start {
            i1 += 1.0;
        }
        if i2 / pos > stop {
            i2 -= 1.0;
        }
        inc = -pos;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_bounds(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick values between `start` and `stop` (either order), in the same
/// direction as the arguments.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_bounds(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let value = |idx: f64| if inc < 0.0 { idx / -inc } else { idx * inc };
    (0..n)
        .map(|i| {
            if reverse {
                value(i2 - i as f64)
            } else {
                value(i1 + i as f64)
            }
        })
        .collect()
}

/// Signed distance between consecutive ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_bounds(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Number of decimals needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    // Guard against 0.1 landing at 0.09999.. under log10.
    let exponent = (step.log10() + 1e-9).floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Format a tick label: thousands separators, fixed decimals from `step`.
///
/// ```
/// use switchplot::scale::format_tick;
///
/// assert_eq!(format_tick(40000.0, 2000.0), "40,000");
/// assert_eq!(format_tick(9.5, 0.5), "9.5");
/// assert_eq!(format_tick(12.0, 1.0), "12");
/// ```
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = precision_for_step(step);
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && raw.chars().any(|c| c != '0' && c != '.');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
