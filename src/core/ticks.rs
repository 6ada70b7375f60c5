use smallvec::SmallVec;

/// Tick value list; axes rarely carry more than a dozen ticks.
pub type TickValues = SmallVec<[f64; 12]>;

/// Returns the 1/2/5 × 10ⁿ step that yields about `count` ticks over
/// `[start, stop]`, or `None` for empty or non-finite spans.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (min, max) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let span = max - min;
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return None;
    }

    let target = span / count as f64;
    let mut step = 10f64.powf(target.log10().floor());
    let err = count as f64 / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }

    (step.is_finite() && step > 0.0).then_some(step)
}

/// Round tick values inside `[start, stop]`.
///
/// A zero-width span yields the single bound value.
#[must_use]
pub fn tick_values(start: f64, stop: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let (min, max) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let Some(step) = tick_increment(min, max, count) else {
        return ticks;
    };

    // Sub-unit steps divide by the integer inverse so 0.1-steps print cleanly.
    if step < 1.0 {
        let inverse = (1.0 / step).round();
        let first = (min * inverse).ceil() as i64;
        let last = (max * inverse).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 / inverse);
        }
    } else {
        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 * step);
        }
    }
    ticks
}

/// Number of fractional digits needed to tell ticks `step` apart.
#[must_use]
pub fn tick_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let digits = -(step.log10() + 0.01).floor();
    if digits > 0.0 { digits as usize } else { 0 }
}

/// Formats a tick value with fixed precision and `,` thousands grouping.
#[must_use]
pub fn format_tick(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        // "-0.0" style output for values that round to zero drops its sign.
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => ("", rest),
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_tick, tick_increment, tick_precision, tick_values};

    #[test]
    fn increments_follow_one_two_five_progression() {
        assert_eq!(tick_increment(62.5, 437.5, 5), Some(100.0));
        assert_eq!(tick_increment(0.75, 3.25, 5), Some(0.5));
        assert_eq!(tick_increment(0.0, 1.0, 5), Some(0.2));
        assert_eq!(tick_increment(3.0, 3.0, 5), None);
    }

    #[test]
    fn values_stay_inside_bounds() {
        let ticks = tick_values(62.5, 437.5, 5);
        assert_eq!(ticks.as_slice(), &[100.0, 200.0, 300.0, 400.0]);

        let ticks = tick_values(0.75, 3.25, 5);
        assert_eq!(ticks.as_slice(), &[1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn fractional_steps_print_without_float_noise() {
        let ticks = tick_values(0.0, 1.0, 10);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn precision_tracks_step_magnitude() {
        assert_eq!(tick_precision(100.0), 0);
        assert_eq!(tick_precision(0.5), 1);
        assert_eq!(tick_precision(0.05), 2);
    }

    #[test]
    fn format_groups_thousands_and_keeps_sign() {
        assert_eq!(format_tick(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_tick(-2500.0, 1), "-2,500.0");
        assert_eq!(format_tick(-0.00001, 1), "0.0");
        assert_eq!(format_tick(400.0, 0), "400");
    }
}
