//! Time Axis Module
//! Count-based arithmetic progressions for bar positions.

use thiserror::Error;

/// Quotients this close to an integer are treated as that integer.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on generated axis points.
pub const MAX_AXIS_POINTS: usize = 10_000_000;

#[derive(Error, Debug)]
pub enum AxisError {
    #[error("Axis [{start}, {stop}) with step {step} needs {count} points, limit is {max}")]
    TooManyPoints {
        start: f64,
        stop: f64,
        step: f64,
        count: f64,
        max: usize,
    },
}

/// Time coordinates (seconds), one per series sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeAxis {
    values: Vec<f64>,
}

impl TimeAxis {
    /// Axis with exactly `count` points: `start + i * step`.
    pub fn with_count(start: f64, step: f64, count: usize) -> Self {
        let values = (0..count).map(|i| start + i as f64 * step).collect();
        Self { values }
    }

    /// Half-open range `[start, stop)` sampled every `step`, like `arange`.
    ///
    /// The point count is computed up front, so `(0.0, 15.1, 0.1)` always gives
    /// 151 points regardless of rounding in the division.
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self, AxisError> {
        let count = Self::arange_len(start, stop, step);
        if !count.is_finite() || count > MAX_AXIS_POINTS as f64 {
            return Err(AxisError::TooManyPoints {
                start,
                stop,
                step,
                count,
                max: MAX_AXIS_POINTS,
            });
        }
        Ok(Self::with_count(start, step, count as usize))
    }

    /// Point count as a float, so oversized ranges can be rejected before casting.
    fn arange_len(start: f64, stop: f64, step: f64) -> f64 {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step <= 0.0 {
            return 0.0;
        }
        if stop <= start {
            return 0.0;
        }

        let quotient = (stop - start) / step;
        let nearest = quotient.round();
        if (quotient - nearest).abs() < COUNT_TOLERANCE {
            nearest
        } else {
            quotient.ceil()
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generate the time axis for `[start, stop)` with the given step.
pub fn generate_axis(start: f64, stop: f64, step: f64) -> Result<TimeAxis, AxisError> {
    let axis = TimeAxis::arange(start, stop, step)?;
    if axis.is_empty() {
        log::warn!("Axis [{}, {}) with step {} has no points", start, stop, step);
    } else {
        log::debug!(
            "Generated {} axis points over [{}, {}) step {}",
            axis.len(),
            start,
            stop,
            step
        );
    }
    Ok(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_axis_has_151_points() {
        let axis = generate_axis(0.0, 15.1, 0.1).unwrap();
        let values = axis.values();

        assert_eq!(axis.len(), 151);
        assert_eq!(values[0], 0.0);
        assert!((values[150] - 15.0).abs() < 1e-9);
        assert!(values[150] < 15.1);

        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_points() {
        let axis = generate_axis(0.0, 15.1, 0.1).unwrap();
        let head = &axis.values()[..3];
        for (got, want) in head.iter().zip([0.0, 0.1, 0.2]) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_partial_step_rounds_up() {
        // [0, 1.05) with step 0.1 -> 0.0 .. 1.0
        assert_eq!(TimeAxis::arange(0.0, 1.05, 0.1).unwrap().len(), 11);
        assert_eq!(TimeAxis::arange(0.0, 1.0, 0.1).unwrap().len(), 10);
    }

    #[test]
    fn test_degenerate_ranges_are_empty() {
        assert!(TimeAxis::arange(0.0, 1.0, 0.0).unwrap().is_empty());
        assert!(TimeAxis::arange(0.0, 1.0, -0.1).unwrap().is_empty());
        assert!(TimeAxis::arange(2.0, 1.0, 0.1).unwrap().is_empty());
        assert!(TimeAxis::arange(0.0, f64::NAN, 0.1).unwrap().is_empty());
        assert!(generate_axis(2.0, 1.0, 0.1).unwrap().is_empty());
    }

    #[test]
    fn test_oversized_axis_is_rejected() {
        // (stop - start) overflows to infinity
        assert!(matches!(
            TimeAxis::arange(-1e308, 1e308, 0.1),
            Err(AxisError::TooManyPoints { .. })
        ));
        assert!(matches!(
            generate_axis(0.0, 15.1, 1e-300),
            Err(AxisError::TooManyPoints { .. })
        ));
        assert!(matches!(
            generate_axis(0.0, (MAX_AXIS_POINTS + 1) as f64, 1.0),
            Err(AxisError::TooManyPoints { .. })
        ));
    }

    #[test]
    fn test_large_axis_under_limit_is_accepted() {
        let axis = generate_axis(0.0, 1000.0, 0.001).unwrap();
        assert_eq!(axis.len(), 1_000_000);
    }

    #[test]
    fn test_with_count() {
        let axis = TimeAxis::with_count(1.0, 0.5, 4);
        assert_eq!(axis.values(), &[1.0, 1.5, 2.0, 2.5]);
    }
}
