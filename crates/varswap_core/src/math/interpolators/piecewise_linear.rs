//! Piecewise linear curve with slope and knot-jump queries.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Continuous piecewise linear curve through sorted knots.
///
/// Stores the knots `(x_i, y_i)` exactly as supplied and evaluates the
/// straight line of the segment containing the query point. Outside the
/// knot range the first or last segment is extended.
///
/// Besides values the curve exposes its slope ([`derivative`](Self::derivative))
/// and the change in slope at every knot ([`jump_sequence`](Self::jump_sequence)).
/// The jumps are the weights of the second derivative of the curve, which is
/// a sum of point masses located at the interior knots.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f32`, `f64`)
///
/// # Construction
///
/// Knots must already be sorted by x-coordinate (equal neighbours are
/// accepted). At least 2 knots are required.
///
/// # Final knot
///
/// Evaluating `value` or `derivative` exactly at the last knot's x is
/// rejected with [`InterpolationError::FinalKnotEvaluation`]. Points strictly
/// beyond it extrapolate along the final segment. This is a known sharp edge
/// kept for compatibility with existing replication results.
///
/// # Example
///
/// ```
/// use varswap_core::math::interpolators::PiecewiseLinearCurve;
///
/// let curve = PiecewiseLinearCurve::new(&[0.0_f64, 1.0, 3.0], &[0.0, 2.0, 2.0]).unwrap();
///
/// assert!((curve.value(0.5).unwrap() - 1.0).abs() < 1e-12);
/// assert!((curve.derivative(2.0).unwrap() - 0.0).abs() < 1e-12);
/// assert_eq!(curve.jump_sequence(), vec![0.0, -2.0, 0.0]);
/// assert!(curve.value(3.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseLinearCurve<T: Float> {
    /// Knot x-coordinates, ascending
    xs: Vec<T>,
    /// Knot values, index-aligned with `xs`
    ys: Vec<T>,
}

impl<T: Float> PiecewiseLinearCurve<T> {
    /// Construct a curve from knot coordinates.
    ///
    /// # Arguments
    ///
    /// * `xs` - Knot x-coordinates, sorted ascending
    /// * `ys` - Knot values
    ///
    /// # Returns
    ///
    /// * `Ok(PiecewiseLinearCurve)` - Successfully constructed curve
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 knots
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not ascending (or NaN)
    ///
    /// # Example
    ///
    /// ```
    /// use varswap_core::math::interpolators::PiecewiseLinearCurve;
    ///
    /// assert!(PiecewiseLinearCurve::new(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(PiecewiseLinearCurve::new(&[0.0], &[0.0]).is_err());
    /// assert!(PiecewiseLinearCurve::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        // `!(a <= b)` also catches NaN
        if let Some(i) = xs.windows(2).position(|w| !(w[0] <= w[1])) {
            return Err(InterpolationError::NonMonotonicData { index: i + 1 });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns the knot x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the knot values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the curve has no knots.
    /// Never true for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` of the segment `[xs[i], xs[i+1]]` used for `x`.
    ///
    /// The left endpoint is the greatest knot `<= x`, clamped to `[0, n-2]`
    /// so points outside the knots use the first or last segment.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else {
            (pos - 1).min(self.xs.len() - 2)
        }
    }

    /// Segment lookup for public queries, rejecting NaN and the final knot.
    fn locate(&self, x: T) -> Result<usize, InterpolationError> {
        if x.is_nan() {
            return Err(InterpolationError::InvalidInput(
                "query point is NaN".to_string(),
            ));
        }

        let x_last = self.xs[self.xs.len() - 1];
        if x == x_last {
            return Err(InterpolationError::FinalKnotEvaluation {
                x: x.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(self.find_segment(x))
    }

    #[inline]
    fn segment_slope(&self, i: usize) -> T {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    /// Value of the curve at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y_i + m_i * (x - x_i),  m_i = (y_{i+1} - y_i) / (x_{i+1} - x_i)
    /// ```
    ///
    /// # Errors
    ///
    /// * `InterpolationError::FinalKnotEvaluation` - `x` equals the last knot
    /// * `InterpolationError::InvalidInput` - `x` is NaN
    pub fn value(&self, x: T) -> Result<T, InterpolationError> {
        let i = self.locate(x)?;
        Ok(self.ys[i] + self.segment_slope(i) * (x - self.xs[i]))
    }

    /// Slope of the curve at `x`.
    ///
    /// Piecewise constant; at an interior knot the segment to its right is
    /// used.
    ///
    /// # Errors
    ///
    /// Same as [`value`](Self::value).
    pub fn derivative(&self, x: T) -> Result<T, InterpolationError> {
        let i = self.locate(x)?;
        Ok(self.segment_slope(i))
    }

    /// Change in slope at every knot.
    ///
    /// Returns `n` entries. The first and last are zero; entry `j` for
    /// `1 <= j <= n-2` is `derivative(x_j) - derivative(x_{j-1})`, i.e. the
    /// slope to the right of knot `j` minus the slope to its left.
    ///
    /// # Example
    ///
    /// ```
    /// use varswap_core::math::interpolators::PiecewiseLinearCurve;
    ///
    /// // |x| sampled at -1, 0, 1 has a unit-two kink at the origin
    /// let curve = PiecewiseLinearCurve::new(&[-1.0, 0.0, 1.0], &[1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(curve.jump_sequence(), vec![0.0, 2.0, 0.0]);
    /// ```
    pub fn jump_sequence(&self) -> Vec<T> {
        let n = self.xs.len();
        let mut jumps = Vec::with_capacity(n);
        jumps.push(T::zero());

        for j in 1..n - 1 {
            // Only interior knots are queried, so the final-knot rule never applies
            let right = self.segment_slope(self.find_segment(self.xs[j]));
            let left = self.segment_slope(self.find_segment(self.xs[j - 1]));
            jumps.push(right - left);
        }

        jumps.push(T::zero());
        jumps
    }
}

impl<T: Float> Interpolator<T> for PiecewiseLinearCurve<T> {
    /// Same as [`PiecewiseLinearCurve::value`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.value(x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
