//! Parameter ranges for driving curves and 1D transforms.

use crate::point::lerp;

/// Create an inclusive range with the desired number of elements.
///
/// The first element is exactly `start` and the last exactly `end`. Ranges
/// may run backwards and may be constant. Zero elements gives an empty
/// vector; one element gives `[end]`, matching [`Linspace`].
///
/// # Examples
///
/// ```
/// use camber_math::linspace;
///
/// let ts = linspace(0., 1., 5);
/// assert_eq!(ts, vec![0., 0.25, 0.5, 0.75, 1.]);
/// ```
pub fn linspace(start: f64, end: f64, numel: usize) -> Vec<f64> {
    Linspace::new(start, end, numel).collect()
}

/// Inclusive range iterator over `numel` evenly spaced values.
///
/// Implements [`DoubleEndedIterator`] and [`ExactSizeIterator`]. Every value
/// is computed from its index rather than accumulated, so the range never
/// drifts and always ends on `end` exactly.
///
/// # Examples
///
/// ```
/// use camber_math::Linspace;
///
/// let mut lin = Linspace::new(0., 1., 3);
/// assert_eq!(lin.next(), Some(0.));
/// assert_eq!(lin.next_back(), Some(1.));
/// assert_eq!(lin.next(), Some(0.5));
/// assert_eq!(lin.next(), None);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Linspace {
    start: f64,
    end: f64,
    numel: usize,
    front: usize,
    back: usize,
}

impl Linspace {
    pub fn new(start: f64, end: f64, numel: usize) -> Self {
        Self {
            start,
            end,
            numel,
            front: 0,
            back: numel,
        }
    }

    /// Inclusive range over `[0, 1]`.
    pub fn normal(numel: usize) -> Self {
        Self::new(0.0, 1.0, numel)
    }

    /// Inclusive range whose step is as close as possible to `step`.
    ///
    /// A non-finite or zero `step` yields the two endpoints.
    pub fn with_stepsize(start: f64, end: f64, step: f64) -> Self {
        let steps = ((end - start) / step).abs().round();
        let numel = if steps.is_finite() && steps >= 1.0 {
            steps as usize + 1
        } else {
            2
        };
        Self::new(start, end, numel)
    }

    /// Start over from the first element.
    pub fn restart(&mut self) -> &mut Self {
        self.front = 0;
        self.back = self.numel;
        self
    }

    #[inline]
    fn value(&self, index: usize) -> f64 {
        if self.numel == 1 {
            return self.end;
        }
        let t = index as f64 / (self.numel - 1) as f64;
        lerp(self.start, self.end, t)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.value(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Linspace {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.value(self.back))
    }
}

impl ExactSizeIterator for Linspace {}

/// Iterator over `[0, 1]` with a fixed step size.
///
/// Cheaper than [`Linspace`] but accumulates the step, so it tends to stop
/// just short of `1`. Always yields `0` first unless built with
/// `with_numel(0)`.
///
/// ```
/// use camber_math::Stepper;
///
/// let mut step = Stepper::new(0.75);
/// assert_eq!(step.next(), Some(0.0));
/// assert_eq!(step.next(), Some(0.75));
/// assert_eq!(step.next(), None);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Stepper {
    t: f64,
    dt: f64,
}

impl Stepper {
    /// Step from 0 by `dt`. A step that is not a positive number yields `0` once.
    pub fn new(dt: f64) -> Self {
        let dt = if dt > 0.0 { dt } else { f64::INFINITY };
        Self { t: 0.0, dt }
    }

    /// Step from 0 to 1 with approximately `n` elements.
    ///
    /// `n == 0` yields nothing and `n == 1` yields `0` once.
    pub fn with_numel(n: usize) -> Self {
        match n {
            0 => Self {
                t: f64::INFINITY,
                dt: f64::INFINITY,
            },
            1 => Self::new(f64::INFINITY),
            _ => Self::new(1.0 / (n - 1) as f64),
        }
    }

    pub fn restart(&mut self) -> &mut Self {
        self.t = 0.0;
        self
    }
}

impl Iterator for Stepper {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.t > 1.0 {
            return None;
        }
        let t = self.t;
        self.t += self.dt;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.t > 1.0 {
            return (0, Some(0));
        }
        let remaining = ((1.0 - self.t) / self.dt).floor() as usize + 1;
        (remaining.saturating_sub(1), Some(remaining + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_zero_elements() {
        assert!(linspace(0.0, 0.0, 0).is_empty());
        assert_eq!(Linspace::new(1.0, -1.0, 0).next(), None);
    }

    #[test]
    fn test_linspace_one_element_is_end() {
        assert_eq!(linspace(-3.0, 5.0, 1), vec![5.0]);
    }

    #[test]
    fn test_linspace_endpoints_exact() {
        let xs = linspace(-2.0, 2.0, 7);
        assert_eq!(xs[0], -2.0);
        assert_eq!(xs[6], 2.0);
    }

    #[test]
    fn test_linspace_backwards() {
        let xs = linspace(2.0, -2.0, 2);
        assert_eq!(xs, vec![2.0, -2.0]);
    }

    #[test]
    fn test_linspace_constant_range() {
        assert!(linspace(1.0, 1.0, 1000).iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_double_ended_meets_in_middle() {
        let mut lin = Linspace::normal(5);
        assert_eq!(lin.len(), 5);
        assert_eq!(lin.next_back(), Some(1.0));
        assert_eq!(lin.next(), Some(0.0));
        assert_eq!(lin.next_back(), Some(0.75));
        assert_eq!(lin.next(), Some(0.25));
        assert_eq!(lin.next(), Some(0.5));
        assert_eq!(lin.next(), None);
        assert_eq!(lin.next_back(), None);
    }

    #[test]
    fn test_reverse_matches_forward() {
        let forward: Vec<f64> = Linspace::new(-1.0, 3.0, 9).collect();
        let mut backward: Vec<f64> = Linspace::new(-1.0, 3.0, 9).rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_restart() {
        let mut lin = Linspace::new(0.0, 1.0, 2);
        assert_eq!(lin.next(), Some(0.0));
        assert_eq!(lin.next(), Some(1.0));
        assert!(lin.next().is_none());
        lin.restart();
        assert_eq!(lin.next(), Some(0.0));
    }

    #[test]
    fn test_with_stepsize() {
        let lin = Linspace::with_stepsize(0.0, 1.0, 0.25);
        assert_eq!(lin.len(), 5);
        assert_eq!(Linspace::with_stepsize(0.0, 1.0, 0.0).len(), 2);
    }

    #[test]
    fn test_stepper_always_starts_at_zero() {
        assert_eq!(Stepper::new(1e300).next(), Some(0.0));
        assert_eq!(Stepper::new(1e-16).next(), Some(0.0));
        assert_eq!(Stepper::new(-1.0).count(), 1);
    }

    #[test]
    fn test_stepper_large_step_yields_once() {
        let mut zero = Stepper::new(1.5);
        assert_eq!(zero.next(), Some(0.0));
        assert_eq!(zero.next(), None);
    }

    #[test]
    fn test_stepper_with_numel_edge_cases() {
        let mut none = Stepper::with_numel(0);
        assert_eq!(none.next(), None);
        assert_eq!(none.next(), None);
        assert_eq!(none.size_hint(), (0, Some(0)));

        let mut one = Stepper::with_numel(1);
        assert_eq!(one.next(), Some(0.0));
        assert_eq!(one.next(), None);
    }

    #[test]
    fn test_stepper_restart() {
        let mut step = Stepper::with_numel(3);
        assert_eq!(step.by_ref().count(), 3);
        step.restart();
        assert_eq!(step.next(), Some(0.0));
    }
}
