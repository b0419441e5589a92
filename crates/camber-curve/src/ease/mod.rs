//! Easing functions: non-linear remappings of a normalized parameter.
//!
//! Every transform takes `t` in `[0, 1]` and returns a value that starts at
//! exactly `0` and ends at exactly `1`. Inputs outside `[0, 1]` are not
//! clamped; what a function does there is unspecified.

pub mod compose;
mod smooth;

use std::f64::consts::{FRAC_PI_2, PI};

pub use compose::{arch, crossfade, flip, mix, reverse_scale, scale};
pub use smooth::{
    smooth_start_2, smooth_start_3, smooth_start_4, smooth_start_5, smooth_start_6,
    smooth_start_7, smooth_start_8, smooth_start_9, smooth_start_i, smooth_step_i, smooth_stop_i,
};

/// A named easing curve.
///
/// `In` variants accelerate from rest, `Out` variants decelerate into rest,
/// and `InOut` variants do both, switching halfway.
///
/// The `Back` and `Elastic` families overshoot outside `[0, 1]` and the
/// `Bounce` family oscillates; see [`Ease::is_monotonic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    /// Pulls back below `0` before accelerating.
    BackIn,
    /// Overshoots above `1` before settling.
    BackOut,
    BackInOut,
    /// Oscillates with growing amplitude, dipping below `0`.
    ElasticIn,
    /// Oscillates with decaying amplitude around `1`.
    ElasticOut,
    ElasticInOut,
    /// Bounces off `0` with growing height. Not monotonic.
    BounceIn,
    /// Bounces against `1` with shrinking height. Not monotonic.
    BounceOut,
    BounceInOut,
    /// `t^n`. Exponents below 1 are treated as 1.
    SmoothStart(u32),
    /// `1 - (1 - t)^n`. Exponents below 1 are treated as 1.
    SmoothStop(u32),
    /// Crossfade from `SmoothStart(n)` to `SmoothStop(n)`.
    SmoothStep(u32),
    /// Staircase with the given number of equal jumps.
    Steps(usize),
}

impl Ease {
    /// Apply the easing function to `t`.
    ///
    /// `ease(0.0) == 0.0` and `ease(1.0) == 1.0` hold exactly for every
    /// variant, including those whose closed forms only reach the endpoints
    /// up to rounding.
    pub fn ease(self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }

        match self {
            Ease::Linear => t,
            Ease::QuadraticIn => t * t,
            Ease::QuadraticOut => 1.0 - (1.0 - t).powi(2),
            Ease::QuadraticInOut => in_out(t, 2),
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => in_out(t, 3),
            Ease::QuarticIn => t.powi(4),
            Ease::QuarticOut => 1.0 - (1.0 - t).powi(4),
            Ease::QuarticInOut => in_out(t, 4),
            Ease::QuinticIn => t.powi(5),
            Ease::QuinticOut => 1.0 - (1.0 - t).powi(5),
            Ease::QuinticInOut => in_out(t, 5),
            Ease::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Ease::SineOut => (t * FRAC_PI_2).sin(),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::CircularIn => 1.0 - (1.0 - t * t).sqrt(),
            Ease::CircularOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Ease::CircularInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (2.0 - 2.0 * t).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Ease::ExponentialIn => 2f64.powf(10.0 * t - 10.0),
            Ease::ExponentialOut => 1.0 - 2f64.powf(-10.0 * t),
            Ease::ExponentialInOut => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(10.0 - 20.0 * t)) / 2.0
                }
            }
            Ease::BackIn => back_in(t),
            Ease::BackOut => 1.0 - back_in(1.0 - t),
            Ease::BackInOut => {
                const C: f64 = BACK_OVERSHOOT * 1.525;
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((C + 1.0) * 2.0 * t - C) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C + 1.0) * (2.0 * t - 2.0) + C) + 2.0) / 2.0
                }
            }
            Ease::ElasticIn => {
                -2f64.powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * ELASTIC_FREQUENCY).sin()
            }
            Ease::ElasticOut => {
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_FREQUENCY).sin() + 1.0
            }
            Ease::ElasticInOut => {
                let c = (2.0 * PI) / 4.5;
                if t < 0.5 {
                    -2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c).sin() / 2.0
                } else {
                    2f64.powf(10.0 - 20.0 * t) * ((20.0 * t - 11.125) * c).sin() / 2.0 + 1.0
                }
            }
            Ease::BounceIn => 1.0 - bounce_out(1.0 - t),
            Ease::BounceOut => bounce_out(t),
            Ease::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
            Ease::SmoothStart(n) => smooth_start_i(f64::from(n.max(1)), t),
            Ease::SmoothStop(n) => smooth_stop_i(f64::from(n.max(1)), t),
            Ease::SmoothStep(n) => smooth_step_i(f64::from(n.max(1)), t),
            Ease::Steps(n) => {
                let n = n.max(1) as f64;
                (t * n).round() / n
            }
        }
    }

    /// Whether the function is non-decreasing on `[0, 1]`.
    pub fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Ease::BackIn
                | Ease::BackOut
                | Ease::BackInOut
                | Ease::ElasticIn
                | Ease::ElasticOut
                | Ease::ElasticInOut
                | Ease::BounceIn
                | Ease::BounceOut
                | Ease::BounceInOut
        )
    }
}

const BACK_OVERSHOOT: f64 = 1.70158;
const ELASTIC_FREQUENCY: f64 = 2.0 * PI / 3.0;

/// Symmetric in-out power curve of degree `n`.
fn in_out(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(n) / 2.0
    }
}

fn back_in(t: f64) -> f64 {
    t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
}

fn bounce_out(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0 * t * t) - (99.0 / 10.0 * t) + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0 * t * t) - (35442.0 / 1805.0 * t) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * t * t) - (513.0 / 25.0 * t) + 268.0 / 25.0
    }
}
