//! Polynomial "smooth start" family and its mirrored and blended forms.

macro_rules! def_smooth_start {
    ( $( $(#[$attr:meta])* $name:ident $t:ident => $expr:expr ),+ $(,)? ) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name($t: f64) -> f64 {
                $expr
            }
        )+
    };
}

def_smooth_start! {
    /// _t^2_
    smooth_start_2 t => t * t,
    /// _t^3_
    smooth_start_3 t => t * t * t,
    /// _t^4_
    smooth_start_4 t => t.powi(4),
    /// _t^5_
    smooth_start_5 t => t.powi(5),
    /// _t^6_
    smooth_start_6 t => t.powi(6),
    /// _t^7_
    smooth_start_7 t => t.powi(7),
    /// _t^8_
    smooth_start_8 t => t.powi(8),
    /// _t^9_
    smooth_start_9 t => t.powi(9),
}

/// _t^i_ for an arbitrary, possibly fractional, exponent.
#[inline]
pub fn smooth_start_i(i: f64, t: f64) -> f64 {
    t.powf(i)
}

/// _1 - (1 - t)^i_, the smooth start flipped both ways.
#[inline]
pub fn smooth_stop_i(i: f64, t: f64) -> f64 {
    1.0 - (1.0 - t).powf(i)
}

/// Crossfade from [`smooth_start_i`] to [`smooth_stop_i`] over `t`.
#[inline]
pub fn smooth_step_i(i: f64, t: f64) -> f64 {
    super::crossfade(|t| smooth_start_i(i, t), |t| smooth_stop_i(i, t), t)
}
