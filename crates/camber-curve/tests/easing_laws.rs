use camber_curve::Ease;
use proptest::prelude::*;

fn all_kinds() -> Vec<Ease> {
    let mut kinds = vec![
        Ease::Linear,
        Ease::QuadraticIn,
        Ease::QuadraticOut,
        Ease::QuadraticInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::QuarticIn,
        Ease::QuarticOut,
        Ease::QuarticInOut,
        Ease::QuinticIn,
        Ease::QuinticOut,
        Ease::QuinticInOut,
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::CircularIn,
        Ease::CircularOut,
        Ease::CircularInOut,
        Ease::ExponentialIn,
        Ease::ExponentialOut,
        Ease::ExponentialInOut,
        Ease::BackIn,
        Ease::BackOut,
        Ease::BackInOut,
        Ease::ElasticIn,
        Ease::ElasticOut,
        Ease::ElasticInOut,
        Ease::BounceIn,
        Ease::BounceOut,
        Ease::BounceInOut,
    ];
    for n in 0..=9 {
        kinds.push(Ease::SmoothStart(n));
        kinds.push(Ease::SmoothStop(n));
        kinds.push(Ease::SmoothStep(n));
        kinds.push(Ease::Steps(n as usize));
    }
    kinds
}

fn monotonic_kind() -> impl Strategy<Value = Ease> {
    let kinds: Vec<Ease> = all_kinds().into_iter().filter(|k| k.is_monotonic()).collect();
    proptest::sample::select(kinds)
}

#[test]
fn test_boundary_law_is_exact() {
    for kind in all_kinds() {
        assert_eq!(kind.ease(0.0), 0.0, "{:?} at 0", kind);
        assert_eq!(kind.ease(1.0), 1.0, "{:?} at 1", kind);
    }
}

#[test]
fn test_overshooting_kinds_are_flagged() {
    assert!(Ease::BackOut.ease(0.8) > 1.0);
    assert!(!Ease::BackOut.is_monotonic());
    assert!(Ease::ElasticIn.ease(0.9) < 0.0);
    assert!(!Ease::ElasticIn.is_monotonic());
    assert!(!Ease::BounceInOut.is_monotonic());
}

proptest! {
    #[test]
    fn monotonic_kinds_never_decrease(
        kind in monotonic_kind(),
        a in 0.0..=1.0f64,
        b in 0.0..=1.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            kind.ease(lo) <= kind.ease(hi) + 1e-12,
            "{:?}: ease({}) = {} > ease({}) = {}",
            kind, lo, kind.ease(lo), hi, kind.ease(hi)
        );
    }

    #[test]
    fn monotonic_kinds_stay_in_unit_interval(kind in monotonic_kind(), t in 0.0..=1.0f64) {
        let v = kind.ease(t);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{:?}({}) = {}", kind, t, v);
    }
}
