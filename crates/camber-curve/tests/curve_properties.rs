use approx::abs_diff_eq;
use camber_curve::basis::bernstein;
use camber_curve::nurbs::{self, basis_functions, find_span, KnotVector};
use camber_curve::spline::{Boundary, Parametrization};
use camber_curve::{
    bezier, BSplineCurve, CatmullRomSpline, CubicSpline, Curve, HermiteSpline, NurbsCurve,
};
use camber_math::{dvec2, DVec2};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = DVec2> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| dvec2(x, y))
}

fn arb_polygon(min: usize, max: usize) -> impl Strategy<Value = Vec<DVec2>> {
    prop::collection::vec(arb_point(), min..=max)
}

/// Degree and a clamped knot vector with random interior knots.
fn arb_bspline_setup() -> impl Strategy<Value = (usize, Vec<DVec2>, Vec<f64>)> {
    (1..=4usize, 0..6usize).prop_flat_map(|(degree, extra)| {
        let n = degree + 1 + extra;
        (
            Just(degree),
            prop::collection::vec(arb_point(), n),
            prop::collection::vec(0.0..1.0f64, extra),
        )
            .prop_map(|(degree, points, mut interior)| {
                interior.sort_by(|a, b| a.total_cmp(b));
                let mut knots = vec![0.0; degree + 1];
                knots.extend(interior);
                knots.extend(std::iter::repeat(1.0).take(degree + 1));
                (degree, points, knots)
            })
    })
}

fn close(a: DVec2, b: DVec2, scale: f64) -> bool {
    a.abs_diff_eq(b, 1e-9 * scale.max(1.0))
}

proptest! {
    #[test]
    fn bernstein_partition_of_unity(n in 0..30usize, t in 0.0..=1.0f64) {
        let sum: f64 = bernstein(n, t).iter().sum();
        prop_assert!(abs_diff_eq!(sum, 1.0, epsilon = 1e-12), "sum = {}", sum);
    }

    #[test]
    fn bspline_basis_partition_of_unity(
        (degree, points, knots) in arb_bspline_setup(),
        u in 0.0..=1.0f64,
    ) {
        prop_assume!(nurbs::validate_knots(&knots, points.len(), degree).is_ok());
        let span = find_span(degree, &knots, points.len() - 1, u);
        let basis = basis_functions(degree, &knots, span, u);
        prop_assert_eq!(basis.len(), degree + 1);
        let sum: f64 = basis.iter().sum();
        prop_assert!(abs_diff_eq!(sum, 1.0, epsilon = 1e-12), "sum = {}", sum);
        prop_assert!(basis.iter().all(|&b| b >= -1e-15));
    }

    #[test]
    fn bezier_truncation_round_trip(
        points in arb_polygon(2, 9),
        split in 0.01..0.99f64,
        s in 0.0..=1.0f64,
    ) {
        let (left, right) = bezier::truncate(&points, split).unwrap();
        prop_assert_eq!(left.len(), points.len());
        prop_assert_eq!(right.len(), points.len());

        let expected = bezier::evaluate(&points, s).unwrap();
        let actual = if s <= split {
            bezier::evaluate(&left, s / split).unwrap()
        } else {
            bezier::evaluate(&right, (s - split) / (1.0 - split)).unwrap()
        };
        prop_assert!(close(expected, actual, 100.0), "{} vs {}", expected, actual);
    }

    #[test]
    fn nurbs_with_unit_weights_is_the_bspline(
        (degree, points, knots) in arb_bspline_setup(),
        u in 0.0..=1.0f64,
    ) {
        prop_assume!(nurbs::validate_knots(&knots, points.len(), degree).is_ok());
        let ones = vec![1.0; points.len()];
        let plain = nurbs::evaluate(&points, &knots, degree, u, None).unwrap();
        let rational = nurbs::evaluate(&points, &knots, degree, u, Some(&ones)).unwrap();
        prop_assert!(close(plain, rational, 100.0), "{} vs {}", plain, rational);

        let bspline = BSplineCurve::new(degree, knots, points).unwrap();
        let nurbs = NurbsCurve::from_bspline(bspline.clone());
        let a = bspline.point_at(u).unwrap();
        let b = nurbs.point_at(u).unwrap();
        prop_assert!(close(a, b, 100.0));
    }

    #[test]
    fn curves_interpolate_their_end_points(points in arb_polygon(4, 10)) {
        let first = points[0];
        let last = points[points.len() - 1];

        let curves: Vec<Box<dyn Curve<DVec2>>> = vec![
            Box::new(camber_curve::BezierCurve::new(points.clone()).unwrap()),
            Box::new(CubicSpline::new(points.clone()).unwrap()),
            Box::new(
                CubicSpline::with_boundary(
                    points.clone(),
                    Boundary::Clamped { start: DVec2::X, end: DVec2::Y },
                )
                .unwrap(),
            ),
            Box::new(CatmullRomSpline::new(points.clone(), Parametrization::Uniform).unwrap()),
            Box::new(CatmullRomSpline::new(points.clone(), Parametrization::Centripetal).unwrap()),
            Box::new(BSplineCurve::clamped(3, points.clone()).unwrap()),
            Box::new(
                HermiteSpline::new(points.iter().map(|&p| (p, DVec2::ONE)).collect()).unwrap(),
            ),
        ];

        for curve in &curves {
            let (t_min, t_max) = curve.domain();
            let start = curve.point_at(t_min).unwrap();
            let end = curve.point_at(t_max).unwrap();
            prop_assert!(close(start, first, 100.0), "start {} vs {}", start, first);
            prop_assert!(close(end, last, 100.0), "end {} vs {}", end, last);
        }
    }

    #[test]
    fn clamped_knots_are_valid(n_extra in 0..20usize, degree in 0..6usize) {
        let n = degree + 1 + n_extra;
        let knots = KnotVector::clamped_uniform(n, degree).unwrap();
        prop_assert!(nurbs::validate_knots(knots.as_slice(), n, degree).is_ok());
        prop_assert_eq!(knots.domain(degree), Some((0.0, 1.0)));
    }
}
