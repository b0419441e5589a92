use camber_core::{CamberError, Tolerance};
use camber_curve::{bezier, lagrange, nurbs, BSplineCurve, BezierCurve, Curve, LagrangeInterpolant};
use camber_math::{dvec2, DVec2};

#[test]
fn test_cubic_bezier_midpoint() {
    let points = [
        dvec2(0.0, 0.0),
        dvec2(1.0, 2.0),
        dvec2(3.0, 2.0),
        dvec2(4.0, 0.0),
    ];
    let p = bezier::evaluate(&points, 0.5).unwrap();
    assert!(p.abs_diff_eq(dvec2(2.0, 1.5), 1e-12), "got {}", p);

    let curve = BezierCurve::new(points.to_vec()).unwrap();
    assert_eq!(curve.point_at(0.5).unwrap(), p);
}

#[test]
fn test_quadratic_bspline_rejects_parameters_outside_knot_domain() {
    let knots = [0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0];
    let points = [
        dvec2(0.0, 0.0),
        dvec2(1.0, 1.0),
        dvec2(2.0, -1.0),
        dvec2(3.0, 0.0),
    ];

    for t in [-0.5, -1e-9, 2.0 + 1e-9, 3.0] {
        let err = nurbs::evaluate(&points, &knots, 2, t, None).unwrap_err();
        assert!(matches!(err, CamberError::Domain(_)), "t = {}: {:?}", t, err);
    }

    // Inside the domain the curve is defined, including both ends
    assert_eq!(nurbs::evaluate(&points, &knots, 2, 0.0, None).unwrap(), points[0]);
    let end = nurbs::evaluate(&points, &knots, 2, 2.0, None).unwrap();
    assert!(end.abs_diff_eq(points[3], 1e-12));
    assert!(nurbs::evaluate(&points, &knots, 2, 1.3, None).is_ok());

    let curve = BSplineCurve::new(2, knots.to_vec(), points.to_vec()).unwrap();
    assert_eq!(curve.domain(), (0.0, 2.0));
    assert!(matches!(curve.point_at(2.5), Err(CamberError::Domain(_))));
}

#[test]
fn test_lagrange_duplicate_abscissae() {
    let err = lagrange::lagrange_weights(&[0.0, 1.0, 1.0], 0.5, Tolerance::default()).unwrap_err();
    assert!(matches!(err, CamberError::DegenerateInput(_)));

    let values: [DVec2; 3] = [DVec2::ZERO, DVec2::X, DVec2::Y];
    let err = LagrangeInterpolant::new(vec![0.0, 1.0, 1.0], &values).unwrap_err();
    assert!(matches!(err, CamberError::DegenerateInput(_)));
}
