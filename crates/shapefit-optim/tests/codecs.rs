//! Codec layouts and option serialization.

use nalgebra::DVector;
use shapefit_core::{Cylinder3, EllipseRotated, Pt3, Sphere3, Vec3};
use shapefit_optim::params::{CylinderCodec, EllipseCodec, ShapeCodec, SphereCodec};
use shapefit_optim::{FitBackend, FitReport, FitSphereToPoints, SolveOptions};

fn assert_round_trip<C: ShapeCodec>(shape: &C::Shape, params: &[f64])
where
    C::Shape: PartialEq + std::fmt::Debug,
{
    let encoded = C::encode(shape);
    assert_eq!(encoded.len(), C::DIM);
    assert_eq!(&C::decode(encoded.as_slice()), shape);

    let decoded = C::try_decode(params).unwrap();
    assert_eq!(C::encode(&decoded), DVector::from_column_slice(params));
}

#[test]
fn sphere_round_trip() {
    assert_round_trip::<SphereCodec>(
        &Sphere3::from_coords(-1.5, 0.25, 9.0, 3.5),
        &[0.1, 0.2, 0.3, 0.4],
    );
}

#[test]
fn cylinder_round_trip() {
    assert_round_trip::<CylinderCodec>(
        &Cylinder3::from_parts(Pt3::new(1.0, -2.0, 0.5), Vec3::new(3.0, 0.0, -4.0), 2.0),
        &[0.0, 1.0, 2.0, 0.5, 0.5, 0.5, 7.0],
    );
}

#[test]
fn ellipse_round_trip() {
    assert_round_trip::<EllipseCodec>(
        &EllipseRotated::new(2.0, 3.0, 5.0, 1.0, -0.7),
        &[-1.0, 1.0, 4.0, 4.5, 1.2],
    );
    assert!(EllipseCodec::try_decode(&[0.0; 6]).is_err());
}

#[test]
fn decode_ignores_trailing_parameters() {
    let e = EllipseCodec::decode(&[1.0, 2.0, 3.0, 4.0, 0.5, 9.0, 9.0]);
    assert_eq!(e, EllipseRotated::new(1.0, 2.0, 3.0, 4.0, 0.5));
}

#[test]
fn options_round_trip_through_json() {
    let opts = SolveOptions {
        max_iters: 25,
        ftol: 1e-9,
        gtol: 1e-7,
        xtol: 1e-8,
        verbose: true,
    };
    let json = serde_json::to_string(&opts).unwrap();
    let back: SolveOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);

    let fitter: FitSphereToPoints =
        serde_json::from_str(r#"{"solve": {"max_iters": 5}}"#).unwrap();
    assert_eq!(fitter.solve.max_iters, 5);
    assert_eq!(fitter.solve.ftol, SolveOptions::default().ftol);
    assert_eq!(fitter.backend, FitBackend::Stepper);

    let fitter: FitSphereToPoints = serde_json::from_str(r#"{"backend": "minpack"}"#).unwrap();
    assert_eq!(fitter.backend, FitBackend::Minpack);
    assert!(serde_json::from_str::<FitSphereToPoints>(r#"{"backend": "ceres"}"#).is_err());
}

#[test]
fn report_serializes_model() {
    let report = FitReport {
        model: Sphere3::from_coords(1.0, 2.0, 3.0, 4.0),
        initial_cost: 2.0,
        final_cost: 0.5,
        iterations: 3,
        converged: true,
    };
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["model"]["radius"], 4.0);
    assert_eq!(json["iterations"], 3);
}
