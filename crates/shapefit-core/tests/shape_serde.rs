use shapefit_core::{Cylinder3, EllipseQuadratic, EllipseRotated, Polygon2, Pt2, Pt3, Sphere3, Vec3};

#[test]
fn shapes_persist_as_json() {
    let sphere = Sphere3::from_coords(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&sphere).unwrap();
    let back: Sphere3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sphere);

    let cylinder = Cylinder3::from_parts(Pt3::new(0.5, -1.0, 2.0), Vec3::new(0.0, 0.6, 0.8), 1.25);
    let json = serde_json::to_string(&cylinder).unwrap();
    let back: Cylinder3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cylinder);

    let ellipse = EllipseRotated::new(3.0, -2.0, 5.0, 1.5, 0.3);
    let json = serde_json::to_string(&ellipse).unwrap();
    let back: EllipseRotated = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ellipse);

    let quadratic = EllipseQuadratic::new(1.0, 0.0, 4.0, -2.0, 0.5, -3.0);
    let json = serde_json::to_string(&quadratic).unwrap();
    let back: EllipseQuadratic = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quadratic);
}

#[test]
fn polygon_keeps_vertex_order() {
    let polygon = Polygon2::new(vec![
        Pt2::new(0.0, 0.0),
        Pt2::new(2.0, 0.0),
        Pt2::new(2.0, 1.0),
        Pt2::new(0.0, 1.0),
    ]);
    let json = serde_json::to_string(&polygon).unwrap();
    let back: Polygon2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertices, polygon.vertices);
}
