//! Fit a sphere, a cylinder and an ellipse to noisy synthetic points.
//!
//! Each shape is sampled, perturbed with Gaussian noise, seeded from a
//! closed-form estimate (or a perturbed guess) and refined with the LM
//! fitters.
//!
//! Run with: `cargo run -p shapefit --example fit_shapes`

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use shapefit::core::synthetic::{sample_cylinder, sample_ellipse, sample_sphere};
use shapefit::prelude::*;

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.02)?;
    let mut jitter3 = |p: Pt3| {
        p + Vec3::new(
            noise.sample(&mut rng),
            noise.sample(&mut rng),
            noise.sample(&mut rng),
        )
    };

    println!("=== Sphere ===");
    let sphere_gt = Sphere3::from_coords(1.0, 2.0, 3.0, 4.0);
    let points: Vec<Pt3> = sample_sphere(&sphere_gt, 60)
        .into_iter()
        .map(&mut jitter3)
        .collect();
    let seed = fit_sphere_linear(&points)?;
    let report = FitSphereToPoints::default().fit(&points, &seed)?;
    println!("  ground truth: {:?}", sphere_gt);
    println!("  linear seed:  {:?}", seed);
    print_report(&report);

    println!("\n=== Cylinder ===");
    let cylinder_gt =
        Cylinder3::from_parts(Pt3::new(0.0, 1.0, -1.0), Vec3::new(0.1, 0.3, 1.0), 1.5);
    let points: Vec<Pt3> = sample_cylinder(&cylinder_gt, 6, 8, 4.0)
        .into_iter()
        .map(&mut jitter3)
        .collect();
    let guess = Cylinder3::from_parts(Pt3::new(0.2, 0.8, -1.0), Vec3::new(0.0, 0.2, 1.0), 1.2);
    let report = FitCylinderToPoints::default().fit(&points, &guess)?;
    println!("  ground truth: {:?}", cylinder_gt);
    print_report(&report);
    println!("  axis direction: {:?}", report.model.line.slope.normalize());

    println!("\n=== Ellipse ===");
    let ellipse_gt = EllipseRotated::new(10.0, -4.0, 6.0, 2.5, 0.7);
    let noise2 = Normal::new(0.0, 0.05)?;
    let points: Vec<Pt2> = sample_ellipse(&ellipse_gt, 40)
        .into_iter()
        .map(|p| Pt2::new(p.x + noise2.sample(&mut rng), p.y + noise2.sample(&mut rng)))
        .collect();
    let seed = quadratic_to_rotated(&fit_ellipse_algebraic(&points)?)?;
    let report = RefineEllipseEuclidean::default().fit(&points, &seed)?;
    println!("  ground truth:   {:?}", ellipse_gt);
    println!("  algebraic seed: {:?}", seed);
    print_report(&report);

    Ok(())
}

fn print_report<M: std::fmt::Debug>(report: &FitReport<M>) {
    println!("  fitted:       {:?}", report.model);
    println!(
        "  cost {:.6e} -> {:.6e} in {} iterations (converged: {})",
        report.initial_cost, report.final_cost, report.iterations, report.converged
    );
}
