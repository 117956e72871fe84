//! Rotation averaging in quaternion space.

use nalgebra::{linalg::SymmetricEigen, Matrix4, Quaternion, UnitQuaternion};
use shapefit_core::{Quat, Real};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuaternionAverageError {
    #[error("cannot average an empty set of rotations")]
    Empty,
}

/// Average rotation as the dominant eigenvector of `Σ q qᵀ`.
///
/// The outer products make the result independent of the sign of each input
/// quaternion, so `q` and `-q` count as the same rotation.
pub fn average_quaternion(rotations: &[Quat]) -> Result<Quat, QuaternionAverageError> {
    if rotations.is_empty() {
        return Err(QuaternionAverageError::Empty);
    }
    let mut m = Matrix4::<Real>::zeros();
    for q in rotations {
        // (i, j, k, w) layout, matching `Quaternion::from_vector`.
        let v = q.coords;
        m += v * v.transpose();
    }

    let eig = SymmetricEigen::new(m);
    let (imax, _) = eig.eigenvalues.argmax();
    let v = eig.eigenvectors.column(imax).into_owned();
    Ok(UnitQuaternion::from_quaternion(Quaternion::from_vector(v)))
}
