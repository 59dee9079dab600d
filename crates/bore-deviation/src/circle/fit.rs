//! Algebraic least-squares circle fit (Kåsa, 1976).
//!
//! Fits `x² + y² + A x + B y + C = 0` by solving the 3×3 normal equations
//! assembled from power-sum moments `Σ xⁱ yʲ` (i + j ≤ 3) of the point set.

use nalgebra::{Matrix3, Vector3};

use super::types::{CircleFitError, FittedCircle};

/// Minimum number of points that determine a circle.
pub const MIN_POINTS: usize = 3;

/// Reciprocal condition number below which the normal equations are treated
/// as singular.
const RCOND_MIN: f64 = 1e-12;

/// Power sums `Σ xⁱ yʲ` needed by the normal equations.
#[derive(Debug, Default, Clone, Copy)]
struct Moments {
    n: f64,
    x: f64,
    y: f64,
    xx: f64,
    xy: f64,
    yy: f64,
    xxx: f64,
    xxy: f64,
    xyy: f64,
    yyy: f64,
}

impl Moments {
    fn accumulate(points: impl Iterator<Item = [f64; 2]>) -> Self {
        let mut m = Self::default();
        for [x, y] in points {
            let (x2, y2) = (x * x, y * y);
            m.n += 1.0;
            m.x += x;
            m.y += y;
            m.xx += x2;
            m.xy += x * y;
            m.yy += y2;
            m.xxx += x2 * x;
            m.xxy += x2 * y;
            m.xyy += x * y2;
            m.yyy += y2 * y;
        }
        m
    }

    fn normal_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.xx, self.xy, self.x, //
            self.xy, self.yy, self.y, //
            self.x, self.y, self.n,
        )
    }

    fn rhs(&self) -> Vector3<f64> {
        Vector3::new(
            -(self.xxx + self.xyy),
            -(self.xxy + self.yyy),
            -(self.xx + self.yy),
        )
    }
}

/// Fit a circle to `points` (`[x, y]`) in the algebraic least-squares sense.
///
/// Points are shifted to their centroid and scaled to unit mean distance
/// before the moments are accumulated; the result is mapped back.
pub fn fit_circle_lsq(points: &[[f64; 2]]) -> Result<FittedCircle, CircleFitError> {
    if points.len() < MIN_POINTS {
        return Err(CircleFitError::TooFewPoints {
            needed: MIN_POINTS,
            got: points.len(),
        });
    }
    if points.iter().any(|p| !p[0].is_finite() || !p[1].is_finite()) {
        return Err(CircleFitError::NonFiniteInput);
    }

    let (mean_x, mean_y, scale) = normalization_params(points);
    let moments = Moments::accumulate(
        points
            .iter()
            .map(|p| [(p[0] - mean_x) * scale, (p[1] - mean_y) * scale]),
    );

    let m = moments.normal_matrix();
    let sv = m.singular_values();
    let rcond = if sv.max() > 0.0 { sv.min() / sv.max() } else { 0.0 };
    if !(rcond > RCOND_MIN) {
        return Err(CircleFitError::SingularSystem { rcond });
    }
    let abc = m
        .lu()
        .solve(&moments.rhs())
        .ok_or(CircleFitError::SingularSystem { rcond })?;

    let (u0, v0) = (-abc[0] / 2.0, -abc[1] / 2.0);
    let r_squared = u0 * u0 + v0 * v0 - abc[2];
    if !r_squared.is_finite() || r_squared <= 0.0 {
        return Err(CircleFitError::ImaginaryRadius { r_squared });
    }

    Ok(FittedCircle {
        cx: mean_x + u0 / scale,
        cy: mean_y + v0 / scale,
        r: r_squared.sqrt() / scale,
    })
}

/// Centroid and isotropic scale bringing the mean centroid distance to 1.
fn normalization_params(points: &[[f64; 2]]) -> (f64, f64, f64) {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;
    let mean_dist = points
        .iter()
        .map(|p| (p[0] - mean_x).hypot(p[1] - mean_y))
        .sum::<f64>()
        / n;
    let scale = if mean_dist > 1e-15 { 1.0 / mean_dist } else { 1.0 };
    (mean_x, mean_y, scale)
}
