//! Closed-form surface samplers. Each takes only its own parameters and
//! evaluates one point per grid cell; nothing is validated, so degenerate
//! parameters (plane with `c = 0`, hyperboloid with `a = 0`) yield
//! non-finite coordinates that flow straight through to the chart.

use crate::cloud::PointCloud;
use crate::grid::{Axis, sweep};

/// `z = a*i^2 + b*j^2` over `[-5, 5]^2`.
pub fn paraboloid(a: f64, b: f64) -> PointCloud {
    sweep(Axis::CARTESIAN, Axis::CARTESIAN, |i, j| paraboloid_point(a, b, i, j))
}

#[inline]
fn paraboloid_point(a: f64, b: f64, i: f64, j: f64) -> [f64; 3] {
    [i, j, a * i * i + b * j * j]
}

/// Sphere of radius `r` centered at `(h, k, l)`, azimuth `i` in `[0, 2pi)`,
/// polar angle `j` in `[0, pi)`.
pub fn sphere(h: f64, k: f64, l: f64, r: f64) -> PointCloud {
    sweep(Axis::AZIMUTH, Axis::POLAR, |i, j| sphere_point(h, k, l, r, i, j))
}

#[inline]
fn sphere_point(h: f64, k: f64, l: f64, r: f64, phi: f64, theta: f64) -> [f64; 3] {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    [h + r * st * cp, k + r * st * sp, l + r * ct]
}

/// Ellipsoid with semi-axes `(a, b, c)` centered at `(h, k, l)`.
pub fn ellipsoid(h: f64, k: f64, l: f64, a: f64, b: f64, c: f64) -> PointCloud {
    sweep(Axis::LONGITUDE, Axis::LATITUDE, |i, j| {
        ellipsoid_point(h, k, l, a, b, c, i, j)
    })
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn ellipsoid_point(h: f64, k: f64, l: f64, a: f64, b: f64, c: f64, i: f64, j: f64) -> [f64; 3] {
    let (sj, cj) = j.sin_cos();
    [h + a * i.cos() * cj, k + b * i.sin() * cj, l + c * sj]
}

/// Sheet `z = l + c*sqrt(|i^2/a^2 - 1|)` over `[-5, 5]^2`, shifted by `(h, k)`.
///
/// The height depends on `i` only; `b` and `j` never enter it. This is the
/// established behavior of the plot and is kept as is.
pub fn hyperboloid(h: f64, k: f64, l: f64, a: f64, _b: f64, c: f64) -> PointCloud {
    sweep(Axis::CARTESIAN, Axis::CARTESIAN, |i, j| hyperboloid_point(h, k, l, a, c, i, j))
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn hyperboloid_point(h: f64, k: f64, l: f64, a: f64, c: f64, i: f64, j: f64) -> [f64; 3] {
    [h + i, k + j, l + ((i * i) / (a * a) - 1.0).abs().sqrt() * c]
}

/// Plane `a*x + b*y + c*z = d` over `[-5, 5]^2`.
pub fn plane(a: f64, b: f64, c: f64, d: f64) -> PointCloud {
    sweep(Axis::CARTESIAN, Axis::CARTESIAN, |i, j| plane_point(a, b, c, d, i, j))
}

#[inline]
fn plane_point(a: f64, b: f64, c: f64, d: f64, i: f64, j: f64) -> [f64; 3] {
    [i, j, (d - a * i - b * j) / c]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_parallel(c: &PointCloud) {
        assert_eq!(c.x.len(), c.y.len());
        assert_eq!(c.y.len(), c.z.len());
    }

    #[test]
    fn point_counts_match_grid() {
        for (cloud, n) in [
            (paraboloid(1.0, 1.0), 10201),
            (sphere(0.0, 0.0, 0.0, 5.0), 2016),
            (ellipsoid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 2016),
            (hyperboloid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 10201),
            (plane(1.0, 1.0, 1.0, 10.0), 10201),
        ] {
            assert_parallel(&cloud);
            assert_eq!(cloud.len(), n);
        }
    }

    #[test]
    fn paraboloid_origin_is_zero_for_any_coefficients() {
        for (a, b) in [(1.0, 1.0), (-7.3, 2.0), (10.0, -10.0)] {
            assert_eq!(paraboloid_point(a, b, 0.0, 0.0)[2], 0.0);
        }
        // grid cell nearest the origin drifts by ~1e-15
        let c = paraboloid(9.0, -4.0);
        assert!(c.point(50 * 101 + 50)[2].abs() < EPS);
    }

    #[test]
    fn paraboloid_at_one_one() {
        let c = paraboloid(2.0, 3.0);
        let p = c.point(60 * 101 + 60);
        assert!((p[0] - 1.0).abs() < EPS && (p[1] - 1.0).abs() < EPS);
        assert!((p[2] - 5.0).abs() < EPS);
    }

    #[test]
    fn zero_radius_sphere_collapses_to_center() {
        let c = sphere(1.5, -2.0, 3.0, 0.0);
        assert!(c.points().all(|p| p == [1.5, -2.0, 3.0]));
    }

    #[test]
    fn sphere_points_lie_on_radius() {
        let c = sphere(1.0, 2.0, 3.0, 4.0);
        for [x, y, z] in c.points() {
            let d = ((x - 1.0).powi(2) + (y - 2.0).powi(2) + (z - 3.0).powi(2)).sqrt();
            assert!((d - 4.0).abs() < EPS);
        }
        // first polar angle is 0: north pole
        assert_eq!(c.point(0), [1.0, 2.0, 7.0]);
    }

    #[test]
    fn ellipsoid_at_zero_angles() {
        assert_eq!(ellipsoid_point(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0), [5.0, 2.0, 3.0]);
    }

    #[test]
    fn hyperboloid_ignores_b_and_j() {
        let c1 = hyperboloid(0.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        let c2 = hyperboloid(0.0, 0.0, 0.0, 2.0, -9.0, 1.0);
        assert_eq!(c1, c2);
        let z = |j| hyperboloid_point(0.0, 0.0, 0.0, 2.0, 1.0, 3.0, j)[2];
        assert_eq!(z(-4.0), z(4.0));
        assert_eq!(hyperboloid_point(1.0, 2.0, 3.0, 2.0, 1.0, 0.0, 0.0), [1.0, 2.0, 4.0]);
    }

    #[test]
    fn hyperboloid_zero_a_is_not_guarded() {
        let c = hyperboloid(0.0, 0.0, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(c.len(), 10201);
        assert!(c.z.iter().any(|z| !z.is_finite()));
    }

    #[test]
    fn flat_plane_at_d() {
        let c = plane(0.0, 0.0, 1.0, 5.0);
        assert!(c.z.iter().all(|&z| z == 5.0));
    }

    #[test]
    fn vertical_plane_is_not_guarded() {
        let c = plane(1.0, 1.0, 0.0, 10.0);
        assert_eq!(c.len(), 10201);
        assert!(c.z.iter().all(|z| !z.is_finite()));
    }
}
