use std::f64::consts::PI;

use crate::cloud::PointCloud;

/// Sampling step, identical in every dimension of every surface.
pub const STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Keep sampling while `v <= end`.
    Inclusive,
    /// Keep sampling while `v < end`.
    Exclusive,
}

/// One sampling dimension. Values are produced by repeatedly adding
/// `STEP` to a running value, so float drift at the far end is kept
/// (e.g. the last value of `[-5, 5]` is 4.999999999999997, not 5).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub start: f64,
    pub end: f64,
    pub bound: Bound,
}

impl Axis {
    pub const fn inclusive(start: f64, end: f64) -> Self {
        Self { start, end, bound: Bound::Inclusive }
    }

    pub const fn exclusive(start: f64, end: f64) -> Self {
        Self { start, end, bound: Bound::Exclusive }
    }

    /// `[-5, 5]`, used by the cartesian surfaces.
    pub const CARTESIAN: Axis = Axis::inclusive(-5.0, 5.0);
    /// Azimuth `[0, 2pi)`.
    pub const AZIMUTH: Axis = Axis::exclusive(0.0, 2.0 * PI);
    /// Polar angle `[0, pi)`.
    pub const POLAR: Axis = Axis::exclusive(0.0, PI);
    /// Longitude `[-pi, pi]`.
    pub const LONGITUDE: Axis = Axis::inclusive(-PI, PI);
    /// Latitude `[-pi/2, pi/2]`.
    pub const LATITUDE: Axis = Axis::inclusive(-PI / 2.0, PI / 2.0);

    #[inline]
    fn contains(&self, v: f64) -> bool {
        match self.bound {
            Bound::Inclusive => v <= self.end,
            Bound::Exclusive => v < self.end,
        }
    }

    pub fn values(self) -> impl Iterator<Item = f64> + Clone {
        std::iter::successors(Some(self.start), |v| Some(v + STEP))
            .take_while(move |&v| self.contains(v))
    }

    pub fn len(self) -> usize {
        self.values().count()
    }
}

/// Evaluate `f(i, j)` over `outer x inner`, outer-major.
pub fn sweep(outer: Axis, inner: Axis, mut f: impl FnMut(f64, f64) -> [f64; 3]) -> PointCloud {
    let js: Vec<f64> = inner.values().collect();
    let mut cloud = PointCloud::with_capacity(outer.len() * js.len());
    for i in outer.values() {
        for &j in &js {
            cloud.push(f(i, j));
        }
    }
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_lengths() {
        assert_eq!(Axis::CARTESIAN.len(), 101);
        assert_eq!(Axis::AZIMUTH.len(), 63);
        assert_eq!(Axis::POLAR.len(), 32);
        assert_eq!(Axis::LONGITUDE.len(), 63);
        assert_eq!(Axis::LATITUDE.len(), 32);
    }

    #[test]
    fn values_accumulate_instead_of_multiplying() {
        let v: Vec<f64> = Axis::CARTESIAN.values().collect();
        assert_eq!(v[0], -5.0);
        let mut acc = -5.0;
        for _ in 0..60 {
            acc += STEP;
        }
        assert_eq!(v[60], acc);
        assert!(v[100] < 5.0);
        assert!((v[100] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn exclusive_bound_never_reaches_end() {
        assert!(Axis::AZIMUTH.values().all(|v| v < 2.0 * PI));
        assert!(Axis::POLAR.values().all(|v| v < PI));
        assert_eq!(Axis::exclusive(0.0, 0.0).len(), 0);
        assert_eq!(Axis::inclusive(0.0, 0.0).len(), 1);
    }

    #[test]
    fn sweep_is_outer_major() {
        let c = sweep(Axis::inclusive(0.0, 0.15), Axis::inclusive(0.0, 0.25), |i, j| [i, j, 0.0]);
        assert_eq!(c.len(), 6);
        assert_eq!(c.x[..3], [0.0, 0.0, 0.0]);
        assert_eq!(c.point(4)[0], STEP);
        assert_eq!(c.point(4)[1], STEP);
    }
}
