use serde::Serialize;

/// Sampled surface points as three parallel coordinate sequences.
/// Index `i` across `x`, `y`, `z` is one point.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointCloud {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl PointCloud {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn push(&mut self, [x, y, z]: [f64; 3]) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    pub fn len(&self) -> usize {
        debug_assert!(self.x.len() == self.y.len() && self.y.len() == self.z.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn point(&self, i: usize) -> [f64; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }

    /// Axis-aligned bounds over finite points only. None if no point is finite.
    pub fn finite_bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        let mut any = false;
        for p in self.points().filter(|p| p.iter().all(|v| v.is_finite())) {
            any = true;
            for a in 0..3 {
                lo[a] = lo[a].min(p[a]);
                hi[a] = hi[a].max(p[a]);
            }
        }
        any.then_some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_sequences_parallel() {
        let mut c = PointCloud::default();
        c.push([1.0, 2.0, 3.0]);
        c.push([4.0, 5.0, 6.0]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.point(1), [4.0, 5.0, 6.0]);
        assert_eq!(c.x, vec![1.0, 4.0]);
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let mut c = PointCloud::default();
        c.push([0.0, 0.0, f64::INFINITY]);
        assert_eq!(c.finite_bounds(), None);
        c.push([-1.0, 2.0, 3.0]);
        c.push([1.0, -2.0, f64::NAN]);
        c.push([0.5, 4.0, -3.0]);
        assert_eq!(c.finite_bounds(), Some(([-1.0, 2.0, -3.0], [0.5, 4.0, 3.0])));
    }
}
