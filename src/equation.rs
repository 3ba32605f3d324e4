use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cloud::PointCloud;
use crate::config::{ParamName, Params};
use crate::error::Error;
use crate::sampler;

/// The supported surface kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equation {
    #[default]
    Paraboloid,
    Sphere,
    Ellipsoid,
    Hyperboloid,
    Plane,
}

impl Equation {
    /// Selector order.
    pub const ALL: [Equation; 5] = [
        Equation::Paraboloid,
        Equation::Sphere,
        Equation::Ellipsoid,
        Equation::Hyperboloid,
        Equation::Plane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Equation::Paraboloid => "paraboloid",
            Equation::Sphere => "sphere",
            Equation::Ellipsoid => "ellipsoid",
            Equation::Hyperboloid => "hyperboloid",
            Equation::Plane => "plane",
        }
    }

    /// Parameters shown as sliders for this equation, in display order.
    pub fn active_params(self) -> &'static [ParamName] {
        use ParamName::*;
        match self {
            Equation::Paraboloid => &[A, B],
            Equation::Sphere => &[H, K, L, R],
            Equation::Ellipsoid | Equation::Hyperboloid => &[H, K, L, A, B, C],
            Equation::Plane => &[A, B, C, D],
        }
    }

    /// Sample the surface from the current parameter values. Each arm reads
    /// its fields by name; inactive parameters are ignored.
    pub fn sample(self, p: &Params) -> PointCloud {
        let cloud = match self {
            Equation::Paraboloid => sampler::paraboloid(p.a, p.b),
            Equation::Sphere => sampler::sphere(p.h, p.k, p.l, p.r),
            Equation::Ellipsoid => sampler::ellipsoid(p.h, p.k, p.l, p.a, p.b, p.c),
            Equation::Hyperboloid => sampler::hyperboloid(p.h, p.k, p.l, p.a, p.b, p.c),
            Equation::Plane => sampler::plane(p.a, p.b, p.c, p.d),
        };
        log::debug!("sampled {} points for {}", cloud.len(), self);
        cloud
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Equation::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| Error::UnknownEquation(s.to_string()))
    }
}
