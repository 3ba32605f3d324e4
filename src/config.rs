use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// Slider bounds, shared by every parameter.
pub const SLIDER_MIN: f64 = -10.0;
pub const SLIDER_MAX: f64 = 10.0;
pub const SLIDER_STEP: f64 = 0.1;

/// Names of the tunable surface parameters, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamName {
    A,
    B,
    C,
    H,
    K,
    L,
    R,
    D,
}

impl ParamName {
    pub const ALL: [ParamName; 8] = [
        ParamName::A,
        ParamName::B,
        ParamName::C,
        ParamName::H,
        ParamName::K,
        ParamName::L,
        ParamName::R,
        ParamName::D,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::A => "a",
            ParamName::B => "b",
            ParamName::C => "c",
            ParamName::H => "h",
            ParamName::K => "k",
            ParamName::L => "l",
            ParamName::R => "r",
            ParamName::D => "d",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownParam(s.to_string()))
    }
}

/// Surface coefficients, one slider each. Every field is always populated;
/// each equation reads only its own subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub a: f64,
    pub b: f64,
    pub c: f64,

    // Center offsets
    pub h: f64,
    pub k: f64,
    pub l: f64,

    // Sphere radius
    pub r: f64,
    // Plane constant
    pub d: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            c: 1.0,
            h: 0.0,
            k: 0.0,
            l: 0.0,
            r: 5.0,
            d: 10.0,
        }
    }
}

impl Params {
    pub fn get(&self, name: ParamName) -> f64 {
        match name {
            ParamName::A => self.a,
            ParamName::B => self.b,
            ParamName::C => self.c,
            ParamName::H => self.h,
            ParamName::K => self.k,
            ParamName::L => self.l,
            ParamName::R => self.r,
            ParamName::D => self.d,
        }
    }

    pub fn set(&mut self, name: ParamName, value: f64) {
        let slot = match name {
            ParamName::A => &mut self.a,
            ParamName::B => &mut self.b,
            ParamName::C => &mut self.c,
            ParamName::H => &mut self.h,
            ParamName::K => &mut self.k,
            ParamName::L => &mut self.l,
            ParamName::R => &mut self.r,
            ParamName::D => &mut self.d,
        };
        *slot = value;
    }
}

/// Server settings, read from `SURFPLOT_ADDR` and `SURFPLOT_FRONTEND`.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub frontend_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_dir: PathBuf::from("frontend"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable addresses fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = lookup("SURFPLOT_ADDR") {
            match raw.parse() {
                Ok(addr) => cfg.addr = addr,
                Err(e) => log::warn!("ignoring SURFPLOT_ADDR={raw:?}: {e}"),
            }
        }
        if let Some(dir) = lookup("SURFPLOT_FRONTEND") {
            cfg.frontend_dir = PathBuf::from(dir);
        }
        cfg
    }
}
