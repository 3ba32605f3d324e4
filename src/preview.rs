//! Raster preview of a figure: orthographic projection of the point cloud
//! from a fixed camera, one blended dot per finite point.

use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use rayon::prelude::*;

use crate::cloud::PointCloud;
use crate::error::Result;
use crate::figure::{Figure, MARKER_OPACITY, MARKER_SIZE};
use crate::render::Renderer;

// Page background (#f4f4f9) and marker color ("blue").
const BACKGROUND_RGB: [u8; 3] = [0xf4, 0xf4, 0xf9];
const MARKER_RGB: [u8; 3] = [0, 0, 255];

// Half-width of the projected unit cube, plus some margin.
const VIEW_EXTENT: f64 = 1.9;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        // roughly the plotting library's default eye (1.25, 1.25, 1.25)
        Camera {
            azimuth: std::f64::consts::FRAC_PI_4,
            elevation: 0.615,
        }
    }
}

impl Camera {
    /// Screen coordinates (right, up) of `p`.
    fn project(&self, [x, y, z]: [f64; 3]) -> (f64, f64) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        let sx = -x * sa + y * ca;
        let sy = -x * ca * se - y * sa * se + z * ce;
        (sx, sy)
    }
}

/// Each axis is scaled into [-1, 1] independently, like a cube-shaped scene.
fn normalizer(cloud: &PointCloud) -> Option<impl Fn([f64; 3]) -> [f64; 3] + Sync> {
    let (lo, hi) = cloud.finite_bounds()?;
    let mut center = [0.0; 3];
    let mut half = [1.0; 3];
    for a in 0..3 {
        center[a] = (lo[a] + hi[a]) * 0.5;
        let span = (hi[a] - lo[a]) * 0.5;
        if span > 0.0 {
            half[a] = span;
        }
    }
    Some(move |p: [f64; 3]| {
        [
            (p[0] - center[0]) / half[0],
            (p[1] - center[1]) / half[1],
            (p[2] - center[2]) / half[2],
        ]
    })
}

#[inline]
fn blend(dst: &mut [u8], src: [u8; 3], alpha: f64) {
    for c in 0..3 {
        let d = dst[c] as f64;
        dst[c] = (d + (src[c] as f64 - d) * alpha).round() as u8;
    }
}

/// Rasterize the cloud into a `w x h` RGBA buffer.
pub fn rasterize(cloud: &PointCloud, camera: Camera, w: usize, h: usize) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(w * h * 4);
    for _ in 0..w * h {
        rgba.extend_from_slice(&BACKGROUND_RGB);
        rgba.push(255);
    }
    let Some(norm) = normalizer(cloud) else {
        return rgba;
    };

    let scale = w.min(h) as f64 / (2.0 * VIEW_EXTENT);
    let (cx, cy) = (w as f64 * 0.5, h as f64 * 0.5);
    let pixels: Vec<(i64, i64)> = (0..cloud.len())
        .into_par_iter()
        .map(|i| cloud.point(i))
        .filter(|p| p.iter().all(|v| v.is_finite()))
        .map(|p| {
            let (sx, sy) = camera.project(norm(p));
            ((cx + sx * scale).floor() as i64, (cy - sy * scale).floor() as i64)
        })
        .collect();

    let dot = MARKER_SIZE as i64;
    for (px, py) in pixels {
        for y in py..py + dot {
            for x in px..px + dot {
                if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                    continue;
                }
                let i = (y as usize * w + x as usize) * 4;
                blend(&mut rgba[i..i + 4], MARKER_RGB, MARKER_OPACITY);
            }
        }
    }
    rgba
}

pub fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(rgba, w as u32, h as u32, ExtendedColorType::Rgba8)?;
    Ok(buf)
}

/// Saves a PNG preview of every figure it receives, overwriting the file.
#[derive(Debug)]
pub struct PreviewPng {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub camera: Camera,
}

impl PreviewPng {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: 800,
            height: 600,
            camera: Camera::default(),
        }
    }
}

impl Renderer for PreviewPng {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        let rgba = rasterize(figure.cloud(), self.camera, self.width, self.height);
        image::save_buffer(
            &self.path,
            &rgba,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgba8,
        )?;
        log::debug!("saved preview {}", self.path.display());
        Ok(())
    }
}
