pub mod cloud;
pub mod config;
pub mod equation;
pub mod error;
pub mod figure;
pub mod grid;
pub mod preview;
pub mod render;
pub mod sampler;
pub mod session;
pub mod slider;

use std::path::{Path, PathBuf};
use std::time::Instant;

pub use cloud::PointCloud;
pub use config::{ParamName, Params};
pub use equation::Equation;
pub use error::{Error, Result};
pub use figure::Figure;
pub use render::Renderer;
pub use session::Session;

use preview::PreviewPng;
use render::{HtmlFile, JsonFile};

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Files written by [`export`].
pub struct Export {
    pub equation: Equation,
    pub files: Vec<PathBuf>,
    pub points: usize,
    pub timings: Vec<Timing>,
}

/// Sample `equation` once and write `<name>.json`, `<name>.html` and
/// `<name>.png` into `out_dir`.
pub fn export(equation: Equation, params: &Params, out_dir: &Path) -> Result<Export> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let figure = Figure::new(equation, equation.sample(params));
    timings.push(Timing {
        name: "sample",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let json = out_dir.join(format!("{equation}.json"));
    let html = out_dir.join(format!("{equation}.html"));
    let png = out_dir.join(format!("{equation}.png"));
    let targets: [(&'static str, Box<dyn Renderer>); 3] = [
        ("json", Box::new(JsonFile(json.clone()))),
        ("html", Box::new(HtmlFile(html.clone()))),
        ("preview", Box::new(PreviewPng::new(&png))),
    ];
    for (name, mut target) in targets {
        let t = Instant::now();
        target.render(&figure)?;
        timings.push(Timing {
            name,
            ms: t.elapsed().as_secs_f64() * 1000.0,
        });
    }

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok(Export {
        equation,
        files: vec![json, html, png],
        points: figure.cloud().len(),
        timings,
    })
}
