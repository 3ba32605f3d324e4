use std::path::PathBuf;

use anyhow::{Context, bail};
use log::info;
use rayon::prelude::*;

use surfplot::slider::parse_float;
use surfplot::{Equation, ParamName, Params};

/// Usage: surfplot [equation|all] [out_dir] [name=value ...]
fn parse_args(args: &[String]) -> anyhow::Result<(Vec<Equation>, PathBuf, Params)> {
    let which = args.first().map(String::as_str).unwrap_or("paraboloid");
    let equations: Vec<Equation> = if which == "all" {
        Equation::ALL.to_vec()
    } else {
        vec![which.parse()?]
    };
    let out_dir: PathBuf = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    let mut params = Params::default();
    for arg in args.iter().skip(2) {
        let Some((name, value)) = arg.split_once('=') else {
            bail!("expected name=value, got {arg:?}");
        };
        let name: ParamName = name.parse()?;
        params.set(name, parse_float(value));
    }
    Ok((equations, out_dir, params))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (equations, out_dir, params) = parse_args(&args)?;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    info!(
        "Exporting {} into {} with {:?}",
        equations.iter().map(|e| e.name()).collect::<Vec<_>>().join(", "),
        out_dir.display(),
        params
    );

    let exports = equations
        .par_iter()
        .map(|&eq| surfplot::export(eq, &params, &out_dir).with_context(|| format!("exporting {eq}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for export in &exports {
        info!("{}: {} points", export.equation, export.points);
        for t in &export.timings {
            info!("  {:20} {:8.1} ms", t.name, t.ms);
        }
        for f in &export.files {
            info!("  saved {}", f.display());
        }
    }

    Ok(())
}
