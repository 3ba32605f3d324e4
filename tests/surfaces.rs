use std::fs;

use surfplot::render::LatestFigure;
use surfplot::{Equation, ParamName, Params, Session};

const EPS: f64 = 1e-9;

fn session(eq: Equation, params: Params) -> Session<LatestFigure> {
    Session::new(eq, params, LatestFigure::default()).unwrap()
}

#[test_log::test]
fn every_surface_keeps_its_point_count() {
    let expected = [
        (Equation::Paraboloid, 10201),
        (Equation::Sphere, 2016),
        (Equation::Ellipsoid, 2016),
        (Equation::Hyperboloid, 10201),
        (Equation::Plane, 10201),
    ];
    for (eq, n) in expected {
        let cloud = eq.sample(&Params::default());
        assert_eq!(cloud.x.len(), n, "{eq}");
        assert_eq!(cloud.y.len(), n, "{eq}");
        assert_eq!(cloud.z.len(), n, "{eq}");
    }
}

#[test_log::test]
fn paraboloid_two_three_at_one_one() {
    let s = session(Equation::Paraboloid, Params { a: 2.0, b: 3.0, ..Params::default() });
    let cloud = s.renderer().figure().unwrap().cloud();
    let (i, _) = cloud
        .points()
        .enumerate()
        .find(|(_, p)| (p[0] - 1.0).abs() < EPS && (p[1] - 1.0).abs() < EPS)
        .unwrap();
    assert!((cloud.z[i] - 5.0).abs() < EPS);
}

#[test_log::test]
fn flat_plane_and_collapsed_sphere() {
    let mut s = session(Equation::Plane, Params::default());
    for (name, v) in [(ParamName::A, "0"), (ParamName::B, "0"), (ParamName::C, "1"), (ParamName::D, "5")] {
        s.slider_input(name, v).unwrap();
    }
    assert!(s.renderer().figure().unwrap().cloud().z.iter().all(|&z| z == 5.0));

    s.select_equation(Equation::Sphere).unwrap();
    s.slider_input(ParamName::R, "0").unwrap();
    s.slider_input(ParamName::L, "-2").unwrap();
    let cloud = s.renderer().figure().unwrap().cloud();
    assert!(cloud.points().all(|p| p == [0.0, 0.0, -2.0]));
}

#[test_log::test]
fn switching_equations_walks_the_table() {
    let mut s = session(Equation::Paraboloid, Params::default());
    s.slider_input(ParamName::A, "4.2").unwrap();
    for eq in Equation::ALL {
        s.select_equation(eq).unwrap();
        let names: Vec<_> = s.sliders().iter().map(|sl| sl.name).collect();
        assert_eq!(names, eq.active_params());
        assert_eq!(s.params(), &Params { a: 4.2, ..Params::default() });
    }
}

#[test_log::test]
fn export_writes_all_artifacts() {
    let dir = std::env::temp_dir().join(format!("surfplot-export-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let export = surfplot::export(Equation::Ellipsoid, &Params::default(), &dir).unwrap();
    assert_eq!(export.points, 2016);
    assert_eq!(export.files.len(), 3);
    for f in &export.files {
        assert!(fs::metadata(f).unwrap().len() > 0, "{}", f.display());
    }
    assert_eq!(export.timings.last().unwrap().name, "TOTAL");

    let v: serde_json::Value = serde_json::from_slice(&fs::read(dir.join("ellipsoid.json")).unwrap()).unwrap();
    assert_eq!(v["data"][0]["x"].as_array().unwrap().len(), 2016);
    assert_eq!(v["layout"]["title"], "Graph of ellipsoid");

    fs::remove_dir_all(&dir).unwrap();
}
