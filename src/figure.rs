//! Chart payload in the plotting library's JSON schema: one 3D scatter
//! trace and a fixed layout. Non-finite coordinates serialize as `null`.

use serde::Serialize;

use crate::cloud::PointCloud;
use crate::equation::Equation;

pub const MARKER_SIZE: f64 = 2.0;
pub const MARKER_COLOR: &str = "blue";
pub const MARKER_OPACITY: f64 = 0.8;
pub const BACKGROUND: &str = "#f4f4f9";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub color: &'static str,
    pub opacity: f64,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            size: MARKER_SIZE,
            color: MARKER_COLOR,
            opacity: MARKER_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    #[serde(flatten)]
    pub cloud: PointCloud,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub marker: Marker,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub title: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
    pub zaxis: AxisTitle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub scene: Scene,
    pub title: String,
    pub paper_bgcolor: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(equation: Equation, cloud: PointCloud) -> Self {
        let trace = Trace {
            cloud,
            kind: "scatter3d",
            mode: "markers",
            marker: Marker::default(),
        };
        let layout = Layout {
            scene: Scene {
                xaxis: AxisTitle { title: "X" },
                yaxis: AxisTitle { title: "Y" },
                zaxis: AxisTitle { title: "Z" },
            },
            title: format!("Graph of {equation}"),
            paper_bgcolor: BACKGROUND,
        };
        Self { data: vec![trace], layout }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.data[0].cloud
    }

    /// Self-contained page that draws the figure with the plotting library.
    pub fn to_html(&self) -> serde_json::Result<String> {
        let data = serde_json::to_string(&self.data)?;
        let layout = serde_json::to_string(&self.layout)?;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body style="background:{BACKGROUND}">
<div id="plot" style="width:100%;height:90vh"></div>
<script>
Plotly.newPlot(document.getElementById('plot'), {data}, {layout});
</script>
</body>
</html>
"#,
            title = self.layout.title,
        ))
    }
}
