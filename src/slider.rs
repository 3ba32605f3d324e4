use serde::Serialize;

use crate::config::{ParamName, Params, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::equation::Equation;
use crate::error::{Error, Result};

/// A labeled range control bound to one parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Slider {
    pub name: ParamName,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl Slider {
    fn new(name: ParamName, value: f64) -> Self {
        Self {
            name,
            label: label(name, value),
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            value,
        }
    }

    fn show(&mut self, value: f64) {
        self.value = value;
        self.label = label(self.name, value);
    }
}

fn label(name: ParamName, value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{name}: {sign}Infinity");
    }
    format!("{name}: {value}")
}

/// Owns the slider set for the active equation.
#[derive(Clone, Debug)]
pub struct SliderController {
    equation: Equation,
    sliders: Vec<Slider>,
}

impl SliderController {
    pub fn new(equation: Equation, params: &Params) -> Self {
        let mut ctl = Self { equation, sliders: Vec::new() };
        ctl.rebuild(equation, params);
        ctl
    }

    pub fn equation(&self) -> Equation {
        self.equation
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Drop every slider and build a fresh set for `equation`, seeded from
    /// `params`. Stored values are left alone.
    pub fn rebuild(&mut self, equation: Equation, params: &Params) {
        self.equation = equation;
        self.sliders = equation
            .active_params()
            .iter()
            .map(|&name| Slider::new(name, params.get(name)))
            .collect();
        log::debug!("built {} sliders for {}", self.sliders.len(), equation);
    }

    /// Apply a raw input event from the slider bound to `name`: parse it,
    /// store it in `params` and refresh the label. Returns the stored value.
    pub fn input(&mut self, name: ParamName, raw: &str, params: &mut Params) -> Result<f64> {
        let equation = self.equation;
        let slider = self
            .sliders
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or(Error::Unbound { name, equation })?;
        let value = parse_float(raw);
        params.set(name, value);
        slider.show(value);
        Ok(value)
    }
}

/// Parse like a browser's `parseFloat`: skip leading whitespace, take the
/// longest prefix that reads as a number, NaN when there is none.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let v = f64::INFINITY;
        return if s.starts_with('-') { -v } else { v };
    }

    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits(int_end + 1);
    }
    // need at least one digit before or after the point
    if mantissa_end - end <= usize::from(mantissa_end > int_end) {
        return f64::NAN;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
