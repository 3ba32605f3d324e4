//! One interactive page: the parameter store, the active equation's
//! sliders and the chart they drive. All updates run to completion,
//! one redraw per event.

use crate::config::{ParamName, Params};
use crate::equation::Equation;
use crate::error::Result;
use crate::figure::Figure;
use crate::render::Renderer;
use crate::slider::{Slider, SliderController};

pub struct Session<R> {
    params: Params,
    sliders: SliderController,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Build the sliders for `equation` and draw the first chart.
    pub fn new(equation: Equation, params: Params, renderer: R) -> Result<Self> {
        let sliders = SliderController::new(equation, &params);
        let mut session = Self { params, sliders, renderer };
        session.redraw()?;
        Ok(session)
    }

    pub fn equation(&self) -> Equation {
        self.sliders.equation()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn sliders(&self) -> &[Slider] {
        self.sliders.sliders()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Switch surfaces: fresh sliders, same stored values, one redraw.
    pub fn select_equation(&mut self, equation: Equation) -> Result<()> {
        log::info!("equation {} -> {}", self.equation(), equation);
        self.sliders.rebuild(equation, &self.params);
        self.redraw()
    }

    /// Input event from the slider bound to `name`.
    pub fn slider_input(&mut self, name: ParamName, raw: &str) -> Result<f64> {
        let value = self.sliders.input(name, raw, &mut self.params)?;
        log::debug!("{name} = {value}");
        self.redraw()?;
        Ok(value)
    }

    /// Resample the active surface and hand it to the renderer.
    pub fn redraw(&mut self) -> Result<()> {
        let figure = self.figure();
        self.renderer.render(&figure)
    }

    pub fn figure(&self) -> Figure {
        let equation = self.equation();
        Figure::new(equation, equation.sample(&self.params))
    }
}
