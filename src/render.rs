//! The chart renderer capability. Every `render` call replaces whatever the
//! target showed before.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::figure::Figure;

pub trait Renderer {
    fn render(&mut self, figure: &Figure) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        (**self).render(figure)
    }
}

/// Keeps the most recent figure in memory.
#[derive(Debug, Default)]
pub struct LatestFigure {
    figure: Option<Figure>,
    draws: usize,
}

impl LatestFigure {
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Number of redraws received so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Renderer for LatestFigure {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        self.figure = Some(figure.clone());
        self.draws += 1;
        Ok(())
    }
}

/// Writes the figure JSON to a file, overwriting it.
#[derive(Debug)]
pub struct JsonFile(pub PathBuf);

impl Renderer for JsonFile {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        fs::write(&self.0, serde_json::to_vec(figure)?)?;
        log::debug!("wrote {}", self.0.display());
        Ok(())
    }
}

/// Writes a standalone HTML page, overwriting it.
#[derive(Debug)]
pub struct HtmlFile(pub PathBuf);

impl Renderer for HtmlFile {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        fs::write(&self.0, figure.to_html()?)?;
        log::debug!("wrote {}", self.0.display());
        Ok(())
    }
}
