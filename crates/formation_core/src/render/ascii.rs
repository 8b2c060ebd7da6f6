//! Top-down terminal view
//!
//! Orthographic projection of the pitch plane onto a character grid. The own
//! goal is at the bottom, x grows to the right, height is dropped.

use std::io::Write;

use super::PitchRenderer;
use crate::config::{AsciiConfig, MIN_GRID_CELLS};
use crate::error::{RenderError, RenderResult};
use crate::markings::MarkingKind;
use crate::pitch::Point3D;
use crate::scene::{AxisLimits, PitchScene};

const GRASS: char = ' ';
/// Two or more players projected onto one cell
const CROWDED: char = '@';

fn glyph(kind: MarkingKind) -> char {
    match kind {
        MarkingKind::Surface | MarkingKind::Boundary => '#',
        MarkingKind::HalfwayLine => '-',
        MarkingKind::CenterCircle => 'o',
        MarkingKind::PenaltyArea => '+',
        MarkingKind::GoalArea => '=',
    }
}

struct Canvas {
    columns: usize,
    rows: usize,
    x_limits: AxisLimits,
    y_limits: AxisLimits,
    cells: Vec<char>,
    occupied: Vec<bool>,
}

impl Canvas {
    fn new(columns: usize, rows: usize, x_limits: AxisLimits, y_limits: AxisLimits) -> Self {
        Self {
            columns,
            rows,
            x_limits,
            y_limits,
            cells: vec![GRASS; columns * rows],
            occupied: vec![false; columns * rows],
        }
    }

    /// Grid index of a world point, or None when it falls outside the axes
    fn cell_of(&self, p: &Point3D) -> Option<usize> {
        let fx = (p.x - self.x_limits.min) / self.x_limits.span();
        let fy = (p.y - self.y_limits.min) / self.y_limits.span();
        if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
            return None;
        }
        let col = (fx * (self.columns - 1) as f32).round() as usize;
        let row_from_bottom = (fy * (self.rows - 1) as f32).round() as usize;
        let row = self.rows - 1 - row_from_bottom;
        Some(row * self.columns + col)
    }

    /// Markings drawn earlier keep their cell
    fn plot(&mut self, p: &Point3D, c: char) {
        if let Some(idx) = self.cell_of(p) {
            if !self.occupied[idx] && self.cells[idx] == GRASS {
                self.cells[idx] = c;
            }
        }
    }

    /// Sample the segment densely enough to leave no gaps between cells
    fn line(&mut self, a: &Point3D, b: &Point3D, c: char) {
        let cols = (b.x - a.x).abs() / self.x_limits.span() * self.columns as f32;
        let rows = (b.y - a.y).abs() / self.y_limits.span() * self.rows as f32;
        let steps = cols.max(rows).ceil().max(1.0) as usize * 2;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = a + (b - a) * t;
            self.plot(&p, c);
        }
    }

    fn player(&mut self, p: &Point3D, number: usize) {
        if let Some(idx) = self.cell_of(p) {
            self.cells[idx] = if self.occupied[idx] {
                CROWDED
            } else {
                char::from_digit((number % 10) as u32, 10).unwrap_or(CROWDED)
            };
            self.occupied[idx] = true;
        }
    }

    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().collect::<String>())
    }
}

/// Character-grid renderer for terminals
pub struct AsciiRenderer<W: Write> {
    writer: W,
    config: AsciiConfig,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(writer: W, config: AsciiConfig) -> Self {
        Self { writer, config }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PitchRenderer for AsciiRenderer<W> {
    fn render(&mut self, scene: &PitchScene) -> RenderResult<()> {
        let AsciiConfig { columns, rows } = self.config;
        if columns < MIN_GRID_CELLS || rows < MIN_GRID_CELLS {
            return Err(RenderError::ViewportTooSmall { columns, rows });
        }

        let mut canvas = Canvas::new(columns, rows, scene.x_axis.limits, scene.y_axis.limits);
        for marking in &scene.markings {
            let c = glyph(marking.kind);
            for (a, b) in marking.segments() {
                canvas.line(a, b, c);
            }
        }
        for marker in &scene.players {
            canvas.player(&marker.position, marker.number);
        }

        writeln!(self.writer, "{}", scene.title)?;
        for row in canvas.rows() {
            writeln!(self.writer, "{}", row)?;
        }
        writeln!(
            self.writer,
            "x: {} [{}..{}] →   y: {} [{}..{}] ↑",
            scene.x_axis.label,
            scene.x_axis.limits.min,
            scene.x_axis.limits.max,
            scene.y_axis.label,
            scene.y_axis.limits.min,
            scene.y_axis.limits.max
        )?;
        for marker in &scene.players {
            writeln!(
                self.writer,
                "{:>3}  x={:>5.1}  y={:>5.1}",
                marker.number, marker.position.x, marker.position.y
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ascii"
    }
}
