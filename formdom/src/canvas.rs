//! Owner-drawn vector graphics on a braille dot grid.
//!
//! A [`Graphic`] is a small scene of stroked circles in its own view-box
//! coordinates. Rasterizing maps the view box onto a grid of dots (2×4 per
//! terminal cell); a dot is lit by a circle when its center falls inside the
//! circle's stroke. Circles are painted in order, so a later circle owns the
//! dots it shares with an earlier one.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::types::{Color, ColorContext, TextStyle};

/// Braille bit for the dot at (column, row) within a cell.
const BRAILLE_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];
const BRAILLE_BASE: u32 = 0x2800;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub stroke_width: f32,
    /// `None` paints nothing (a transparent stroke).
    pub stroke: Option<Color>,
}

impl Circle {
    pub fn new(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            cx,
            cy,
            r,
            stroke_width: 1.0,
            stroke: None,
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn stroke(mut self, color: Option<Color>) -> Self {
        self.stroke = color;
        self
    }

    /// Whether the point lies inside this circle's stroke.
    pub fn covers(&self, x: f32, y: f32) -> bool {
        let d = ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt();
        (d - self.r).abs() <= self.stroke_width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub view_box: (f32, f32),
    pub circles: Vec<Circle>,
}

impl Graphic {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_box: (width, height),
            circles: Vec::new(),
        }
    }

    pub fn circle(mut self, circle: Circle) -> Self {
        self.circles.push(circle);
        self
    }

    /// Rasterize onto a `dots_w` × `dots_h` grid.
    pub fn rasterize(&self, dots_w: u16, dots_h: u16) -> DotGrid {
        let mut grid = DotGrid::new(dots_w, dots_h);
        if dots_w == 0 || dots_h == 0 {
            return grid;
        }

        let sx = self.view_box.0 / f32::from(dots_w);
        let sy = self.view_box.1 / f32::from(dots_h);

        for (layer, circle) in self.circles.iter().enumerate() {
            if circle.stroke.is_none() {
                continue;
            }
            for y in 0..dots_h {
                for x in 0..dots_w {
                    let px = (f32::from(x) + 0.5) * sx;
                    let py = (f32::from(y) + 0.5) * sy;
                    if circle.covers(px, py) {
                        grid.light(x, y, layer);
                    }
                }
            }
        }

        grid
    }

    /// Paint into `area` of the buffer as braille cells.
    /// Cells without lit dots are left untouched.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, colors: &ColorContext) {
        let grid = self.rasterize(area.width.saturating_mul(2), area.height.saturating_mul(4));

        for row in 0..area.height {
            for col in 0..area.width {
                let Some((pattern, layer)) = grid.cell(col, row) else {
                    continue;
                };
                let Some(stroke) = self.circles.get(layer).and_then(|c| c.stroke.as_ref()) else {
                    continue;
                };
                let (x, y) = (area.x.saturating_add(col), area.y.saturating_add(row));
                buf.put(x, y, braille(pattern), colors.rgb(stroke), TextStyle::new());
            }
        }
    }
}

/// Braille character for an 8-bit dot pattern.
pub fn braille(pattern: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(pattern)).unwrap_or(' ')
}

/// Result of rasterizing a [`Graphic`]: which layer, if any, lit each dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGrid {
    width: u16,
    height: u16,
    dots: Vec<Option<usize>>,
}

impl DotGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            dots: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn light(&mut self, x: u16, y: u16, layer: usize) {
        let idx = self.index(x, y);
        self.dots[idx] = Some(layer);
    }

    /// Index of the circle that owns the dot, if lit.
    pub fn layer(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            self.dots[self.index(x, y)]
        } else {
            None
        }
    }

    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        self.layer(x, y).is_some()
    }

    pub fn lit_count(&self) -> usize {
        self.dots.iter().filter(|d| d.is_some()).count()
    }

    /// Dots owned by one layer.
    pub fn layer_count(&self, layer: usize) -> usize {
        self.dots.iter().filter(|d| **d == Some(layer)).count()
    }

    /// Braille pattern and top layer of the 2×4 block behind cell (col, row).
    /// None when no dot in the block is lit.
    pub fn cell(&self, col: u16, row: u16) -> Option<(u8, usize)> {
        let mut pattern = 0u8;
        let mut top: Option<usize> = None;

        for (dx, bits) in BRAILLE_BITS.iter().enumerate() {
            for (dy, bit) in bits.iter().enumerate() {
                let x = col.saturating_mul(2).saturating_add(dx as u16);
                let y = row.saturating_mul(4).saturating_add(dy as u16);
                if let Some(layer) = self.layer(x, y) {
                    pattern |= bit;
                    top = Some(top.map_or(layer, |t| t.max(layer)));
                }
            }
        }

        top.map(|layer| (pattern, layer))
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}
