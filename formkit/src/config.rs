//! Rendering configuration shared by form controls.

/// How the owner-drawn part of a control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlGlyphs {
    /// Vector circles rasterized onto braille dots.
    #[default]
    Braille,
    /// One character per state, for terminals without braille glyphs.
    Symbols { checked: char, unchecked: char },
}

impl ControlGlyphs {
    /// Symbol glyphs with the default `◉` / `◯` pair.
    pub const fn symbols() -> Self {
        Self::Symbols {
            checked: '◉',
            unchecked: '◯',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Width of the drawn control in cells.
    pub control_width: u16,

    /// Height of the drawn control in cells.
    pub control_height: u16,

    pub glyphs: ControlGlyphs,

    /// Blank cells between the options of a group.
    pub gap: u16,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            control_width: 4,
            control_height: 2,
            glyphs: ControlGlyphs::Braille,
            gap: 0,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the control size in cells. Zero sizes are bumped to one.
    pub fn control_size(mut self, width: u16, height: u16) -> Self {
        self.control_width = width.max(1);
        self.control_height = height.max(1);
        self
    }

    pub fn glyphs(mut self, glyphs: ControlGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Draw controls as single symbols in a one-cell box.
    pub fn compact(self) -> Self {
        self.glyphs(ControlGlyphs::symbols()).control_size(1, 1)
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }
}
