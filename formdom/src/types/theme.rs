use super::color::oklch_to_rgb;
use crate::types::{Color, Rgb};

/// Variables may point at other variables; resolution gives up past this depth.
const MAX_VAR_DEPTH: usize = 8;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// The variables form controls draw with.
pub struct DefaultTheme {
    pub foreground: Color,
    pub muted: Color,
    pub control_border: Color,
    pub control_checked: Color,
    pub control_disabled: Color,
    pub control_outline: Color,
    pub text_disabled: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            foreground: Color::oklch(1.0, 0.0, 0.0),
            muted: Color::oklch(0.7, 0.0, 0.0),
            control_border: Color::oklch(0.6, 0.01, 250.0),
            control_checked: Color::oklch(0.62, 0.17, 250.0),
            control_disabled: Color::oklch(0.4, 0.0, 0.0),
            control_outline: Color::oklch(0.75, 0.12, 250.0),
            text_disabled: Color::oklch(0.45, 0.0, 0.0),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "foreground" => Some(&self.foreground),
            "muted" => Some(&self.muted),
            "control.border" => Some(&self.control_border),
            "control.checked" => Some(&self.control_checked),
            "control.disabled" => Some(&self.control_disabled),
            "control.outline" => Some(&self.control_outline),
            "text.disabled" => Some(&self.text_disabled),
            _ => None,
        }
    }
}

/// Resolves colors against a theme down to terminal RGB.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Unknown variables resolve to black.
    pub fn rgb(&self, color: &Color) -> Rgb {
        let mut current = color;
        for _ in 0..MAX_VAR_DEPTH {
            match current {
                Color::Rgb(rgb) => return *rgb,
                Color::Oklch { l, c, h } => return oklch_to_rgb(*l, *c, *h),
                Color::Var(name) => match self.theme.resolve(name) {
                    Some(next) => current = next,
                    None => {
                        log::trace!("unresolved color variable {name}");
                        return Rgb::default();
                    }
                },
            }
        }
        log::warn!("color variable chain too deep: {color:?}");
        Rgb::default()
    }
}
