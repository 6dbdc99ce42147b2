// File: crates/spot-core/src/theme.rs
// Summary: Light/Dark surface colors used by renderers around the plot canvas.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub canvas: Color,
    pub border: Color,
    pub label: Color,
    pub title: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            canvas: Color::from_argb(255, 255, 255, 255),
            border: Color::GRAY,
            label: Color::from_argb(255, 20, 20, 30),
            title: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            canvas: Color::from_argb(255, 28, 28, 32),
            border: Color::from_argb(255, 180, 180, 190),
            label: Color::from_argb(255, 235, 235, 245),
            title: Color::from_argb(255, 250, 250, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}
