/// Baseline alpha written into every vertex color by the generation pass.
///
/// Vertices start mostly transparent; the runtime fog system raises alpha as
/// their markers are detected.
pub const BASE_ALPHA: f32 = 0.1;

/// Linear RGBA vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white, the color of a vertex with no color data.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Cyan, the default gizmo color.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);

    /// Creates a color from its four channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Forces the alpha channel of every color to [`BASE_ALPHA`], leaving RGB
/// untouched.
pub fn normalize_alpha(colors: &mut [Color]) {
    for color in colors {
        color.a = BASE_ALPHA;
    }
}
