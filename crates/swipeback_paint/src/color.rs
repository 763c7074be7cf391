//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a packed 0xAARRGGBB value
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            (argb >> 24) as u8,
        )
    }

    /// Pack into 0xAARRGGBB
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Scale alpha by an 8-bit factor, 255 leaving it unchanged
    pub fn modulate_alpha(self, alpha: u8) -> Self {
        self.with_alpha(self.a * f32::from(alpha) / 255.0)
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let scrim = Color::from_argb(0x9900_0000);
        assert_eq!(scrim.to_rgba8(), [0, 0, 0, 0x99]);
        assert_eq!(scrim.to_argb(), 0x9900_0000);

        let blue = Color::from_argb(0xFF00_00FF);
        assert_eq!(blue, Color::BLUE);
    }

    #[test]
    fn test_modulate_alpha() {
        let half = Color::BLACK.modulate_alpha(128);
        assert_eq!(half.to_rgba8()[3], 128);
        assert_eq!(Color::BLACK.modulate_alpha(0).a, 0.0);
        assert_eq!(Color::WHITE.modulate_alpha(255), Color::WHITE);
    }
}
