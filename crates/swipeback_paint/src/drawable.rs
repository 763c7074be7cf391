//! Drawables with an intrinsic size

use crate::color::Color;
use crate::context::PaintContext;
use crate::gradient::Gradient;
use crate::primitives::{Point, Rect};

/// Default shadow width in dp
pub const EDGE_SHADOW_WIDTH_DP: f32 = 14.0;

/// Darkest shadow color, at the content edge
const EDGE_SHADOW_COLOR: u32 = 0x4400_0000;

/// Something that can paint itself into given bounds
pub trait Drawable {
    /// Natural width in pixels
    fn intrinsic_width(&self) -> f32;

    /// Paint into `bounds` with an overall alpha (0-255)
    fn draw(&self, ctx: &mut PaintContext, bounds: Rect, alpha: u8);
}

/// Horizontal gradient strip cast by the sliding content onto the screen below
///
/// Fades from transparent on its left to dark at its right, where the
/// content edge sits.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShadow {
    width: f32,
    color: Color,
}

impl EdgeShadow {
    pub fn new(width: f32) -> Self {
        Self {
            width: width.max(0.0),
            color: Color::from_argb(EDGE_SHADOW_COLOR),
        }
    }

    /// Shadow sized for a display density
    pub fn for_density(density: f32) -> Self {
        Self::new(EDGE_SHADOW_WIDTH_DP * density)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Drawable for EdgeShadow {
    fn intrinsic_width(&self) -> f32 {
        self.width
    }

    fn draw(&self, ctx: &mut PaintContext, bounds: Rect, alpha: u8) {
        if bounds.is_empty() || alpha == 0 {
            return;
        }
        let gradient = Gradient::linear_simple(
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
            self.color.with_alpha(0.0),
            self.color,
        )
        .modulate_alpha(alpha);
        ctx.fill_rect(bounds, gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{FillStyle, PaintCommand};

    #[test]
    fn test_width_scales_with_density() {
        assert_eq!(EdgeShadow::for_density(2.0).intrinsic_width(), 28.0);
        assert_eq!(EdgeShadow::new(-3.0).intrinsic_width(), 0.0);
    }

    #[test]
    fn test_draw_fills_bounds() {
        let shadow = EdgeShadow::new(14.0);
        let mut ctx = PaintContext::new();
        let bounds = Rect::from_ltrb(86.0, 0.0, 100.0, 500.0);
        shadow.draw(&mut ctx, bounds, 255);

        let [PaintCommand::FillRect { rect, style }] = ctx.commands() else {
            panic!("expected a single fill");
        };
        assert_eq!(*rect, bounds);
        let FillStyle::Gradient(gradient) = style else {
            panic!("expected a gradient fill");
        };
        let stops = gradient.stops();
        assert_eq!(stops[0].color.a, 0.0);
        assert_eq!(stops[1].color.to_argb(), 0x4400_0000);
    }

    #[test]
    fn test_transparent_draw_records_nothing() {
        let mut ctx = PaintContext::new();
        EdgeShadow::new(14.0).draw(&mut ctx, Rect::new(0.0, 0.0, 14.0, 10.0), 0);
        assert!(ctx.commands().is_empty());
    }
}
