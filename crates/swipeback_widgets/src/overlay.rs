//! Scrim and shadow drawn over the uncovered screen area

use swipeback_paint::{Color, Drawable, PaintContext, Rect};

const FULL_ALPHA: f32 = 255.0;

/// Scale the alpha byte of an ARGB color by `opacity`, keeping RGB
pub fn scrim_color_for(base: u32, opacity: f32) -> u32 {
    let base_alpha = (base & 0xFF00_0000) >> 24;
    let alpha = (base_alpha as f32 * opacity) as u32;
    (alpha << 24) | (base & 0x00FF_FFFF)
}

/// Draw the shadow just left of the content's leading edge
pub fn draw_shadow(
    ctx: &mut PaintContext,
    shadow: &dyn Drawable,
    content_left: i32,
    content_top: i32,
    content_height: i32,
    opacity: f32,
) {
    let left = content_left as f32;
    let bounds = Rect::from_ltrb(
        left - shadow.intrinsic_width(),
        content_top as f32,
        left,
        (content_top + content_height) as f32,
    );
    let alpha = (opacity * FULL_ALPHA) as u8;
    shadow.draw(ctx, bounds, alpha);
}

/// Fill the strip between the screen's left edge and the content with the scrim
pub fn draw_scrim(
    ctx: &mut PaintContext,
    scrim_color: u32,
    content_left: i32,
    container_height: i32,
    opacity: f32,
) {
    let clip = Rect::new(0.0, 0.0, content_left as f32, container_height as f32);
    let color = Color::from_argb(scrim_color_for(scrim_color, opacity));
    ctx.push_clip(clip);
    ctx.fill_rect(clip, color);
    ctx.pop_clip();
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipeback_paint::{EdgeShadow, FillStyle, PaintCommand};

    #[test]
    fn test_scrim_color_scales_alpha_only() {
        assert_eq!(scrim_color_for(0x9900_0000, 1.0), 0x9900_0000);
        assert_eq!(scrim_color_for(0x9900_0000, 0.5), 0x4C00_0000);
        assert_eq!(scrim_color_for(0xFF00_00FF, 0.0), 0x0000_00FF);
        assert_eq!(scrim_color_for(0x80AB_CDEF, 0.25), 0x20AB_CDEF);
    }

    #[test]
    fn test_scrim_is_clipped_to_uncovered_area() {
        let mut ctx = PaintContext::new();
        draw_scrim(&mut ctx, 0x9900_0000, 250, 800, 0.75);

        let clip = Rect::new(0.0, 0.0, 250.0, 800.0);
        assert_eq!(ctx.commands().len(), 3);
        assert_eq!(ctx.commands()[0], PaintCommand::PushClip { rect: clip });
        let PaintCommand::FillRect {
            style: FillStyle::Color(color),
            ..
        } = &ctx.commands()[1]
        else {
            panic!("expected a color fill");
        };
        assert_eq!(color.to_argb(), 0x7200_0000);
        assert_eq!(ctx.commands()[2], PaintCommand::PopClip);
    }

    #[test]
    fn test_shadow_sits_left_of_content() {
        let mut ctx = PaintContext::new();
        draw_shadow(&mut ctx, &EdgeShadow::new(14.0), 300, 0, 800, 0.5);

        let PaintCommand::FillRect { rect, .. } = &ctx.commands()[0] else {
            panic!("expected a fill");
        };
        assert_eq!(*rect, Rect::from_ltrb(286.0, 0.0, 300.0, 800.0));
    }
}
