//! Gradient fills

use crate::color::Color;
use crate::primitives::Point;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
        }
    }

    /// Scale every stop's alpha by an 8-bit factor
    pub fn modulate_alpha(mut self, alpha: u8) -> Self {
        match &mut self {
            Gradient::Linear { stops, .. } => {
                for stop in stops.iter_mut() {
                    stop.color = stop.color.modulate_alpha(alpha);
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulate_alpha_scales_every_stop() {
        let gradient = Gradient::linear_simple(
            Point::ZERO,
            Point::new(10.0, 0.0),
            Color::BLACK.with_alpha(0.0),
            Color::BLACK,
        )
        .modulate_alpha(0);

        assert_eq!(gradient.stops().len(), 2);
        assert!(gradient.stops().iter().all(|s| s.color.a == 0.0));
    }

    #[test]
    fn test_full_alpha_keeps_colors() {
        let gradient =
            Gradient::linear_simple(Point::ZERO, Point::new(0.0, 5.0), Color::WHITE, Color::BLUE)
                .modulate_alpha(255);
        assert_eq!(gradient.stops()[0].color, Color::WHITE);
        assert_eq!(gradient.stops()[1].offset, 1.0);
        assert_eq!(gradient.stops()[1].color, Color::BLUE);
    }
}
