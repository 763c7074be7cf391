//! Paint context - the recording canvas

use smallvec::SmallVec;

use crate::color::Color;
use crate::gradient::Gradient;
use crate::primitives::Rect;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect { rect: Rect, style: FillStyle },
    PushClip { rect: Rect },
    PopClip,
}

/// Records drawing commands for one frame
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_stack: SmallVec<[Rect; 4]>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_rect(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            style: style.into(),
        });
    }

    /// Current clip, if any
    pub fn clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(PaintCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
            return;
        }
        self.commands.push(PaintCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        let clip = Rect::new(0.0, 0.0, 100.0, 200.0);
        ctx.push_clip(clip);
        ctx.fill_rect(clip, Color::BLACK);
        ctx.pop_clip();

        assert_eq!(
            ctx.commands(),
            &[
                PaintCommand::PushClip { rect: clip },
                PaintCommand::FillRect {
                    rect: clip,
                    style: FillStyle::Color(Color::BLACK),
                },
                PaintCommand::PopClip,
            ]
        );
        assert_eq!(ctx.clip(), None);
        assert_eq!(ctx.take_commands().len(), 3);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut ctx = PaintContext::new();
        ctx.pop_clip();
        assert!(ctx.commands().is_empty());
    }
}
