//! Per-screen swipe-back configuration
//!
//! A [`SwipeBackPage`] is created with its screen and configured right
//! away, before the screen's content exists. Once the host has built the
//! content it calls [`SwipeBackPage::on_post_create`], which attaches a
//! [`SwipeBackLayout`] and applies everything configured so far. Later
//! configuration goes straight to the layout.

use std::rc::Rc;

use swipeback_core::error::{check_edge_percent, check_sensitivity, check_threshold};
use swipeback_core::{DisplayMetrics, DragState, EdgeFlags, Result};

use crate::host::{ContentPane, HostScreen, RedrawRequester};
use crate::layout::{SwipeBackLayout, DEFAULT_SCRIM_COLOR, DEFAULT_SCROLL_THRESHOLD};
use crate::listener::SwipeListener;

/// Simplified progress callbacks for application code
pub trait PageSwipeListener {
    /// The content moved; `px` is its left edge
    fn on_scroll(&self, percent: f32, px: i32);

    /// A swipe started at the edge
    fn on_edge_touch(&self);

    /// The content slid out and the screen is closing
    fn on_scroll_to_close(&self);
}

/// Forwards container events to a [`PageSwipeListener`]
struct PageListenerAdapter {
    inner: Rc<dyn PageSwipeListener>,
}

impl SwipeListener for PageListenerAdapter {
    fn on_scroll_state_change(&self, _state: DragState, _scroll_percent: f32) {}

    fn on_edge_touch(&self, _edge: EdgeFlags) {
        self.inner.on_edge_touch();
    }

    fn on_scroll_over_threshold(&self) {}

    fn on_scroll(&self, scroll_percent: f32, offset_px: i32) {
        self.inner.on_scroll(scroll_percent, offset_px);
    }

    fn on_scroll_to_close(&self) {
        self.inner.on_scroll_to_close();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum EdgeSize {
    /// Half the display width
    Default,
    Pixels(i32),
    Percent(f32),
}

/// Swipe-back settings and container for one screen
pub struct SwipeBackPage {
    metrics: DisplayMetrics,
    enabled: bool,
    edge: EdgeSize,
    sensitivity: Option<f32>,
    scrim_color: u32,
    close_percent: f32,
    listeners: Vec<(Rc<dyn PageSwipeListener>, Rc<dyn SwipeListener>)>,
    layout: Option<SwipeBackLayout>,
}

impl SwipeBackPage {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            metrics,
            enabled: true,
            edge: EdgeSize::Default,
            sensitivity: None,
            scrim_color: DEFAULT_SCRIM_COLOR,
            close_percent: DEFAULT_SCROLL_THRESHOLD,
            listeners: Vec::new(),
            layout: None,
        }
    }

    /// Build the container around the screen's content and apply the settings
    pub fn on_post_create(
        &mut self,
        screen: &Rc<dyn HostScreen>,
        content: Rc<dyn ContentPane>,
        redraw: Rc<dyn RedrawRequester>,
    ) -> Result<&mut SwipeBackLayout> {
        if self.layout.is_some() {
            tracing::warn!("swipe-back page attached twice, replacing its layout");
        }
        let mut layout = SwipeBackLayout::attach(screen, content, redraw, self.metrics);
        layout.set_enable_gesture(self.enabled);
        layout.set_scrim_color(self.scrim_color);
        layout.set_scroll_threshold(self.close_percent)?;
        if let Some(sensitivity) = self.sensitivity {
            layout.set_sensitivity(sensitivity)?;
        }
        match self.edge {
            EdgeSize::Default => {}
            EdgeSize::Pixels(size) => layout.set_edge_size(size),
            EdgeSize::Percent(percent) => layout.set_edge_size_percent(percent)?,
        }
        for (_, adapter) in &self.listeners {
            layout.add_swipe_listener(adapter.clone());
        }
        Ok(self.layout.insert(layout))
    }

    pub fn is_attached(&self) -> bool {
        self.layout.is_some()
    }

    pub fn layout(&self) -> Option<&SwipeBackLayout> {
        self.layout.as_ref()
    }

    pub fn layout_mut(&mut self) -> Option<&mut SwipeBackLayout> {
        self.layout.as_mut()
    }

    pub fn set_swipe_back_enable(&mut self, enable: bool) -> &mut Self {
        self.enabled = enable;
        if let Some(layout) = &mut self.layout {
            layout.set_enable_gesture(enable);
        }
        self
    }

    pub fn is_swipe_back_enabled(&self) -> bool {
        self.enabled
    }

    /// Edge zone width in pixels
    pub fn set_swipe_edge(&mut self, size: i32) -> &mut Self {
        self.edge = EdgeSize::Pixels(size);
        if let Some(layout) = &mut self.layout {
            layout.set_edge_size(size);
        }
        self
    }

    /// Edge zone width as a fraction of the display width, in `(0, 1]`
    pub fn set_swipe_edge_percent(&mut self, percent: f32) -> Result<&mut Self> {
        let percent = check_edge_percent(percent)?;
        self.edge = EdgeSize::Percent(percent);
        if let Some(layout) = &mut self.layout {
            layout.set_edge_size_percent(percent)?;
        }
        Ok(self)
    }

    /// Drag sensitivity in `(0, 1]`
    pub fn set_swipe_sensitivity(&mut self, sensitivity: f32) -> Result<&mut Self> {
        let sensitivity = check_sensitivity(sensitivity)?;
        self.sensitivity = Some(sensitivity);
        if let Some(layout) = &mut self.layout {
            layout.set_sensitivity(sensitivity)?;
        }
        Ok(self)
    }

    /// Scrim color in 0xAARRGGBB
    pub fn set_scrim_color(&mut self, color: u32) -> &mut Self {
        self.scrim_color = color;
        if let Some(layout) = &mut self.layout {
            layout.set_scrim_color(color);
        }
        self
    }

    pub fn scrim_color(&self) -> u32 {
        self.scrim_color
    }

    /// Progress past which a slow release closes the screen, in `(0, 1)`
    pub fn set_close_percent(&mut self, percent: f32) -> Result<&mut Self> {
        let percent = check_threshold(percent)?;
        self.close_percent = percent;
        if let Some(layout) = &mut self.layout {
            layout.set_scroll_threshold(percent)?;
        }
        Ok(self)
    }

    pub fn close_percent(&self) -> f32 {
        self.close_percent
    }

    pub fn add_listener(&mut self, listener: Rc<dyn PageSwipeListener>) -> &mut Self {
        let adapter: Rc<dyn SwipeListener> = Rc::new(PageListenerAdapter {
            inner: listener.clone(),
        });
        if let Some(layout) = &mut self.layout {
            layout.add_swipe_listener(adapter.clone());
        }
        self.listeners.push((listener, adapter));
        self
    }

    /// Remove the first registration of `listener`
    pub fn remove_listener(&mut self, listener: &Rc<dyn PageSwipeListener>) -> &mut Self {
        let target = Rc::as_ptr(listener) as *const ();
        if let Some(index) = self
            .listeners
            .iter()
            .position(|(l, _)| Rc::as_ptr(l) as *const () == target)
        {
            let (_, adapter) = self.listeners.remove(index);
            if let Some(layout) = &mut self.layout {
                layout.remove_swipe_listener(&adapter);
            }
        }
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Slide the content out and dismiss the screen
    ///
    /// Returns false if the page has no container yet.
    pub fn scroll_to_finish_screen(&mut self, now_ms: u64) -> bool {
        match &mut self.layout {
            Some(layout) => {
                layout.scroll_to_finish_screen(now_ms);
                true
            }
            None => {
                tracing::debug!("scroll_to_finish_screen before the page was attached");
                false
            }
        }
    }
}

impl std::fmt::Debug for SwipeBackPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeBackPage")
            .field("enabled", &self.enabled)
            .field("edge", &self.edge)
            .field("sensitivity", &self.sensitivity)
            .field("scrim_color", &format_args!("{:#010x}", self.scrim_color))
            .field("close_percent", &self.close_percent)
            .field("listeners", &self.listeners.len())
            .field("attached", &self.layout.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_edge_setter_wins() {
        let mut page = SwipeBackPage::new(DisplayMetrics::default());
        assert_eq!(page.edge, EdgeSize::Default);

        page.set_swipe_edge_percent(0.2).unwrap().set_swipe_edge(64);
        assert_eq!(page.edge, EdgeSize::Pixels(64));

        page.set_swipe_edge_percent(0.4).unwrap();
        assert_eq!(page.edge, EdgeSize::Percent(0.4));
    }

    #[test]
    fn test_rejected_value_is_not_stored() {
        let mut page = SwipeBackPage::new(DisplayMetrics::default());
        assert!(page.set_swipe_sensitivity(2.0).is_err());
        assert_eq!(page.sensitivity, None);
        assert!(!page.is_attached());
        assert!(!page.scroll_to_finish_screen(0));
    }
}
