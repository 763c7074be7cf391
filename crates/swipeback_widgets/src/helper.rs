//! Stack of swipe-back pages, one per live screen

use std::rc::Rc;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use swipeback_core::DisplayMetrics;

use crate::host::{ContentPane, HostScreen, RedrawRequester};
use crate::page::SwipeBackPage;

new_key_type! {
    /// Handle to a page owned by a [`SwipeBackHelper`]
    pub struct PageId;
}

/// Host-assigned screen identifier
pub type ScreenId = u64;

/// Tracks the swipe-back page of every open screen
///
/// Screens are pushed in creation order; the most recently created one that
/// is still alive is the current page.
#[derive(Debug)]
pub struct SwipeBackHelper {
    metrics: DisplayMetrics,
    pages: SlotMap<PageId, SwipeBackPage>,
    by_screen: FxHashMap<ScreenId, PageId>,
    stack: Vec<PageId>,
}

impl SwipeBackHelper {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            metrics,
            pages: SlotMap::with_key(),
            by_screen: FxHashMap::default(),
            stack: Vec::new(),
        }
    }

    /// Create the page for a new screen
    ///
    /// A screen created twice keeps its first page.
    pub fn on_create(&mut self, screen_id: ScreenId) -> &mut SwipeBackPage {
        let id = match self.by_screen.get(&screen_id) {
            Some(&id) => id,
            None => {
                let id = self.pages.insert(SwipeBackPage::new(self.metrics));
                self.by_screen.insert(screen_id, id);
                self.stack.push(id);
                tracing::debug!(screen_id, pages = self.stack.len(), "swipe-back page created");
                id
            }
        };
        &mut self.pages[id]
    }

    /// Attach the container once the screen's content exists
    ///
    /// Returns `Ok(None)` when the screen has no page.
    pub fn on_post_create(
        &mut self,
        screen_id: ScreenId,
        screen: &Rc<dyn HostScreen>,
        content: Rc<dyn ContentPane>,
        redraw: Rc<dyn RedrawRequester>,
    ) -> swipeback_core::Result<Option<&mut SwipeBackPage>> {
        let Some(page) = self.get_page(screen_id) else {
            tracing::debug!(screen_id, "on_post_create for unknown screen");
            return Ok(None);
        };
        page.on_post_create(screen, content, redraw)?;
        Ok(Some(page))
    }

    /// Page of the most recently created live screen
    pub fn get_current_page(&mut self) -> Option<&mut SwipeBackPage> {
        let id = *self.stack.last()?;
        self.pages.get_mut(id)
    }

    pub fn get_page(&mut self, screen_id: ScreenId) -> Option<&mut SwipeBackPage> {
        let id = *self.by_screen.get(&screen_id)?;
        self.pages.get_mut(id)
    }

    /// Forget a destroyed screen's page
    pub fn on_destroy(&mut self, screen_id: ScreenId) -> Option<SwipeBackPage> {
        let id = self.by_screen.remove(&screen_id)?;
        self.stack.retain(|&p| p != id);
        tracing::debug!(screen_id, pages = self.stack.len(), "swipe-back page destroyed");
        self.pages.remove(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_is_latest() {
        let mut helper = SwipeBackHelper::new(DisplayMetrics::default());
        helper.on_create(1).set_scrim_color(0xFF00_0001);
        helper.on_create(2).set_scrim_color(0xFF00_0002);
        assert_eq!(helper.page_count(), 2);

        assert_eq!(helper.get_current_page().unwrap().scrim_color(), 0xFF00_0002);

        helper.on_destroy(2).unwrap();
        assert_eq!(helper.page_count(), 1);
        assert_eq!(helper.get_current_page().unwrap().scrim_color(), 0xFF00_0001);
    }

    #[test]
    fn test_create_twice_keeps_page() {
        let mut helper = SwipeBackHelper::new(DisplayMetrics::default());
        helper.on_create(7).set_close_percent(0.5).unwrap();
        let page = helper.on_create(7);
        assert_eq!(page.close_percent(), 0.5);
        assert_eq!(helper.page_count(), 1);
    }

    #[test]
    fn test_destroy_unknown_screen() {
        let mut helper = SwipeBackHelper::new(DisplayMetrics::default());
        assert!(helper.on_destroy(3).is_none());
        assert!(helper.get_current_page().is_none());
        assert!(helper.get_page(3).is_none());
    }
}
