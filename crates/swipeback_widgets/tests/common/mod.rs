//! Host fakes shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipeback_animation::FrameScheduler;
use swipeback_core::{DisplayMetrics, DragState, EdgeFlags, MotionEvent};
use swipeback_paint::EdgeShadow;
use swipeback_widgets::{ContentPane, HostScreen, RedrawRequester, SwipeBackLayout, SwipeListener};

/// 1000 x 2000 px at density 1: slop 8 px, fling 400..800 px/s, edge zone 500 px
pub const METRICS: DisplayMetrics = DisplayMetrics::new(1000, 2000, 1.0);

#[derive(Default)]
pub struct Screen {
    pub finishing: Cell<bool>,
    pub finish_calls: Cell<u32>,
}

impl HostScreen for Screen {
    fn is_finishing(&self) -> bool {
        self.finishing.get()
    }

    fn finish(&self) {
        self.finish_calls.set(self.finish_calls.get() + 1);
        self.finishing.set(true);
    }
}

pub struct Pane {
    pub width: i32,
    pub height: i32,
    pub frame: Cell<(i32, i32, i32, i32)>,
}

impl Pane {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            frame: Cell::new((0, 0, width, height)),
        }
    }
}

impl ContentPane for Pane {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn layout(&self, left: i32, top: i32, right: i32, bottom: i32) {
        self.frame.set((left, top, right, bottom));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    State(DragState, f32),
    Edge(EdgeFlags),
    OverThreshold,
    Close,
}

#[derive(Default)]
pub struct Recorder {
    pub events: RefCell<Vec<Event>>,
    pub scrolls: Cell<usize>,
}

impl Recorder {
    pub fn count(&self, event: &Event) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn states(&self) -> Vec<DragState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::State(state, _) => Some(*state),
                _ => None,
            })
            .collect()
    }
}

impl SwipeListener for Recorder {
    fn on_scroll_state_change(&self, state: DragState, scroll_percent: f32) {
        self.events
            .borrow_mut()
            .push(Event::State(state, scroll_percent));
    }

    fn on_edge_touch(&self, edge: EdgeFlags) {
        self.events.borrow_mut().push(Event::Edge(edge));
    }

    fn on_scroll_over_threshold(&self) {
        self.events.borrow_mut().push(Event::OverThreshold);
    }

    fn on_scroll(&self, _scroll_percent: f32, _offset_px: i32) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn on_scroll_to_close(&self) {
        self.events.borrow_mut().push(Event::Close);
    }
}

/// A screen wrapped in a swipe-back layout, driven by a frame scheduler
pub struct Fixture {
    pub layout: SwipeBackLayout,
    pub screen: Rc<Screen>,
    pub pane: Rc<Pane>,
    pub scheduler: Rc<FrameScheduler>,
    pub recorder: Rc<Recorder>,
}

impl Fixture {
    /// Content 1000 px wide with a zero-width shadow
    pub fn new() -> Self {
        Self::with_shadow(0.0)
    }

    pub fn with_shadow(shadow_width: f32) -> Self {
        let screen = Rc::new(Screen::default());
        let host: Rc<dyn HostScreen> = screen.clone();
        let pane = Rc::new(Pane::new(1000, 2000));
        let scheduler = Rc::new(FrameScheduler::new(0));
        let redraw: Rc<dyn RedrawRequester> = scheduler.clone();
        let recorder = Rc::new(Recorder::default());

        let mut layout = SwipeBackLayout::attach(&host, pane.clone(), redraw, METRICS);
        layout.set_shadow(Box::new(EdgeShadow::new(shadow_width)));
        layout.add_swipe_listener(recorder.clone());

        Self {
            layout,
            screen,
            pane,
            scheduler,
            recorder,
        }
    }

    pub fn touch(&mut self, event: MotionEvent) -> bool {
        self.scheduler.advance_to(event.event_time());
        self.layout.on_touch_event(&event)
    }

    pub fn intercept(&mut self, event: MotionEvent) -> bool {
        self.scheduler.advance_to(event.event_time());
        self.layout.on_intercept_touch_event(&event)
    }

    /// Press at the edge and move through `(time, x)` points, without lifting
    pub fn drag(&mut self, points: &[(u64, f32)]) {
        self.touch(MotionEvent::down(0, 5.0, 100.0, 0));
        for &(time, x) in points {
            self.touch(MotionEvent::move_to(0, x, 100.0, time));
        }
    }

    pub fn release(&mut self, time: u64, x: f32) {
        self.touch(MotionEvent::up(0, x, 100.0, time));
    }

    /// Drive frames until nothing asks for another
    pub fn run_frames(&mut self) -> usize {
        let layout = &mut self.layout;
        self.scheduler
            .run_until_idle(500, |now| layout.compute_scroll(now))
    }
}
