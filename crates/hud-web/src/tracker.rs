//! Mounts the ring visualizer onto the tracker card's canvas.

use crate::canvas::CanvasPainter;
use crate::dom::{self, DomHost, EventListener, Timeout};
use crate::frame::{self, FrameContext, LoopHandle};
use crate::markup::{CANVAS_ID, CANVAS_WRAP_ID, LIVE_DOT_ID};
use hud_core::{AnimatedRingVisualizer, TrackerProps, VisualizerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Tracker {
    ctx: Rc<RefCell<FrameContext>>,
    loop_handle: LoopHandle,
    resize: EventListener,
    first_measure: Option<Timeout>,
}

impl Tracker {
    pub fn mount(
        document: &web::Document,
        props: &TrackerProps,
        seed: Option<u64>,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let container = document
            .get_element_by_id(CANVAS_WRAP_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_WRAP_ID))?;

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut visualizer = AnimatedRingVisualizer::new(VisualizerConfig::default(), &mut rng)?;
        visualizer.set_props(props);
        visualizer.mount();

        let ctx = Rc::new(RefCell::new(FrameContext {
            visualizer,
            painter: CanvasPainter::new(canvas)?,
            host: DomHost::new(container),
            live_dot: dom::html_element(document, LIVE_DOT_ID),
        }));

        let ctx_resize = ctx.clone();
        let resize = EventListener::attach(window.as_ref(), "resize", move || {
            ctx_resize.borrow_mut().remeasure();
        });
        // Layout may not have settled on the mount tick.
        let ctx_measure = ctx.clone();
        let first_measure = Timeout::schedule(0, move || {
            ctx_measure.borrow_mut().remeasure();
        });

        let loop_handle = frame::start_loop(ctx.clone());
        log::info!("tracker mounted");
        Ok(Self {
            ctx,
            loop_handle,
            resize,
            first_measure,
        })
    }

    pub fn set_props(&self, props: &TrackerProps) {
        self.ctx.borrow_mut().visualizer.set_props(props);
    }

    pub fn toggle_legend(&self) -> bool {
        self.ctx.borrow_mut().visualizer.toggle_legend()
    }

    pub fn hide_legend(&self) {
        self.ctx.borrow_mut().visualizer.hide_legend();
    }

    /// Stop the loop, unsubscribe from resize and free the particle field.
    pub fn unmount(&mut self) {
        if self.loop_handle.stop() {
            log::info!("tracker unmounted");
        }
        self.resize.detach();
        self.first_measure.take();
        self.ctx.borrow_mut().visualizer.unmount();
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.unmount();
    }
}
