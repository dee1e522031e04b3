use crate::canvas::CanvasPainter;
use crate::dom::DomHost;
use crate::markup;
use hud_core::{AnimatedRingVisualizer, CancelToken, FrameOutcome, LoopControl};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub visualizer: AnimatedRingVisualizer,
    pub painter: CanvasPainter,
    pub host: DomHost,
    pub live_dot: Option<web::HtmlElement>,
}

impl FrameContext {
    pub fn frame(&mut self) -> LoopControl {
        // retry until layout has settled
        if self.visualizer.needs_measure() {
            self.remeasure();
        }
        let outcome = self.visualizer.frame(js_sys::Date::now(), &mut self.painter);
        if outcome == FrameOutcome::Drawn {
            if let Some(dot) = &self.live_dot {
                let opacity = markup::live_dot_opacity(self.visualizer.state().pulse);
                let _ = dot.style().set_property("opacity", &opacity);
            }
        }
        outcome.control()
    }

    pub fn remeasure(&mut self) {
        self.visualizer.resize(&self.host, &mut self.painter);
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct LoopHandle {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl LoopHandle {
    /// Cancel the loop and any queued frame. Returns `false` if it was
    /// already stopped. Must not be called from inside a frame.
    pub fn stop(&self) -> bool {
        let stopped = self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // drops the closure and with it the loop's reference to the context
        self.tick.borrow_mut().take();
        stopped
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let token = frame_ctx.borrow().visualizer.cancel_token();
    let pending = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let control = frame_ctx.borrow_mut().frame();
        if control == LoopControl::Continue {
            pending_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    LoopHandle {
        token,
        pending,
        tick,
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
