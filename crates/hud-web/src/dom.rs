use hud_core::SurfaceHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Page-lifetime click handler; the closure is intentionally leaked.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("missing #{} for click listener", element_id);
    }
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_html(document: &web::Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let style = if visible { "" } else { "display:none" };
        let _ = el.set_attribute("style", style);
    }
}

/// Event listener that is removed again on `detach` or drop.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut()>>,
}

impl EventListener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    pub fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// One-shot `setTimeout` callback, cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: u32, handler: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure: Closure<dyn FnMut()> = Closure::once(handler);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Measures the canvas container and reads the current device pixel ratio.
pub struct DomHost {
    container: web::Element,
}

impl DomHost {
    pub fn new(container: web::Element) -> Self {
        Self { container }
    }
}

impl SurfaceHost for DomHost {
    fn container_width(&self) -> f64 {
        self.container.get_bounding_client_rect().width()
    }

    fn device_pixel_ratio(&self) -> f64 {
        web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
    }
}
