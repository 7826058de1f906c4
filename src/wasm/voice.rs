use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::frame;
use crate::config::AutoScrollConfig;
use crate::voice::{AutoScroller, Strip, StripGeometry};

// web-sys exposes `scrollLeft` as an integer; the strip moves by half a pixel
// per frame, so go through the property directly.
const SCROLL_LEFT: &str = "scrollLeft";

impl Strip for Element {
    type Error = JsValue;

    fn geometry(&self) -> StripGeometry {
        StripGeometry {
            scroll_left: Reflect::get(self, &JsValue::from_str(SCROLL_LEFT))
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            scroll_width: self.scroll_width() as f64,
            client_width: self.client_width() as f64,
        }
    }

    fn write_scroll_left(&mut self, value: f64) -> Result<(), JsValue> {
        Reflect::set(self, &JsValue::from_str(SCROLL_LEFT), &JsValue::from_f64(value))?;
        Ok(())
    }
}

fn now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

pub fn start(window: &Window, document: &Document, cfg: &AutoScrollConfig) -> Result<(), JsValue> {
    let Some(mut container) = document.get_element_by_id(cfg.container_id) else {
        log::debug!("#{} not found, auto-scroll disabled", cfg.container_id);
        return Ok(());
    };
    let scroller = Rc::new(RefCell::new(AutoScroller::new(cfg)));

    let touch_start = {
        let scroller = scroller.clone();
        Closure::wrap(Box::new(move || scroller.borrow_mut().touch_start()) as Box<dyn FnMut()>)
    };
    container.add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())?;
    touch_start.forget();

    let touch_end = {
        let scroller = scroller.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || scroller.borrow_mut().touch_end(now(&window)))
            as Box<dyn FnMut()>)
    };
    container.add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())?;
    touch_end.forget();

    frame::run(window.clone(), move |now_ms| {
        if let Err(e) = scroller.borrow_mut().tick(now_ms, &mut container) {
            log::warn!("auto-scroll step failed: {e:?}");
        }
    })
}
