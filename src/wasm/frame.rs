use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

fn request_frame(window: &Window, f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Calls `tick` with the frame timestamp on every display refresh for the
/// rest of the page's life.
pub fn run(window: Window, mut tick: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let w = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        tick(now);

        let next = f.borrow();
        let Some(closure) = next.as_ref() else { return };
        if let Err(e) = request_frame(&w, closure) {
            log::error!("frame loop stopped: {e:?}");
        }
    }) as Box<dyn FnMut(f64)>));

    let first = g.borrow();
    request_frame(&window, first.as_ref().ok_or("frame closure missing")?)?;
    Ok(())
}
