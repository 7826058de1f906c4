use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

pub mod canvas;
mod frame;
mod gsap;
pub mod popup;
pub mod reveal;
pub mod voice;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let config = PageConfig::default();
    console_error_panic_hook::set_once();
    console_log::init_with_level(config.log_level).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    if let Some(body) = document.body() {
        body.class_list().add_1(config.loaded_class)?;
    }

    // Features are independent; one failing must not stop the others.
    let features: [(&str, Result<(), JsValue>); 4] = [
        ("canvas", canvas::start(&window, &document, &config.lines)),
        ("popup", popup::start(&window, &document, &config.popup)),
        ("voice", voice::start(&window, &document, &config.voice)),
        ("reveal", reveal::start(&document)),
    ];
    for (name, result) in features {
        if let Err(e) = result {
            log::warn!("{name} disabled: {e:?}");
        }
    }
    Ok(())
}
