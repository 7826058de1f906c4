use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use super::gsap;
use crate::reveal::{self as scene, Animation};

fn all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// `parseFloat` of the column's `data-speed`, NaN when the attribute is absent.
pub fn column_speed_attr(column: &Element) -> f64 {
    column
        .get_attribute(scene::SPEED_ATTR)
        .map_or(f64::NAN, |raw| js_sys::parse_float(&raw))
}

/// Every scroll-driven effect on the page, with elements resolved.
fn animations(document: &Document) -> Result<Vec<Animation<Element>>, JsValue> {
    let mut out = vec![scene::hero_intro(), scene::hero_parallax()];

    for wrapper in all(document, scene::REVEAL_WRAPPER)? {
        let overlay = wrapper.query_selector(scene::REVEAL_OVERLAY)?;
        let image = wrapper.query_selector(scene::REVEAL_IMG)?;
        match (overlay, image) {
            (Some(overlay), Some(image)) => out.push(scene::image_reveal(wrapper, overlay, image)),
            _ => log::debug!("reveal wrapper without overlay or image skipped"),
        }
    }

    out.extend(all(document, scene::FADE_IN_UP)?.into_iter().map(scene::fade_in_up));

    for column in all(document, scene::PARALLAX_COL)? {
        let speed = column_speed_attr(&column);
        out.push(scene::column_parallax(column, speed));
    }

    out.push(scene::text_parallax());
    Ok(out)
}

pub fn start(document: &Document) -> Result<(), JsValue> {
    if let Err(e) = gsap::init() {
        log::debug!("reveals disabled: {e:?}");
        return Ok(());
    }
    let animations = animations(document)?;
    for animation in &animations {
        gsap::play(animation)?;
    }
    log::info!("{} scroll animations registered", animations.len());
    Ok(())
}
