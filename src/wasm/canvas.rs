use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::frame;
use crate::config::LineFieldConfig;
use crate::wave::{LineField, Surface, Viewport};

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], style: &str, line_width: f64) {
        let mut points = points.iter();
        let Some(&(x0, y0)) = points.next() else { return };
        self.begin_path();
        self.move_to(x0, y0);
        for &(x, y) in points {
            self.line_to(x, y);
        }
        self.set_stroke_style_str(style);
        self.set_line_width(line_width);
        self.stroke();
    }
}

fn window_size(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight not a number")?;
    Ok(Viewport::new(width, height))
}

fn fit(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

/// Starts the background wave field on the page canvas. Pages without the
/// canvas, or browsers without a 2D context, simply go without it.
pub fn start(window: &Window, document: &Document, cfg: &LineFieldConfig) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(cfg.canvas_id) else {
        log::debug!("#{} not found, background disabled", cfg.canvas_id);
        return Ok(());
    };
    let canvas = element.dyn_into::<HtmlCanvasElement>()?;
    let Some(context) = canvas.get_context("2d")? else {
        log::debug!("2d context unavailable, background disabled");
        return Ok(());
    };
    let mut ctx: CanvasRenderingContext2d = context.dyn_into()?;

    let viewport = window_size(window)?;
    fit(&canvas, viewport);
    let field = Rc::new(RefCell::new(LineField::new(
        cfg.clone(),
        viewport,
        js_sys::Math::random,
    )));

    // Resize canvas to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        let field = field.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || match window_size(&window) {
            Ok(viewport) => {
                fit(&canvas, viewport);
                field.borrow_mut().resize(viewport);
            }
            Err(e) => log::warn!("resize ignored: {e:?}"),
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let scroll_source = window.clone();
    frame::run(window.clone(), move |_now| {
        let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);
        field.borrow_mut().draw(&mut ctx, scroll_y);
    })?;

    log::info!("background started with {} lines", cfg.line_count);
    Ok(())
}
