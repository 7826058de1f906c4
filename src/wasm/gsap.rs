//! Bindings to the global `gsap` object and the conversion from the plain
//! animation descriptions into the objects it expects.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::reveal::{Animation, Scrub, ScrollTriggerVars, Target, TweenVars, Value};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = registerPlugin, js_namespace = gsap)]
    fn register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = gsap)]
    fn to(target: &JsValue, vars: &Object) -> JsValue;

    #[wasm_bindgen(js_name = fromTo, js_namespace = gsap)]
    fn from_to(target: &JsValue, from: &Object, to: &Object) -> JsValue;

    #[wasm_bindgen(js_namespace = gsap)]
    fn timeline(vars: &Object) -> Timeline;

    pub type Timeline;

    #[wasm_bindgen(method, js_name = to)]
    fn to_at(this: &Timeline, target: &JsValue, vars: &Object, position: &JsValue) -> Timeline;

    #[wasm_bindgen(thread_local_v2, js_name = ScrollTrigger)]
    static SCROLL_TRIGGER: JsValue;
}

fn global_defined(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Registers ScrollTrigger with GSAP. Fails when either script is missing
/// from the page.
pub fn init() -> Result<(), JsValue> {
    for name in ["gsap", "ScrollTrigger"] {
        if !global_defined(name) {
            return Err(JsValue::from_str(&format!("{name} not loaded")));
        }
    }
    SCROLL_TRIGGER.with(register_plugin);
    Ok(())
}

fn target(target: &Target<Element>) -> JsValue {
    match target {
        Target::Selector(s) => JsValue::from_str(s),
        Target::Element(el) => el.clone().into(),
    }
}

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), value)?;
    Ok(())
}

fn scroll_trigger(st: &ScrollTriggerVars<Element>) -> Result<Object, JsValue> {
    let obj = Object::new();
    set(&obj, "trigger", &target(&st.trigger))?;
    set(&obj, "start", &JsValue::from_str(st.start))?;
    if let Some(end) = st.end {
        set(&obj, "end", &JsValue::from_str(end))?;
    }
    match st.scrub {
        Some(Scrub::Locked) => set(&obj, "scrub", &JsValue::TRUE)?,
        Some(Scrub::Smoothed(secs)) => set(&obj, "scrub", &JsValue::from_f64(secs))?,
        None => {}
    }
    Ok(obj)
}

fn vars(vars: &TweenVars<Element>) -> Result<Object, JsValue> {
    let obj = Object::new();
    for (key, value) in &vars.props {
        let value = match value {
            Value::Number(n) => JsValue::from_f64(*n),
            Value::Text(s) => JsValue::from_str(s),
        };
        set(&obj, key, &value)?;
    }
    if let Some(st) = &vars.scroll_trigger {
        set(&obj, "scrollTrigger", &scroll_trigger(st)?)?;
    }
    Ok(obj)
}

pub fn play(animation: &Animation<Element>) -> Result<(), JsValue> {
    match animation {
        Animation::To { target: t, vars: v } => {
            to(&target(t), &vars(v)?);
        }
        Animation::FromTo {
            target: t,
            from,
            to: end,
        } => {
            from_to(&target(t), &vars(from)?, &vars(end)?);
        }
        Animation::Timeline {
            scroll_trigger: st,
            steps,
        } => {
            let tl_vars = Object::new();
            if let Some(st) = st {
                set(&tl_vars, "scrollTrigger", &scroll_trigger(st)?)?;
            }
            let tl = timeline(&tl_vars);
            for step in steps {
                let position = step.position.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED);
                tl.to_at(&target(&step.target), &vars(&step.vars)?, &position);
            }
        }
    }
    Ok(())
}
