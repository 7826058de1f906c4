use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, Node, Window};

use crate::config::PopupConfig;
use crate::popup::{PopupState, Transition};

/// The popup and the parts of the button that swap while it is open.
struct PopupView {
    popup: Element,
    text: Option<Element>,
    icon: Option<Element>,
    closed_classes: [&'static str; 3],
    hidden_class: &'static str,
}

impl PopupView {
    fn apply(&self, transition: Transition) -> Result<(), JsValue> {
        let [a, b, c] = self.closed_classes;
        let popup = self.popup.class_list();
        match transition {
            Transition::Opened => {
                popup.remove_3(a, b, c)?;
                if let Some(text) = &self.text {
                    text.class_list().add_1(self.hidden_class)?;
                }
                if let Some(icon) = &self.icon {
                    icon.class_list().remove_1(self.hidden_class)?;
                }
            }
            Transition::Closed => {
                popup.add_3(a, b, c)?;
                if let Some(text) = &self.text {
                    text.class_list().remove_1(self.hidden_class)?;
                }
                if let Some(icon) = &self.icon {
                    icon.class_list().add_1(self.hidden_class)?;
                }
            }
            Transition::Unchanged => {}
        }
        Ok(())
    }

    fn contains(&self, event: &Event) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        self.popup.contains(target.as_ref())
    }
}

struct Controller {
    state: PopupState,
    view: PopupView,
}

impl Controller {
    fn handle(&mut self, event: impl FnOnce(&mut PopupState) -> Transition) {
        let transition = event(&mut self.state);
        if let Err(e) = self.view.apply(transition) {
            log::warn!("popup update failed: {e:?}");
        }
    }
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
    passive: bool,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
    } else {
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    }
    closure.forget();
    Ok(())
}

/// Wires the reserve button and popup. Both must exist.
pub fn start(window: &Window, document: &Document, cfg: &PopupConfig) -> Result<(), JsValue> {
    let (Some(trigger), Some(popup)) = (
        document.get_element_by_id(cfg.trigger_id),
        document.get_element_by_id(cfg.popup_id),
    ) else {
        log::debug!("#{} or #{} not found, popup disabled", cfg.trigger_id, cfg.popup_id);
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(Controller {
        state: PopupState::default(),
        view: PopupView {
            text: trigger.query_selector(cfg.text_selector)?,
            icon: trigger.query_selector(cfg.icon_selector)?,
            popup,
            closed_classes: cfg.closed_classes,
            hidden_class: cfg.hidden_class,
        },
    }));

    let c = controller.clone();
    listen(
        &trigger,
        "click",
        move |event| {
            event.stop_propagation();
            c.borrow_mut().handle(PopupState::toggle);
        },
        false,
    )?;

    let c = controller.clone();
    listen(
        document,
        "click",
        move |event| {
            let mut controller = c.borrow_mut();
            let inside = controller.view.contains(&event);
            controller.handle(|state| state.document_click(inside));
        },
        false,
    )?;

    let c = controller;
    listen(window, "scroll", move |_| c.borrow_mut().handle(PopupState::scroll), true)?;
    Ok(())
}
