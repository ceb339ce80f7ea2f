use crate::console::{warn, ConsoleChannel};
use crate::dom::{DomElement, DomOverlay};
use crate::listener::Subscription;
use recorder_common::config::CONFIG_GLOBAL;
use recorder_common::{Recorder, RecorderConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent, Window};

type SharedRecorder = Rc<RefCell<Recorder<DomOverlay, ConsoleChannel>>>;

struct Installation {
    recorder: SharedRecorder,
    subscriptions: Vec<Subscription>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy)]
enum Capture {
    Click,
    Input,
    Change,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    install()
}

/// Mounts the overlay, attaches the listeners and announces readiness.
///
/// A second call while installed is a no-op.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    if is_installed() {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let recorder: SharedRecorder = Rc::new(RefCell::new(Recorder::new(
        DomOverlay::new(document.clone()),
        ConsoleChannel,
        page_config(&window),
    )));

    let subscriptions = vec![
        Subscription::capture(&window, "click", handler(&recorder, Capture::Click))?,
        Subscription::capture(&document, "input", handler(&recorder, Capture::Input))?,
        Subscription::capture(&document, "change", handler(&recorder, Capture::Change))?,
    ];

    recorder.borrow_mut().announce_ready();

    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(Installation {
            recorder,
            subscriptions,
        });
    });
    Ok(())
}

/// Removes the listeners and the overlay. Returns `false` if nothing was installed.
#[wasm_bindgen]
pub fn uninstall() -> bool {
    let Some(installation) = INSTALLED.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };

    // Listener closures hold the other references to the recorder.
    drop(installation.subscriptions);

    match Rc::try_unwrap(installation.recorder) {
        Ok(cell) => {
            cell.into_inner().dispose();
        }
        Err(_) => warn("Recorder still referenced, overlay left in place"),
    }
    true
}

#[wasm_bindgen(js_name = isInstalled)]
pub fn is_installed() -> bool {
    INSTALLED.with(|slot| slot.borrow().is_some())
}

fn handler(recorder: &SharedRecorder, capture: Capture) -> impl FnMut(Event) + 'static {
    let recorder = Rc::clone(recorder);
    move |event: Event| dispatch(&recorder, capture, &event)
}

fn dispatch(recorder: &SharedRecorder, capture: Capture, event: &Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    let Ok(mut recorder) = recorder.try_borrow_mut() else {
        tracing::debug!("Recorder busy, skipping nested event");
        return;
    };

    let element = DomElement::new(&target);
    match capture {
        Capture::Click => {
            let (x, y) = event
                .dyn_ref::<MouseEvent>()
                .map(|mouse| (mouse.client_x(), mouse.client_y()))
                .unwrap_or((0, 0));
            recorder.on_click(x, y, &element);
        }
        Capture::Input => {
            recorder.on_input(&element);
        }
        Capture::Change => {
            recorder.on_change(&element);
        }
    }
}

fn page_config(window: &Window) -> RecorderConfig {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return RecorderConfig::default();
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        warn(&format!("Ignoring invalid {}: {}", CONFIG_GLOBAL, e));
        RecorderConfig::default()
    })
}
