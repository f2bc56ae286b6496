//! Viewport visibility for reveal targets.
//!
//! `observe` wires an `IntersectionObserver` (or, where that is missing, a
//! scroll listener) to a `RevealTrigger` and calls back once when it fires.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::{intersection_ratio, Rect, RevealTrigger};

// Browsers can report a crossing ratio a hair below the configured threshold.
const RATIO_SLACK: f64 = 1e-3;

type OnVisible = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

enum Watcher {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Scroll {
        listener: Closure<dyn FnMut()>,
    },
    Done,
}

/// Keeps a visibility watch alive. Dropping it stops watching.
pub struct VisibilityHandle {
    watcher: Watcher,
}

impl Drop for VisibilityHandle {
    fn drop(&mut self) {
        match &self.watcher {
            Watcher::Observer { observer, .. } => observer.disconnect(),
            Watcher::Scroll { listener } => {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
            Watcher::Done => {}
        }
    }
}

fn fire(on_visible: &OnVisible) {
    if let Some(callback) = on_visible.borrow_mut().take() {
        callback();
    }
}

/// Watches `element` until at least `threshold` of it has been visible once,
/// then calls `on_visible`. Never calls it more than once.
pub fn observe<F>(element: &Element, threshold: f64, on_visible: F) -> VisibilityHandle
where
    F: FnOnce() + 'static,
{
    let on_visible: Box<dyn FnOnce()> = Box::new(on_visible);
    let on_visible: OnVisible = Rc::new(RefCell::new(Some(on_visible)));
    let trigger = Rc::new(RefCell::new(RevealTrigger::new(threshold)));

    if web_sys::window().is_none() {
        warn!("no window, revealing immediately");
        trigger.borrow_mut().force();
        fire(&on_visible);
        return VisibilityHandle { watcher: Watcher::Done };
    }

    match watch_intersections(element, trigger.clone(), on_visible.clone()) {
        Ok(watcher) => VisibilityHandle { watcher },
        Err(err) => {
            debug!("IntersectionObserver unavailable ({:?}), using scroll fallback", err);
            watch_scroll(element.clone(), trigger, on_visible)
        }
    }
}

fn watch_intersections(
    element: &Element,
    trigger: Rc<RefCell<RevealTrigger>>,
    on_visible: OnVisible,
) -> Result<Watcher, JsValue> {
    let threshold = trigger.borrow().threshold();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio() + RATIO_SLACK
                } else {
                    0.0
                };
                if trigger.borrow_mut().observe_ratio(ratio) {
                    observer.disconnect();
                    fire(&on_visible);
                    return;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Watcher::Observer {
        observer,
        _callback: callback,
    })
}

fn viewport_ratio(element: &Element) -> f64 {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return 0.0,
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let bounds = element.get_bounding_client_rect();
    intersection_ratio(
        Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        Rect::new(0.0, 0.0, width, height),
    )
}

fn watch_scroll(element: Element, trigger: Rc<RefCell<RevealTrigger>>, on_visible: OnVisible) -> VisibilityHandle {
    // Already on screen at mount.
    if trigger.borrow_mut().observe_ratio(viewport_ratio(&element)) {
        fire(&on_visible);
        return VisibilityHandle { watcher: Watcher::Done };
    }

    let trigger_fallback = trigger.clone();
    let listener = Closure::<dyn FnMut()>::new({
        let on_visible = on_visible.clone();
        move || {
            if trigger.borrow().is_fired() {
                return;
            }
            if trigger.borrow_mut().observe_ratio(viewport_ratio(&element)) {
                fire(&on_visible);
            }
        }
    });

    let attached = web_sys::window()
        .map(|window| window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()))
        .unwrap_or_else(|| Err(JsValue::NULL));

    match attached {
        Ok(()) => VisibilityHandle {
            watcher: Watcher::Scroll { listener },
        },
        Err(err) => {
            warn!("could not watch scrolling ({:?}), revealing immediately", err);
            if trigger_fallback.borrow_mut().force() {
                fire(&on_visible);
            }
            VisibilityHandle { watcher: Watcher::Done }
        }
    }
}
