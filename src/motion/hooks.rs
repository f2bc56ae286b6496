//! Yew bindings for the motion primitives. Each hook owns its browser
//! handle and releases it in the effect teardown.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use super::counter::Counter;
use super::easing::Easing;
use super::frame::animate;
use super::observer::observe;

/// `true` from the first time `threshold` of the node has been on screen.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let fired = use_state(|| false);

    {
        let fired = fired.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let handle = if *fired {
                    None
                } else {
                    match node.cast::<Element>() {
                        Some(element) => Some(observe(&element, threshold, move || {
                            debug!("reveal fired");
                            fired.set(true);
                        })),
                        None => {
                            warn!("reveal target is not mounted, showing it");
                            fired.set(true);
                            None
                        }
                    }
                };
                move || drop(handle)
            },
            node,
        );
    }

    *fired
}

/// `true` shortly after mount. For above-the-fold elements that animate in
/// with the page rather than on scroll.
#[hook]
pub fn use_mount_reveal() -> bool {
    let fired = use_state(|| false);

    {
        let fired = fired.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || fired.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *fired
}

/// Counts from `from` to `to` once `trigger` is true. `None` until then.
#[hook]
pub fn use_count_up(from: i64, to: i64, trigger: bool) -> Option<i64> {
    let displayed = use_state(|| None::<i64>);

    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |&(from, to, trigger): &(i64, i64, bool)| {
                let counter = Rc::new(RefCell::new(
                    Counter::new(from, to, config::COUNTER_DURATION_MS).with_easing(Easing::EaseOut),
                ));

                let handle = if trigger && counter.borrow_mut().start() {
                    displayed.set(counter.borrow().displayed());
                    let tween = counter.borrow().tween();
                    let setter = displayed.setter();
                    let frame_counter = counter.clone();
                    let handle = animate(tween, move |value| {
                        if let Some(shown) = frame_counter.borrow_mut().write(value) {
                            setter.set(Some(shown));
                        }
                    });
                    if handle.is_none() {
                        warn!("no animation frames available, showing final count");
                        displayed.set(Some(counter.borrow_mut().finish()));
                    }
                    handle
                } else {
                    None
                };

                move || {
                    counter.borrow_mut().cancel();
                    if let Some(handle) = handle {
                        handle.cancel();
                    }
                }
            },
            (from, to, trigger),
        );
    }

    *displayed
}
