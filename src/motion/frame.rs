//! `requestAnimationFrame` loops owned by a handle.
//!
//! Dropping an `AnimationHandle` cancels the pending frame and releases the
//! callback, so a torn-down component never receives another frame.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::tween::Tween;

#[derive(Default)]
struct FrameLoop {
    request_id: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
    started_at: Option<f64>,
}

impl FrameLoop {
    fn schedule(frames: &Rc<RefCell<FrameLoop>>) -> bool {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return false,
        };
        let requested = {
            let frames = frames.borrow();
            match frames.callback.as_ref() {
                Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
                None => return false,
            }
        };
        match requested {
            Ok(id) => {
                frames.borrow_mut().request_id = Some(id);
                true
            }
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                false
            }
        }
    }
}

pub struct AnimationHandle {
    frames: Rc<RefCell<FrameLoop>>,
}

impl AnimationHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        let mut frames = self.frames.borrow_mut();
        if let Some(id) = frames.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        frames.callback = None;
    }
}

/// Calls `step` with the milliseconds elapsed since the first frame, once per
/// animation frame, until it returns `false` or the handle is dropped.
///
/// Returns `None` when no frame clock is available.
pub fn run_frames<F>(mut step: F) -> Option<AnimationHandle>
where
    F: FnMut(f64) -> bool + 'static,
{
    let frames = Rc::new(RefCell::new(FrameLoop::default()));
    let weak: Weak<RefCell<FrameLoop>> = Rc::downgrade(&frames);

    let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let frames = match weak.upgrade() {
            Some(frames) => frames,
            None => return,
        };
        let started_at = {
            let mut frames = frames.borrow_mut();
            frames.request_id = None;
            *frames.started_at.get_or_insert(timestamp)
        };
        if step(timestamp - started_at) {
            FrameLoop::schedule(&frames);
        }
    });
    frames.borrow_mut().callback = Some(callback);

    if !FrameLoop::schedule(&frames) {
        return None;
    }
    Some(AnimationHandle { frames })
}

/// Plays `tween`, passing each frame's interpolated value to `on_frame`. The
/// last call always receives `tween.to`.
pub fn animate<F>(tween: Tween, mut on_frame: F) -> Option<AnimationHandle>
where
    F: FnMut(f64) + 'static,
{
    run_frames(move |elapsed_ms| {
        on_frame(tween.value_at(elapsed_ms));
        !tween.is_complete(elapsed_ms)
    })
}
