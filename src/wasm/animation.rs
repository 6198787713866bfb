use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::error::{DecorError, Result};
use crate::frame::{Decoration, Frame};

use super::render::Renderer;

type FrameCallback = RefCell<Option<Closure<dyn FnMut()>>>;

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and frees the callback.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    // The callback only holds a weak reference to itself; this is the strong one.
    callback: Rc<FrameCallback>,
}

impl AnimationLoop {
    pub fn start<D>(decoration: Rc<RefCell<D>>, renderer: Rc<RefCell<Renderer>>) -> Result<Self>
    where
        D: Decoration + ?Sized + 'static,
    {
        let window = web_sys::window().ok_or(DecorError::MissingGlobal("window"))?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<FrameCallback> = Rc::new(RefCell::new(None));

        let this: Weak<FrameCallback> = Rc::downgrade(&callback);
        let next = window.clone();
        let handle = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle.set(None);
            {
                let mut decoration = decoration.borrow_mut();
                decoration.update(Frame {
                    now_ms: js_sys::Date::now(),
                });
                renderer.borrow().render(decoration.scene(), decoration.camera());
            }

            // schedule next, unless the loop was dropped meanwhile
            let Some(callback) = this.upgrade() else {
                return;
            };
            let callback = callback.borrow();
            if let Some(f) = callback.as_ref() {
                match next.request_animation_frame(f.as_ref().unchecked_ref()) {
                    Ok(id) => handle.set(Some(id)),
                    Err(err) => log::error!("animation frame request failed: {err:?}"),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = {
            let f = callback.borrow();
            let f = f.as_ref().ok_or(DecorError::Create("frame callback"))?;
            window.request_animation_frame(f.as_ref().unchecked_ref())?
        };
        pending.set(Some(first));

        Ok(Self {
            window,
            pending,
            callback,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("could not cancel animation frame {id}: {err:?}");
            }
        }
        self.callback.borrow_mut().take();
    }
}
