//! Per-frame scheduling seam.
//!
//! A [`Decoration`] only knows how to advance itself by one frame. Something
//! else decides when frames happen: the browser's animation-frame loop in the
//! wasm build, or a [`Stepper`] on a virtual clock in tests.

use crate::camera::{PerspectiveCamera, Viewport};
use crate::scene::Scene;

/// One display refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Wall-clock milliseconds since the Unix epoch.
    pub now_ms: f64,
}

pub trait Decoration {
    fn scene(&self) -> &Scene;

    fn camera(&self) -> &PerspectiveCamera;

    fn camera_mut(&mut self) -> &mut PerspectiveCamera;

    /// Advances the animation by one frame.
    fn update(&mut self, frame: Frame);

    fn resize(&mut self, viewport: Viewport) {
        self.camera_mut().set_viewport(viewport);
    }
}

impl<D: Decoration + ?Sized> Decoration for Box<D> {
    fn scene(&self) -> &Scene {
        (**self).scene()
    }

    fn camera(&self) -> &PerspectiveCamera {
        (**self).camera()
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        (**self).camera_mut()
    }

    fn update(&mut self, frame: Frame) {
        (**self).update(frame)
    }

    fn resize(&mut self, viewport: Viewport) {
        (**self).resize(viewport)
    }
}

/// Drives a decoration on a virtual clock.
#[derive(Clone, Debug)]
pub struct Stepper {
    now_ms: f64,
    step_ms: f64,
}

impl Stepper {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self { now_ms: start_ms, step_ms }
    }

    /// Roughly 60 Hz starting at the epoch.
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn step<D: Decoration + ?Sized>(&mut self, decoration: &mut D) {
        decoration.update(Frame { now_ms: self.now_ms });
        self.now_ms += self.step_ms;
    }

    pub fn run<D: Decoration + ?Sized>(&mut self, decoration: &mut D, frames: usize) {
        for _ in 0..frames {
            self.step(decoration);
        }
    }
}
