use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlCanvasElement};

use crate::camera::Viewport;
use crate::config::{DecorConfig, CONFIG_ELEMENT_ID};
use crate::error::{DecorError, Result};

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
        if let Err(err) = removed {
            log::warn!("could not remove {} listener: {err:?}", self.kind);
        }
    }
}

/// Where a decoration takes its drawing size from.
#[derive(Clone)]
pub enum Sizing {
    /// The browser window's inner size (full-page backgrounds).
    Window,
    /// The laid-out size of an existing canvas.
    Element(HtmlCanvasElement),
}

impl Sizing {
    pub fn viewport(&self) -> Result<Viewport> {
        match self {
            Sizing::Window => {
                let window = web_sys::window().ok_or(DecorError::MissingGlobal("window"))?;
                let width = window.inner_width()?.as_f64().unwrap_or(0.0);
                let height = window.inner_height()?.as_f64().unwrap_or(0.0);
                Ok(Viewport::from_f64(width, height))
            }
            Sizing::Element(canvas) => Ok(Viewport::from_f64(
                canvas.client_width() as f64,
                canvas.client_height() as f64,
            )),
        }
    }
}

/// Replaces everything inside `container` with `canvas`.
pub fn mount(container: &Element, canvas: &HtmlCanvasElement) -> Result<()> {
    container.set_inner_html("");
    container.append_child(canvas)?;
    Ok(())
}

/// `Ok(None)` when nothing has that id.
pub fn canvas_by_id(document: &Document, id: &str) -> Result<Option<HtmlCanvasElement>> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(element) => element
            .dyn_into::<HtmlCanvasElement>()
            .map(Some)
            .map_err(|_| DecorError::NotACanvas(id.to_owned())),
    }
}

/// Configuration embedded in the page, if any, plus the parse error to report
/// once logging is up.
pub fn read_config(document: &Document) -> (DecorConfig, Option<DecorError>) {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    match text {
        None => (DecorConfig::default(), None),
        Some(text) => match DecorConfig::from_json(&text) {
            Ok(config) => (config, None),
            Err(err) => (DecorConfig::default(), Some(err)),
        },
    }
}
