use std::cell::RefCell;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::DecorConfig;
use crate::error::DecorError;

pub mod animation;
pub mod canvas2d;
pub mod decorate;
pub mod dom;
pub mod gl;
pub mod render;
pub mod shaders;

use decorate::Running;

/// Every decoration running on a page. Dropping it (or calling
/// [`stop`](Self::stop)) tears all of them down.
pub struct Decorations {
    running: Vec<Running>,
}

impl Decorations {
    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Cancels every animation frame and removes every listener.
    pub fn stop(&mut self) {
        if !self.running.is_empty() {
            log::info!("stopping {} decorations", self.running.len());
        }
        self.running.clear();
    }
}

/// Starts every decoration `document` has a target for. A decoration that
/// fails is logged and skipped.
pub fn decorate_document(document: &Document, config: &DecorConfig) -> Decorations {
    let mut rng = match config.background.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64),
    };

    let mut running = Vec::new();
    let mut keep = |name: &str, started: crate::Result<Option<Running>>| match started {
        Ok(Some(r)) => running.push(r),
        Ok(None) => {}
        Err(err) => log::error!("{name} failed: {err}"),
    };
    keep("background", decorate::background(document, config, &mut rng));
    keep("hero model", decorate::hero(document, config));
    keep("profile model", decorate::profile(document, config));

    match decorate::previews(document, config) {
        Ok(previews) => running.extend(previews),
        Err(err) => log::error!("project previews failed: {err}"),
    }
    Decorations { running }
}

// The one set of decorations the page owns.
thread_local! {
    static ACTIVE: RefCell<Option<Decorations>> = const { RefCell::new(None) };
}

/// Stops whatever the page was running, then decorates `document` afresh
/// and keeps the result. Returns how many decorations started.
pub fn redecorate(document: &Document, config: &DecorConfig) -> usize {
    stop_active();
    let decorations = decorate_document(document, config);
    let count = decorations.len();
    log::info!("{count} decorations running");
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(decorations));
    count
}

fn stop_active() {
    // drop outside the borrow; teardown may log
    let previous = ACTIVE.with(|slot| slot.borrow_mut().take());
    drop(previous);
}

fn init_logging(config: &DecorConfig) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // a second call finds the logger already installed
    let _ = console_log::init_with_level(config.level());
}

fn page() -> Result<(Document, DecorConfig), DecorError> {
    let window = web_sys::window().ok_or(DecorError::MissingGlobal("window"))?;
    let document = window.document().ok_or(DecorError::MissingGlobal("document"))?;
    let (config, problem) = dom::read_config(&document);
    init_logging(&config);
    if let Some(err) = problem {
        log::warn!("ignoring page configuration: {err}");
    }
    Ok((document, config))
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let (document, config) = page()?;
    redecorate(&document, &config);
    Ok(())
}

/// Re-decorates the page in place of whatever is running, so calling this
/// repeatedly never stacks animation loops. Returns the number started.
#[wasm_bindgen]
pub fn decorate() -> Result<usize, JsValue> {
    let (document, config) = page()?;
    Ok(redecorate(&document, &config))
}

/// Stops every decoration on the page.
#[wasm_bindgen]
pub fn undecorate() {
    stop_active();
}
