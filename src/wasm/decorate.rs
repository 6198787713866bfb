//! Finds the page's decoration targets and starts a scene on each.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, MouseEvent};

use crate::config::DecorConfig;
use crate::decor::{self, HeroModel, ProfileModel, ProjectPreview};
use crate::error::{DecorError, Result};
use crate::frame::Decoration;

use super::animation::AnimationLoop;
use super::dom::{self, canvas_by_id, Listener, Sizing};
use super::render::Renderer;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Scenes started and not yet dropped on this page.
pub fn live() -> usize {
    LIVE.with(Cell::get)
}

/// One live scene: its frame loop plus every listener it registered.
/// Dropping it cancels the frame and unregisters the listeners.
pub struct Running {
    listeners: Vec<Listener>,
    _animation: AnimationLoop,
}

impl Running {
    /// Sizes the renderer, starts the frame loop and keeps it sized on window
    /// resize. Hands back the shared decoration for extra input wiring.
    fn start<D>(decoration: D, canvas: &HtmlCanvasElement, sizing: Sizing) -> Result<(Self, Rc<RefCell<D>>)>
    where
        D: Decoration + 'static,
    {
        let mut renderer = Renderer::new(canvas, decoration.scene())?;
        let viewport = sizing.viewport()?;
        renderer.set_size(viewport);
        let mut decoration = decoration;
        decoration.resize(viewport);

        let decoration = Rc::new(RefCell::new(decoration));
        let renderer = Rc::new(RefCell::new(renderer));
        let window = web_sys::window().ok_or(DecorError::MissingGlobal("window"))?;

        let resize = {
            let decoration = decoration.clone();
            let renderer = renderer.clone();
            Listener::new(&window, "resize", move |_| match sizing.viewport() {
                Ok(viewport) => {
                    renderer.borrow_mut().set_size(viewport);
                    decoration.borrow_mut().resize(viewport);
                }
                Err(err) => log::warn!("resize skipped: {err}"),
            })?
        };
        let animation = AnimationLoop::start(decoration.clone(), renderer)?;
        LIVE.with(|live| live.set(live.get() + 1));

        Ok((
            Self {
                listeners: vec![resize],
                _animation: animation,
            },
            decoration,
        ))
    }

    fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

pub fn background<R: Rng + ?Sized>(
    document: &Document,
    config: &DecorConfig,
    rng: &mut R,
) -> Result<Option<Running>> {
    let id = &config.background.container_id;
    let Some(container) = document.get_element_by_id(id) else {
        log::debug!("no #{id}, background skipped");
        return Ok(None);
    };
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DecorError::Create("background canvas"))?;

    // the container keeps its content unless the scene actually starts
    let decoration = decor::background(&config.background, Sizing::Window.viewport()?, rng);
    let (running, _) = Running::start(decoration, &canvas, Sizing::Window)?;
    dom::mount(&container, &canvas)?;
    log::info!("background started ({:?})", config.background.variant);
    Ok(Some(running))
}

pub fn hero(document: &Document, config: &DecorConfig) -> Result<Option<Running>> {
    let Some(canvas) = canvas_by_id(document, &config.hero_canvas_id)? else {
        log::debug!("no #{}, hero model skipped", config.hero_canvas_id);
        return Ok(None);
    };
    let sizing = Sizing::Element(canvas.clone());
    let (running, _) = Running::start(HeroModel::new(sizing.viewport()?), &canvas, sizing)?;
    log::info!("hero model started");
    Ok(Some(running))
}

pub fn profile(document: &Document, config: &DecorConfig) -> Result<Option<Running>> {
    Ok(profile_model(document, config)?.map(|(running, _)| running))
}

/// Like [`profile`], also sharing the model the pointer listeners drive.
pub fn profile_model(
    document: &Document,
    config: &DecorConfig,
) -> Result<Option<(Running, Rc<RefCell<ProfileModel>>)>> {
    let Some(canvas) = canvas_by_id(document, &config.profile_canvas_id)? else {
        log::debug!("no #{}, profile model skipped", config.profile_canvas_id);
        return Ok(None);
    };
    let sizing = Sizing::Element(canvas.clone());
    let (mut running, model) = Running::start(ProfileModel::new(sizing.viewport()?), &canvas, sizing)?;

    let offset = |event: &web_sys::Event| {
        event
            .dyn_ref::<MouseEvent>()
            .map(|e| (e.offset_x() as f64, e.offset_y() as f64))
    };
    let m = model.clone();
    running.listen(Listener::new(&canvas, "mousedown", move |event| {
        if let Some((x, y)) = offset(&event) {
            m.borrow_mut().pointer_down(x, y);
        }
    })?);
    let m = model.clone();
    running.listen(Listener::new(&canvas, "mousemove", move |event| {
        if let Some((x, y)) = offset(&event) {
            m.borrow_mut().pointer_move(x, y);
        }
    })?);
    let m = model.clone();
    running.listen(Listener::new(&canvas, "mouseup", move |_| m.borrow_mut().pointer_up())?);
    let m = model.clone();
    running.listen(Listener::new(&canvas, "mouseleave", move |_| m.borrow_mut().pointer_leave())?);

    log::info!("profile model started");
    Ok(Some((running, model)))
}

/// One scene per preview canvas; a failing card does not stop the others.
pub fn previews(document: &Document, config: &DecorConfig) -> Result<Vec<Running>> {
    let nodes = document.query_selector_all(&config.preview_selector)?;
    let mut running = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(canvas) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlCanvasElement>().ok()) else {
            log::warn!("{} #{i} is not a canvas", config.preview_selector);
            continue;
        };
        let project = canvas.get_attribute(&config.preview_attribute);
        let sizing = Sizing::Element(canvas.clone());
        let started = sizing
            .viewport()
            .map(|viewport| ProjectPreview::new(project.as_deref(), viewport))
            .and_then(|preview| {
                log::debug!("preview {:?} shows {:?}", project, preview.shape());
                Running::start(preview, &canvas, sizing)
            });
        match started {
            Ok((r, _)) => running.push(r),
            Err(err) => log::error!("preview {:?} failed: {err}", project),
        }
    }
    Ok(running)
}
