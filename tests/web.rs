#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, MouseEventInit};

use portfolio_decor::camera::Viewport;
use portfolio_decor::config::DecorConfig;
use portfolio_decor::decor::HeroModel;
use portfolio_decor::frame::Decoration;
use portfolio_decor::wasm::decorate::{live, profile_model};
use portfolio_decor::wasm::render::Renderer;
use portfolio_decor::wasm::{decorate_document, redecorate, undecorate};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

// Points every target at ids no test page contains.
fn config_for(container_id: &str) -> DecorConfig {
    let mut config = DecorConfig::default();
    config.background.container_id = container_id.to_owned();
    config.background.seed = Some(9);
    config.hero_canvas_id = "no-hero".to_owned();
    config.profile_canvas_id = "no-profile".to_owned();
    config.preview_selector = ".no-preview".to_owned();
    config
}

fn sized_canvas(document: &Document, id: &str) -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id(id);
    canvas.style().set_property("width", "300px").unwrap();
    canvas.style().set_property("height", "300px").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn window_resize() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn background_container_holds_exactly_one_canvas() {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_id("bg-twice");
    container.set_inner_html("<p>placeholder</p>");
    document.body().unwrap().append_child(&container).unwrap();

    let config = config_for("bg-twice");
    let first = decorate_document(&document, &config);
    let second = decorate_document(&document, &config);

    assert_eq!(container.child_element_count(), 1);
    let child = container.first_element_child().unwrap();
    if second.is_empty() {
        // no WebGL2: the container keeps what it had
        assert_eq!(child.tag_name(), "P");
    } else {
        assert!(child.dyn_into::<HtmlCanvasElement>().is_ok());
    }

    drop(first);
    drop(second);
    container.remove();
}

#[wasm_bindgen_test]
fn missing_targets_leave_the_page_alone() {
    let document = document();
    let body = document.body().unwrap();
    let before = body.inner_html();

    let mut decorations = decorate_document(&document, &config_for("no-such-container"));
    assert!(decorations.is_empty());
    decorations.stop();

    assert_eq!(body.inner_html(), before);
}

#[wasm_bindgen_test]
fn redecorating_replaces_the_running_set() {
    let document = document();
    let canvas = sized_canvas(&document, "hero-redecorate");
    let mut config = config_for("no-such-container");
    config.hero_canvas_id = "hero-redecorate".to_owned();

    let baseline = live();
    let first = redecorate(&document, &config);
    assert_eq!(live(), baseline + first);
    let second = redecorate(&document, &config);
    assert_eq!(first, second);
    assert_eq!(live(), baseline + second);

    undecorate();
    assert_eq!(live(), baseline);
    canvas.remove();
}

#[wasm_bindgen_test]
fn stopped_profile_ignores_input_and_resize() {
    let document = document();
    let canvas = sized_canvas(&document, "profile-stop");
    let mut config = config_for("no-such-container");
    config.profile_canvas_id = "profile-stop".to_owned();

    let Some((running, model)) = profile_model(&document, &config).unwrap_or(None) else {
        // headless browsers without WebGL2
        canvas.remove();
        return;
    };

    // live: a drag turns the head and a resize follows the canvas box
    canvas.dispatch_event(&mouse("mousedown", 10, 10)).unwrap();
    canvas.dispatch_event(&mouse("mousemove", 20, 10)).unwrap();
    let turned = model.borrow().head_rotation();
    assert!((turned.y - 0.1).abs() < 1e-5, "y = {}", turned.y);
    canvas.dispatch_event(&mouse("mouseup", 20, 10)).unwrap();

    canvas.style().set_property("width", "320px").unwrap();
    window_resize();
    assert_eq!(canvas.width(), 320);

    let before = live();
    drop(running);
    assert_eq!(live(), before - 1);

    canvas.dispatch_event(&mouse("mousedown", 10, 10)).unwrap();
    canvas.dispatch_event(&mouse("mousemove", 60, 40)).unwrap();
    assert_eq!(model.borrow().head_rotation(), turned);

    canvas.style().set_property("width", "200px").unwrap();
    window_resize();
    assert_eq!(canvas.width(), 320);

    canvas.remove();
}

#[wasm_bindgen_test]
fn renderer_resize_is_idempotent() {
    let canvas: HtmlCanvasElement = document().create_element("canvas").unwrap().dyn_into().unwrap();
    let hero = HeroModel::new(Viewport::new(300, 150));
    let Ok(mut renderer) = Renderer::new(&canvas, hero.scene()) else {
        // headless browsers without WebGL2
        return;
    };

    let viewport = Viewport::new(640, 360);
    renderer.set_size(viewport);
    renderer.set_size(viewport);
    assert_eq!(renderer.size(), Some(viewport));
    assert_eq!((canvas.width(), canvas.height()), (640, 360));
    assert_eq!(canvas.style().get_property_value("width").unwrap(), "640px");
    renderer.render(hero.scene(), hero.camera());
}
