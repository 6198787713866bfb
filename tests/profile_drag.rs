use portfolio_decor::camera::Viewport;
use portfolio_decor::decor::{DragState, ProfileModel, IDLE_SPIN};
use portfolio_decor::frame::{Decoration, Stepper};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn dragging_turns_the_head_and_pauses_the_spin() {
    let mut model = ProfileModel::new(Viewport::new(300, 300));
    let mut clock = Stepper::sixty_hz();

    model.pointer_down(0.0, 0.0);
    model.pointer_move(10.0, 5.0);
    clock.step(&mut model);

    let rotation = model.head_rotation();
    assert!(close(rotation.y, 0.1), "y = {}", rotation.y);
    assert!(close(rotation.x, 0.05), "x = {}", rotation.x);
    assert_eq!(model.state(), DragState::Dragging { x: 10.0, y: 5.0 });
}

#[test]
fn releasing_resumes_the_idle_spin() {
    let mut model = ProfileModel::new(Viewport::new(300, 300));
    let mut clock = Stepper::sixty_hz();

    model.pointer_down(0.0, 0.0);
    model.pointer_move(10.0, 5.0);
    model.pointer_up();
    let before = model.head_rotation();
    clock.step(&mut model);
    let after = model.head_rotation();

    assert!(close(after.y - before.y, IDLE_SPIN));
    assert_eq!(after.x, before.x);
}

#[test]
fn consecutive_moves_accumulate_from_the_last_position() {
    let mut model = ProfileModel::new(Viewport::new(300, 300));
    model.pointer_down(100.0, 100.0);
    model.pointer_move(110.0, 100.0);
    model.pointer_move(120.0, 90.0);

    let rotation = model.head_rotation();
    assert!(close(rotation.y, 0.2));
    assert!(close(rotation.x, -0.1));
    // camera untouched by input
    assert_eq!(model.camera().position.z, 2.5);
}
