use std::collections::HashMap;

use shapekit_core::ShapeError;
use shapekit_designer::designer_state::DesignerState;
use shapekit_designer::factory::IdGenerator;
use shapekit_designer::history::DEFAULT_UNDO_CAPACITY;
use shapekit_designer::model::ScaleFactor;

fn state() -> DesignerState {
    DesignerState::with_id_generator(IdGenerator::Sequential { next: 1 })
}

fn dims(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_undo_add_removes_shape() {
    let mut state = state();
    state
        .add_shape("circle", &dims(&[("radius", 3.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    assert_eq!(state.shape_count(), 1);
    assert!(state.can_undo());

    assert!(state.undo().unwrap());
    assert!(state.is_empty());
    assert!(!state.can_undo());
    assert!(state.selected_shape().is_none());
}

#[test]
fn test_undo_remove_restores_equivalent_shape() {
    let mut state = state();
    state
        .add_shape("rectangle", &dims(&[("width", 10.0), ("height", 4.0)]), 2.0, 3.0, "#ff8800")
        .unwrap();
    state.remove_shape("shape_1").unwrap();
    assert!(state.is_empty());

    assert!(state.undo().unwrap());
    assert_eq!(state.shape_count(), 1);
    let restored = state.shapes().next().unwrap();
    // The restored shape is equivalent but carries a regenerated id.
    assert_ne!(restored.id(), "shape_1");
    assert_eq!(restored.dimensions(), vec![("width", 10.0), ("height", 4.0)]);
    assert_eq!(restored.position().x(), 2.0);
    assert_eq!(restored.color(), "#ff8800");
}

#[test]
fn test_undo_modify_restores_prior_values() {
    let mut state = state();
    state
        .add_shape("rectangle", &dims(&[("width", 10.0), ("height", 4.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    state.set_shape_dimension("shape_1", "width", 25.0).unwrap();
    state.set_shape_color("shape_1", "#ff0000").unwrap();

    assert!(state.undo().unwrap());
    let shape = state.shapes().next().unwrap();
    assert_eq!(shape.dimensions(), vec![("width", 25.0), ("height", 4.0)]);
    assert_eq!(shape.color(), "#00d4ff");

    assert!(state.undo().unwrap());
    let shape = state.shapes().next().unwrap();
    assert_eq!(shape.dimensions(), vec![("width", 10.0), ("height", 4.0)]);
}

#[test]
fn test_undo_scale() {
    let mut state = state();
    state
        .add_shape("triangle", &dims(&[("base", 6.0), ("height", 4.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    state
        .scale_shape("shape_1", ScaleFactor::Uniform(2.0))
        .unwrap();
    let scaled = state.shapes().next().unwrap().dimensions();
    assert_eq!(scaled, vec![("base", 12.0), ("height", 8.0)]);

    assert!(state.undo().unwrap());
    let shape = state.shapes().next().unwrap();
    assert_eq!(shape.dimensions(), vec![("base", 6.0), ("height", 4.0)]);
    // Dependent sides follow the restored base and height.
    assert!((shape.perimeter() - 16.0).abs() < 1e-9);
}

#[test]
fn test_actions_behind_a_restored_remove_become_unreachable() {
    let mut state = state();
    state
        .add_shape("circle", &dims(&[("radius", 3.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    state.set_shape_dimension("shape_1", "radius", 5.0).unwrap();
    state.remove_shape("shape_1").unwrap();

    // Undo of the removal restores the shape under a regenerated id.
    assert!(state.undo().unwrap());
    assert_eq!(state.shapes().next().unwrap().id(), "shape_2");

    // Older actions still name the retired id, so each further undo
    // surfaces the missing shape and consumes nothing.
    let err = state.undo().unwrap_err();
    assert!(matches!(err, ShapeError::ShapeNotFound { .. }));
    let err = state.undo().unwrap_err();
    assert!(matches!(err, ShapeError::ShapeNotFound { .. }));
    assert!(state.can_undo());
    assert_eq!(state.undo_depth(), 2);

    // Clearing the history is the recovery path.
    state.clear_history();
    assert!(!state.can_undo());
}

#[test]
fn test_undo_on_empty_history_is_a_no_op() {
    let mut state = state();
    assert!(!state.undo().unwrap());
}

#[test]
fn test_failed_operation_records_nothing() {
    let mut state = state();
    state
        .add_shape("circle", &dims(&[("radius", 3.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    let depth = state.undo_depth();

    assert!(state.set_shape_dimension("shape_1", "radius", -1.0).is_err());
    assert!(state.set_shape_color("shape_1", "purple").is_err());
    assert!(state.remove_shape("ghost").is_err());

    assert_eq!(state.undo_depth(), depth);
    let shape = state.shapes().next().unwrap();
    assert_eq!(shape.dimensions(), vec![("radius", 3.0)]);
}

#[test]
fn test_history_bounded_to_capacity() {
    let mut state = state();
    state
        .add_shape("circle", &dims(&[("radius", 1.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    for i in 0..DEFAULT_UNDO_CAPACITY + 10 {
        state
            .set_shape_dimension("shape_1", "radius", 1.0 + i as f64)
            .unwrap();
    }
    assert_eq!(state.undo_depth(), DEFAULT_UNDO_CAPACITY);

    // Drain the ring; the oldest actions (including the add) are gone.
    while state.can_undo() {
        assert!(state.undo().unwrap());
    }
    assert_eq!(state.shape_count(), 1);
    let radius = state.shapes().next().unwrap().dimensions()[0].1;
    assert_eq!(radius, 10.0);
}

#[test]
fn test_clear_all_is_undoable_per_shape() {
    let mut state = state();
    for radius in [1.0, 2.0, 3.0] {
        state
            .add_shape("circle", &dims(&[("radius", radius)]), 0.0, 0.0, "#00d4ff")
            .unwrap();
    }
    state.clear_all();
    assert!(state.is_empty());

    assert!(state.undo().unwrap());
    assert_eq!(state.shape_count(), 1);
    assert!(state.undo().unwrap());
    assert!(state.undo().unwrap());
    assert_eq!(state.shape_count(), 3);
}

#[test]
fn test_clear_history() {
    let mut state = state();
    state
        .add_shape("circle", &dims(&[("radius", 3.0)]), 0.0, 0.0, "#00d4ff")
        .unwrap();
    state.clear_history();
    assert!(!state.can_undo());
    assert_eq!(state.shape_count(), 1);
}
