use eframe_whiteboard::element::factory;
use eframe_whiteboard::{Command, DrawingState, ElementId, ElementUpdate};
use egui::{pos2, vec2, Color32, Pos2};

fn add_rect(state: &mut DrawingState, min: Pos2, max: Pos2) -> ElementId {
    state.add_element(factory::rectangle(state.current_style(), min, max))
}

fn ids(state: &DrawingState) -> Vec<ElementId> {
    state.elements().iter().map(|element| element.id()).collect()
}

#[test]
fn rectangle_bounds_are_normalized() {
    let mut state = DrawingState::new();
    let id = add_rect(&mut state, pos2(50.0, 40.0), pos2(10.0, 10.0));

    let bounds = state.element(id).unwrap().bounds().unwrap();
    assert_eq!(bounds.min, pos2(10.0, 10.0));
    assert_eq!(bounds.size(), vec2(40.0, 30.0));
}

#[test]
fn circle_bounds_enclose_the_radius() {
    let mut state = DrawingState::new();
    let id = state.add_element(factory::circle(
        state.current_style(),
        pos2(0.0, 0.0),
        pos2(3.0, 4.0),
    ));

    let bounds = state.element(id).unwrap().bounds().unwrap();
    assert_eq!(bounds.min, pos2(-5.0, -5.0));
    assert_eq!(bounds.size(), vec2(10.0, 10.0));
}

#[test]
fn new_elements_take_the_current_style() {
    let mut state = DrawingState::new();
    state.execute(Command::SetColor(Color32::RED));
    state.execute(Command::SetStrokeWidth(7.0));
    let id = add_rect(&mut state, pos2(0.0, 0.0), pos2(5.0, 5.0));

    let style = state.element(id).unwrap().style();
    assert_eq!(style.color, Color32::RED);
    assert_eq!(style.stroke_width, 7.0);
}

#[test]
fn undo_then_redo_restores_the_same_elements() {
    let mut state = DrawingState::new();
    add_rect(&mut state, pos2(0.0, 0.0), pos2(5.0, 5.0));
    add_rect(&mut state, pos2(10.0, 0.0), pos2(15.0, 5.0));
    let before = state.elements().to_vec();

    state.execute(Command::Undo);
    assert_eq!(state.elements().len(), 1);
    state.execute(Command::Redo);

    assert_eq!(state.elements(), before.as_slice());
}

#[test]
fn undo_and_redo_stop_at_either_end() {
    let mut state = DrawingState::new();
    add_rect(&mut state, pos2(0.0, 0.0), pos2(5.0, 5.0));

    state.undo();
    state.undo();
    assert!(state.elements().is_empty());
    assert_eq!(state.history_index(), 0);
    assert!(!state.can_undo());

    state.redo();
    state.redo();
    assert_eq!(state.elements().len(), 1);
    assert!(!state.can_redo());
}

#[test]
fn a_new_action_discards_the_redo_branch() {
    let mut state = DrawingState::new();
    add_rect(&mut state, pos2(0.0, 0.0), pos2(5.0, 5.0));
    add_rect(&mut state, pos2(10.0, 0.0), pos2(15.0, 5.0));
    state.undo();

    add_rect(&mut state, pos2(20.0, 0.0), pos2(25.0, 5.0));

    assert!(!state.can_redo());
    assert_eq!(state.history_len(), 3);
    assert_eq!(state.history_index(), 2);
}

#[test]
fn deleting_the_middle_element_keeps_the_order_of_the_rest() {
    let mut state = DrawingState::new();
    let a = add_rect(&mut state, pos2(0.0, 0.0), pos2(5.0, 5.0));
    let b = add_rect(&mut state, pos2(10.0, 0.0), pos2(15.0, 5.0));
    let c = add_rect(&mut state, pos2(20.0, 0.0), pos2(25.0, 5.0));
    state.execute(Command::SelectElements(vec![b]));

    state.execute(Command::DeleteElements(vec![b]));

    assert_eq!(ids(&state), vec![a, c]);
    assert!(state.selected_elements().is_empty());
    assert_eq!(state.history_len(), 5);

    state.undo();
    assert_eq!(ids(&state), vec![a, b, c]);
}

#[test]
fn live_updates_collapse_into_one_history_entry() {
    let mut state = DrawingState::new();
    let id = add_rect(&mut state, pos2(0.0, 0.0), pos2(10.0, 10.0));
    let len = state.history_len();

    for _ in 0..5 {
        let element = state.element(id).unwrap().clone();
        state.execute(Command::UpdateElements(vec![(
            id,
            ElementUpdate::translation(&element, vec2(2.0, 0.0)),
        )]));
    }
    assert_eq!(state.history_len(), len);

    state.execute(Command::CommitDrag);
    assert_eq!(state.history_len(), len + 1);
    assert_eq!(state.element(id).unwrap().bounds().unwrap().min.x, 10.0);

    state.undo();
    assert_eq!(state.element(id).unwrap().bounds().unwrap().min.x, 0.0);
}

#[test]
fn zoom_is_clamped() {
    let mut state = DrawingState::new();
    state.execute(Command::SetZoom(50.0));
    assert_eq!(state.zoom(), 5.0);
    state.execute(Command::SetZoom(0.01));
    assert_eq!(state.zoom(), 0.1);
}

#[test]
fn view_changes_are_not_undoable() {
    let mut state = DrawingState::new();
    state.execute_all([
        Command::SetZoom(2.0),
        Command::SetPan(vec2(30.0, -10.0)),
        Command::SetColor(Color32::BLUE),
    ]);

    assert_eq!(state.history_len(), 1);
    assert!(!state.can_undo());
    assert_eq!(state.pan(), vec2(30.0, -10.0));
}

#[test]
fn hit_testing_picks_the_topmost_element() {
    let mut state = DrawingState::new();
    let bottom = add_rect(&mut state, pos2(0.0, 0.0), pos2(100.0, 100.0));
    let top = add_rect(&mut state, pos2(50.0, 50.0), pos2(150.0, 150.0));

    assert_eq!(state.get_element_at(pos2(75.0, 75.0)).map(|e| e.id()), Some(top));
    assert_eq!(state.get_element_at(pos2(10.0, 10.0)).map(|e| e.id()), Some(bottom));
    assert!(state.get_element_at(pos2(500.0, 500.0)).is_none());
}
