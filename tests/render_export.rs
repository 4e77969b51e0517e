use std::collections::HashSet;

use eframe_whiteboard::element::factory;
use eframe_whiteboard::export::{self, ExportFormat, ExportOptions, ExportQuality};
use eframe_whiteboard::renderer::{self, DrawCommand, RenderInput};
use eframe_whiteboard::{DrawingState, Tool, ViewTransform};
use egui::{pos2, vec2};

fn drawing() -> DrawingState {
    let mut state = DrawingState::new();
    let style = state.current_style();
    state.add_element(factory::rectangle(style, pos2(0.0, 0.0), pos2(100.0, 50.0)));
    state.add_element(factory::circle(style, pos2(200.0, 200.0), pos2(230.0, 240.0)));
    state.add_element(factory::text(style, pos2(10.0, 300.0), "Hi & bye"));
    state
}

fn input<'a>(state: &'a DrawingState, selected: &'a HashSet<eframe_whiteboard::ElementId>) -> RenderInput<'a> {
    RenderInput {
        elements: state.elements(),
        selected,
        hovered: None,
        tool: Tool::Select,
        preview: None,
        view: state.view(),
        viewport: vec2(800.0, 600.0),
        grid: None,
    }
}

#[test]
fn rendering_is_a_pure_function_of_its_input() {
    let state = drawing();
    let selected = HashSet::new();
    let first = renderer::render(&input(&state, &selected));
    let second = renderer::render(&input(&state, &selected));
    assert_eq!(first, second);
}

#[test]
fn frame_starts_with_clear_and_keeps_paint_order() {
    let state = drawing();
    let selected = HashSet::new();
    let frame = renderer::render(&input(&state, &selected));

    assert!(matches!(frame.commands[0], DrawCommand::Clear(_)));
    let rect_at = frame
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Rect { .. }))
        .unwrap();
    let circle_at = frame
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Circle { .. }))
        .unwrap();
    assert!(rect_at < circle_at);
}

#[test]
fn selection_adds_dashed_outline_on_top() {
    let state = drawing();
    let selected: HashSet<_> = [state.elements()[1].id()].into_iter().collect();
    let frame = renderer::render(&input(&state, &selected));

    let dashed: Vec<_> = frame
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { dashed: true, .. }))
        .collect();
    assert_eq!(dashed.len(), 1);
    assert!(!matches!(frame.commands.last(), Some(DrawCommand::Text { .. })));
}

#[test]
fn frame_carries_the_view_it_was_rendered_with() {
    let mut state = drawing();
    state.set_zoom(2.0);
    state.set_pan(vec2(5.0, 5.0));
    let selected = HashSet::new();
    let frame = renderer::render(&input(&state, &selected));

    assert_eq!(frame.view, ViewTransform::new(2.0, vec2(5.0, 5.0)));
}

#[test]
fn export_ignores_view_and_selection() {
    let mut state = drawing();
    let options = ExportOptions {
        format: ExportFormat::Svg,
        quality: ExportQuality::Low,
        ..Default::default()
    };
    let plain = export::export(state.elements(), &options).unwrap();

    state.set_zoom(3.0);
    state.select_all();
    let zoomed = export::export(state.elements(), &options).unwrap();

    assert_eq!(plain, zoomed);
    let svg = String::from_utf8(plain).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Hi &amp; bye"));
}

#[test]
fn every_format_produces_bytes() {
    let state = drawing();
    for format in ExportFormat::ALL {
        let options = ExportOptions {
            format,
            quality: ExportQuality::Low,
            ..Default::default()
        };
        let bytes = export::export(state.elements(), &options).unwrap();
        assert!(!bytes.is_empty(), "{format:?} export was empty");
    }
}

#[test]
fn empty_whiteboard_exports_default_page() {
    let area = export::export_area(&[]);
    assert_eq!(area.size(), export::EMPTY_EXPORT_SIZE);
}
