use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::view::ViewTransform;

/// Where a pointer event happened, in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Canvas-local screen position (origin at the canvas' top-left corner).
    pub screen: Pos2,
    /// The same position mapped through the view transform.
    pub world: Pos2,
}

impl InputLocation {
    pub fn new(screen: Pos2, view: &ViewTransform) -> Self {
        Self {
            screen,
            world: view.screen_to_world(screen),
        }
    }
}

/// Canvas input in the vocabulary of the interaction state machine.
///
/// Only the primary button is reported and only while the pointer is over the
/// canvas. Leaving the canvas ends any gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    /// The pointer left the canvas (or the window) at its last known location.
    PointerLeave { location: InputLocation },
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Converts raw egui input into [`InputEvent`]s for one canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pointer_inside: bool,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's raw events. Keys are dropped while a text field has
    /// keyboard focus. Presses over floating windows and popups, or inside
    /// `obstructions`, do not start a gesture.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        obstructions: &[Rect],
        view: &ViewTransform,
    ) -> Vec<InputEvent> {
        let keyboard_free = !ctx.wants_keyboard_input();
        let raw_events: Vec<egui::Event> = ctx.input(|input| input.raw.events.clone())
            .into_iter()
            .filter(|event| !press_over_floating_layer(ctx, event))
            .collect();
        self.translate(&raw_events, canvas_rect, obstructions, view, keyboard_free)
    }

    /// Forgets a gesture in progress, so its release is not reported.
    pub fn cancel_gesture(&mut self) {
        self.gesture_active = false;
    }

    /// Context-free core of [`Self::process_input`].
    pub fn translate(
        &mut self,
        raw_events: &[egui::Event],
        canvas_rect: Rect,
        obstructions: &[Rect],
        view: &ViewTransform,
        keyboard_free: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let locate = |pos: Pos2| InputLocation::new((pos - canvas_rect.min).to_pos2(), view);

        for event in raw_events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let inside = canvas_rect.contains(*pos);
                    if inside {
                        events.push(InputEvent::PointerMove {
                            location: locate(*pos),
                        });
                    } else if self.pointer_inside {
                        events.push(InputEvent::PointerLeave {
                            location: locate(self.last_pointer_pos.unwrap_or(*pos)),
                        });
                        self.gesture_active = false;
                    }
                    self.pointer_inside = inside;
                    self.last_pointer_pos = Some(*pos);
                }
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    let blocked = obstructions.iter().any(|rect| rect.contains(*pos));
                    if *pressed && canvas_rect.contains(*pos) && !blocked {
                        self.gesture_active = true;
                        events.push(InputEvent::PointerDown {
                            location: locate(*pos),
                        });
                    } else if !*pressed && self.gesture_active {
                        self.gesture_active = false;
                        events.push(InputEvent::PointerUp {
                            location: locate(*pos),
                        });
                    }
                }
                egui::Event::PointerGone => {
                    if let Some(pos) = self.last_pointer_pos.take() {
                        if self.pointer_inside || self.gesture_active {
                            events.push(InputEvent::PointerLeave {
                                location: locate(pos),
                            });
                        }
                    }
                    self.pointer_inside = false;
                    self.gesture_active = false;
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if keyboard_free => {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
                _ => {}
            }
        }

        events
    }
}

/// Windows, menus and popups live above the background layer the canvas
/// panel paints on.
fn press_over_floating_layer(ctx: &Context, event: &egui::Event) -> bool {
    match event {
        egui::Event::PointerButton {
            pos, pressed: true, ..
        } => ctx
            .layer_id_at(*pos)
            .is_some_and(|layer| layer.order != egui::Order::Background),
        _ => false,
    }
}
