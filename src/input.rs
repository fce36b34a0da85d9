use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Pointer and keyboard input relevant to the canvas, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while a canvas gesture is in progress
    PointerMove { pos: Pos2 },
    /// Primary button released, ending the gesture
    PointerUp { pos: Pos2 },
    /// Key pressed while no text field has focus
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Turns raw egui input into canvas events.
///
/// A gesture only starts on a press inside the canvas, but once started it
/// keeps receiving moves and its release even if the pointer leaves.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to canvas coordinates.
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Pointer position over the canvas, for the status bar.
    pub fn hover_pos(&self, ctx: &Context) -> Option<Pos2> {
        ctx.input(|i| i.pointer.hover_pos())
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| self.to_canvas(pos))
    }

    /// Stop tracking the canvas while something else owns the pointer.
    ///
    /// A gesture cut short this way ends with a `PointerUp` at the last
    /// known position, so nothing downstream waits for a release that this
    /// handler will never see.
    pub fn suspend(&mut self) -> Option<InputEvent> {
        if !std::mem::take(&mut self.gesture_active) {
            return None;
        }
        let end = self.last_pointer_pos.take().unwrap_or(self.canvas_rect.min);
        Some(InputEvent::PointerUp { pos: self.to_canvas(end) })
    }

    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input(|input| {
            let mut events = Vec::new();
            let pos = input.pointer.interact_pos();

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos.filter(|p| self.canvas_rect.contains(*p)) {
                    self.gesture_active = true;
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerDown { pos: self.to_canvas(pos) });
                }
            }

            if self.gesture_active {
                if let Some(pos) = pos.filter(|p| Some(*p) != self.last_pointer_pos) {
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerMove { pos: self.to_canvas(pos) });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    self.gesture_active = false;
                    let end = pos.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
                    events.push(InputEvent::PointerUp { pos: self.to_canvas(end) });
                }
            }

            if !wants_keyboard {
                for event in &input.raw.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                }
            }

            events
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(handler: &mut InputHandler, ctx: &Context, events: Vec<egui::Event>) -> Vec<InputEvent> {
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| out = handler.process_input(ctx));
        out
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_press_drag_release_in_canvas_coordinates() {
        let ctx = Context::default();
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(400.0, 300.0));
        let mut handler = InputHandler::new(rect);

        let down = frame(
            &mut handler,
            &ctx,
            vec![egui::Event::PointerMoved(Pos2::new(110.0, 60.0)), button(Pos2::new(110.0, 60.0), true)],
        );
        assert_eq!(down, vec![InputEvent::PointerDown { pos: Pos2::new(10.0, 10.0) }]);

        let moved = frame(&mut handler, &ctx, vec![egui::Event::PointerMoved(Pos2::new(130.0, 70.0))]);
        assert_eq!(moved, vec![InputEvent::PointerMove { pos: Pos2::new(30.0, 20.0) }]);

        let up = frame(&mut handler, &ctx, vec![button(Pos2::new(130.0, 70.0), false)]);
        assert_eq!(up, vec![InputEvent::PointerUp { pos: Pos2::new(30.0, 20.0) }]);
    }

    #[test]
    fn test_suspend_ends_the_gesture() {
        let ctx = Context::default();
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(400.0, 300.0));
        let mut handler = InputHandler::new(rect);
        assert_eq!(handler.suspend(), None);

        let _ = frame(
            &mut handler,
            &ctx,
            vec![egui::Event::PointerMoved(Pos2::new(110.0, 60.0)), button(Pos2::new(110.0, 60.0), true)],
        );
        assert_eq!(handler.suspend(), Some(InputEvent::PointerUp { pos: Pos2::new(10.0, 10.0) }));

        // Release and further motion arrive while suspended, then input resumes
        let _ = ctx.run(
            egui::RawInput {
                events: vec![button(Pos2::new(110.0, 60.0), false)],
                ..Default::default()
            },
            |_| {},
        );
        let resumed = frame(&mut handler, &ctx, vec![egui::Event::PointerMoved(Pos2::new(150.0, 90.0))]);
        assert!(resumed.is_empty(), "{resumed:?}");
        assert_eq!(handler.suspend(), None);
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let ctx = Context::default();
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(400.0, 300.0));
        let mut handler = InputHandler::new(rect);

        let events = frame(
            &mut handler,
            &ctx,
            vec![egui::Event::PointerMoved(Pos2::new(10.0, 10.0)), button(Pos2::new(10.0, 10.0), true)],
        );
        assert!(events.is_empty());
    }
}
