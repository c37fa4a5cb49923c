//! Pointer interaction strategies attached to actors.

use std::fmt;

use crate::{
    geometry::point::Point,
    scene::{actor::ActorState, graph::ActorId},
};

/// Pointer input in view (root) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Press { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Release { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            Self::Move { x, y } | Self::Press { x, y } | Self::Drag { x, y } | Self::Release { x, y } => {
                Point::new(x, y)
            }
        }
    }
}

/// What an interaction sees: the event kind plus the pointer in the actor's parent and local
/// spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pointer {
    Enter,
    Exit,
    Press { parent: Point, local: Point },
    Drag { parent: Point, local: Point },
    Release { parent: Point, local: Point, inside: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ButtonState {
    #[default]
    Normal,
    Over,
    Pressed,
    Disabled,
}

pub type ClickHandler = Box<dyn FnMut(ActorId)>;

#[derive(Default)]
pub struct Button {
    state: ButtonState,
    on_click: Option<ClickHandler>,
    clicks: u32,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("state", &self.state)
            .field("clicks", &self.clicks)
            .finish_non_exhaustive()
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, handler: impl FnMut(ActorId) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state = if enabled {
            ButtonState::Normal
        } else {
            ButtonState::Disabled
        };
    }

    fn handle(&mut self, id: ActorId, pointer: &Pointer) {
        if self.state == ButtonState::Disabled {
            return;
        }
        self.state = match *pointer {
            Pointer::Enter => ButtonState::Over,
            Pointer::Exit => ButtonState::Normal,
            Pointer::Press { .. } => ButtonState::Pressed,
            Pointer::Drag { .. } => self.state,
            Pointer::Release { inside, .. } => {
                if inside && self.state == ButtonState::Pressed {
                    self.clicks += 1;
                    if let Some(on_click) = &mut self.on_click {
                        on_click(id);
                    }
                }
                if inside {
                    ButtonState::Over
                } else {
                    ButtonState::Normal
                }
            }
        };
    }
}

/// Strategy deciding how an actor reacts to the pointer.
#[derive(Debug)]
pub enum Interaction {
    /// Follow the pointer while pressed.
    Drag { grab: Option<Point> },
    Button(Button),
}

impl Interaction {
    pub fn drag() -> Self {
        Self::Drag { grab: None }
    }

    pub fn button(button: Button) -> Self {
        Self::Button(button)
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Self::Button(b) => Some(b),
            Self::Drag { .. } => None,
        }
    }

    pub(crate) fn handle(&mut self, id: ActorId, state: &mut ActorState, pointer: &Pointer) {
        match self {
            Self::Drag { grab } => match *pointer {
                Pointer::Press { parent, .. } => *grab = Some(parent),
                Pointer::Drag { parent, .. } => {
                    if let Some(last) = grab.replace(parent) {
                        let (dx, dy) = (parent.x - last.x, parent.y - last.y);
                        state.set_location(state.x() + dx, state.y() + dy);
                    }
                }
                Pointer::Release { .. } => *grab = None,
                Pointer::Enter | Pointer::Exit => {}
            },
            Self::Button(button) => button.handle(id, pointer),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/interaction.rs"]
mod tests;
