use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Viewport};

/// Kinds of host events a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    PointerOver,
    Scroll,
    Resize,
}

/// Identifies one pointer (mouse, pen, or a single touch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The mouse, or the first touch
    pub const PRIMARY: PointerId = PointerId(1);
}

impl Default for PointerId {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// What an element in an event path is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    Link,
    Button,
    #[default]
    Generic,
}

/// One node of the path from an event target up to the document root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Element {
    #[serde(default)]
    pub role: ElementRole,
    /// Carries the `data-hover` marker
    #[serde(default)]
    pub hover_marked: bool,
}

impl Element {
    pub fn link() -> Self {
        Self {
            role: ElementRole::Link,
            hover_marked: false,
        }
    }

    pub fn button() -> Self {
        Self {
            role: ElementRole::Button,
            hover_marked: false,
        }
    }

    pub fn generic() -> Self {
        Self::default()
    }

    /// A plain node explicitly marked as interactive
    pub fn marked() -> Self {
        Self {
            role: ElementRole::Generic,
            hover_marked: true,
        }
    }

    /// Links, buttons and marked nodes enlarge the cursor
    pub fn is_interactive(&self) -> bool {
        self.hover_marked || matches!(self.role, ElementRole::Link | ElementRole::Button)
    }
}

/// Pointer input in viewport coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PointerEvent {
    #[serde(default)]
    pub pointer_id: PointerId,
    pub position: Point,
    /// Target first, document root last
    #[serde(default)]
    pub path: Vec<Element>,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pointer_id: PointerId::PRIMARY,
            position: Point::new(x, y),
            path: Vec::new(),
        }
    }

    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn with_path(mut self, path: Vec<Element>) -> Self {
        self.path = path;
        self
    }

    /// Whether any node from the target up to the root is interactive
    pub fn over_interactive(&self) -> bool {
        self.path.iter().any(Element::is_interactive)
    }
}

/// Raw input delivered by the host environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    PointerLeave(PointerEvent),
    PointerOver(PointerEvent),
    Scroll { scroll_y: f64 },
    Resize { viewport: Viewport },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerDown(_) => EventKind::PointerDown,
            HostEvent::PointerMove(_) => EventKind::PointerMove,
            HostEvent::PointerUp(_) => EventKind::PointerUp,
            HostEvent::PointerLeave(_) => EventKind::PointerLeave,
            HostEvent::PointerOver(_) => EventKind::PointerOver,
            HostEvent::Scroll { .. } => EventKind::Scroll,
            HostEvent::Resize { .. } => EventKind::Resize,
        }
    }

    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            HostEvent::PointerDown(e)
            | HostEvent::PointerMove(e)
            | HostEvent::PointerUp(e)
            | HostEvent::PointerLeave(e)
            | HostEvent::PointerOver(e) => Some(e),
            HostEvent::Scroll { .. } | HostEvent::Resize { .. } => None,
        }
    }
}

/// What an element-level handler asks the host to do with an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The handler acted on the event
    pub handled: bool,
    /// Suppress the host's default action (text/image selection on drag)
    pub prevent_default: bool,
}

impl EventResponse {
    pub const IGNORED: EventResponse = EventResponse {
        handled: false,
        prevent_default: false,
    };

    pub const HANDLED: EventResponse = EventResponse {
        handled: true,
        prevent_default: false,
    };

    pub const CAPTURED: EventResponse = EventResponse {
        handled: true,
        prevent_default: true,
    };
}

/// A click bubbling from its target toward the root
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickEvent {
    pub pointer_id: PointerId,
    pub position: Point,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pointer_id: PointerId::PRIMARY,
            position: Point::new(x, y),
            ..Default::default()
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_roles() {
        assert!(Element::link().is_interactive());
        assert!(Element::button().is_interactive());
        assert!(Element::marked().is_interactive());
        assert!(!Element::generic().is_interactive());
    }

    #[test]
    fn test_over_interactive_checks_ancestors() {
        let event = PointerEvent::at(0.0, 0.0).with_path(vec![
            Element::generic(),
            Element::generic(),
            Element::marked(),
            Element::generic(),
        ]);
        assert!(event.over_interactive());

        let plain = PointerEvent::at(0.0, 0.0).with_path(vec![Element::generic()]);
        assert!(!plain.over_interactive());
    }

    #[test]
    fn test_event_json_shape() {
        let event: HostEvent =
            serde_json::from_str(r#"{"type":"scroll","scroll_y":120.0}"#).unwrap();
        assert_eq!(event.kind(), EventKind::Scroll);

        let event: HostEvent = serde_json::from_str(
            r#"{"type":"pointer_move","position":{"x":3.0,"y":4.0}}"#,
        )
        .unwrap();
        assert_eq!(event.pointer().map(|p| p.pointer_id), Some(PointerId::PRIMARY));
    }
}
