//! Click bubbling for controls nested inside a draggable viewport
//!
//! An item card navigates on click while its inner action button does its own
//! thing. The button is wrapped in a [`ClickShield`], which halts bubbling so
//! the card's handler never sees the click.

use serde::{Deserialize, Serialize};

use crate::host::ClickEvent;

/// Part of a gallery card a click lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The card body, which navigates
    Card,
    /// The action button nested inside the card
    Action,
}

type ClickCallback = Box<dyn FnMut(&mut ClickEvent)>;

/// Stops a click from reaching ancestor handlers, then runs its own action
pub struct ClickShield {
    action: Option<ClickCallback>,
}

impl ClickShield {
    pub fn new() -> Self {
        Self { action: None }
    }

    pub fn with_action<F>(action: F) -> Self
    where
        F: FnMut(&mut ClickEvent) + 'static,
    {
        Self {
            action: Some(Box::new(action)),
        }
    }

    pub fn intercept(&mut self, event: &mut ClickEvent) {
        event.stop_propagation();
        if let Some(action) = self.action.as_mut() {
            action(event);
        }
    }
}

impl Default for ClickShield {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClickShield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickShield")
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

enum Layer {
    Handler(ClickCallback),
    Shield(ClickShield),
}

/// Ordered chain of click handlers, innermost first
#[derive(Default)]
pub struct ClickDispatcher {
    layers: Vec<(String, Layer)>,
}

impl ClickDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a handler one level further out than the previous one
    pub fn push<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: FnMut(&mut ClickEvent) + 'static,
    {
        self.layers.push((name.into(), Layer::Handler(Box::new(handler))));
        self
    }

    pub fn push_shield(&mut self, name: impl Into<String>, shield: ClickShield) -> &mut Self {
        self.layers.push((name.into(), Layer::Shield(shield)));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Bubble `event` outward, returning the names of the layers that ran
    pub fn dispatch(&mut self, event: &mut ClickEvent) -> Vec<String> {
        let mut fired = Vec::new();
        for (name, layer) in self.layers.iter_mut() {
            match layer {
                Layer::Handler(handler) => handler(event),
                Layer::Shield(shield) => shield.intercept(event),
            }
            fired.push(name.clone());
            if event.is_propagation_stopped() {
                tracing::trace!("click propagation stopped at {}", name);
                break;
            }
        }
        fired
    }
}

impl std::fmt::Debug for ClickDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.layers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("ClickDispatcher").field("layers", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_shield_stops_bubbling() {
        let navigated = Rc::new(Cell::new(false));
        let pressed = Rc::new(Cell::new(false));

        let mut chain = ClickDispatcher::new();
        let p = pressed.clone();
        chain.push_shield("action", ClickShield::with_action(move |_| p.set(true)));
        let n = navigated.clone();
        chain.push("card", move |_| n.set(true));

        let fired = chain.dispatch(&mut ClickEvent::at(10.0, 10.0));
        assert_eq!(fired, vec!["action".to_string()]);
        assert!(pressed.get());
        assert!(!navigated.get());
    }

    #[test]
    fn test_unshielded_click_bubbles() {
        let count = Rc::new(Cell::new(0));
        let mut chain = ClickDispatcher::new();
        for name in ["label", "card", "gallery"] {
            let c = count.clone();
            chain.push(name, move |_| c.set(c.get() + 1));
        }
        let fired = chain.dispatch(&mut ClickEvent::at(0.0, 0.0));
        assert_eq!(fired.len(), 3);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_shield_marks_event() {
        let mut shield = ClickShield::new();
        let mut event = ClickEvent::at(0.0, 0.0);
        shield.intercept(&mut event);
        assert!(event.is_propagation_stopped());
        assert!(!event.is_default_prevented());
    }
}
