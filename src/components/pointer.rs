//! Global pointer listeners
//!
//! Window-level pointer events (mouse-down, touch-start) fanned out to every
//! registered listener. Components attach on mount and detach on unmount.

use tracing::debug;

/// A point in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Whether `point` lies inside (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    MouseDown,
    TouchStart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn mouse_down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::MouseDown,
            position: Point::new(x, y),
        }
    }

    pub fn touch_start(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::TouchStart,
            position: Point::new(x, y),
        }
    }
}

/// Handle returned by [`PointerEvents::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PointerEvent)>;

/// Window-level pointer listener registry
#[derive(Default)]
pub struct PointerEvents {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: impl FnMut(&PointerEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Detach a listener; `false` if it was not attached
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an event to every listener in registration order
    pub fn dispatch(&mut self, event: &PointerEvent) {
        debug!(?event, listeners = self.listeners.len(), "Pointer event");
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn bounds_include_edges() {
        let bounds = Bounds::new(10.0, 10.0, 100.0, 40.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(110.0, 50.0)));
        assert!(!bounds.contains(Point::new(9.9, 20.0)));
        assert!(!bounds.contains(Point::new(50.0, 50.1)));
    }

    #[test]
    fn listeners_receive_until_removed() {
        let mut events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let id = events.add_listener(move |_| counter.set(counter.get() + 1));

        events.dispatch(&PointerEvent::mouse_down(0.0, 0.0));
        events.dispatch(&PointerEvent::touch_start(1.0, 1.0));
        assert_eq!(hits.get(), 2);

        assert!(events.remove_listener(id));
        assert!(!events.remove_listener(id));
        events.dispatch(&PointerEvent::mouse_down(0.0, 0.0));
        assert_eq!(hits.get(), 2);
        assert!(events.is_empty());
    }
}
