//! Event notification
//!
//! One callback slot per event: registering again replaces the previous
//! callback, and `off` clears the slot. Callbacks run synchronously with
//! `(lng, ns)`.

use std::collections::HashMap;
use std::fmt;

/// Store events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Added,
    Removed,
    Loaded,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Added => "added",
            Event::Removed => "removed",
            Event::Loaded => "loaded",
        }
    }

    pub fn parse(name: &str) -> Option<Event> {
        match name {
            "added" => Some(Event::Added),
            "removed" => Some(Event::Removed),
            "loaded" => Some(Event::Loaded),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type EventCallback = Box<dyn Fn(&str, &str)>;

/// Last-registration-wins callback table
#[derive(Default)]
pub struct EventRegistry {
    callbacks: HashMap<Event, EventCallback>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback`, replacing any earlier one for `event`
    pub fn on(&mut self, event: Event, callback: impl Fn(&str, &str) + 'static) {
        self.callbacks.insert(event, Box::new(callback));
    }

    /// Removes the callback for `event`; returns whether one was registered
    pub fn off(&mut self, event: Event) -> bool {
        self.callbacks.remove(&event).is_some()
    }

    pub fn has(&self, event: Event) -> bool {
        self.callbacks.contains_key(&event)
    }

    /// Invokes the callback for `event`, if any
    pub fn emit(&self, event: Event, lng: &str, ns: &str) {
        if let Some(callback) = self.callbacks.get(&event) {
            callback(lng, ns);
        }
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_last_registration_wins() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();

        let first = calls.clone();
        registry.on(Event::Loaded, move |lng, ns| {
            first.borrow_mut().push(format!("first {lng}/{ns}"))
        });
        let second = calls.clone();
        registry.on(Event::Loaded, move |lng, ns| {
            second.borrow_mut().push(format!("second {lng}/{ns}"))
        });

        registry.emit(Event::Loaded, "lt", "translation");
        assert_eq!(*calls.borrow(), vec!["second lt/translation".to_string()]);
    }

    #[test]
    fn test_off_clears_slot() {
        let mut registry = EventRegistry::new();
        registry.on(Event::Removed, |_, _| {});
        assert!(registry.off(Event::Removed));
        assert!(!registry.off(Event::Removed));
        // Emitting without a listener is a no-op
        registry.emit(Event::Removed, "lt", "translation");
    }

    #[test]
    fn test_parse_event_names() {
        assert_eq!(Event::parse("loaded"), Some(Event::Loaded));
        assert_eq!(Event::parse("changed"), None);
        assert_eq!(Event::Added.to_string(), "added");
    }
}
