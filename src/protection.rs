//! Content protection: suppresses the context menu, drag start and a fixed
//! set of copy/inspect shortcuts while the page is mounted.
//!
//! This is friction, not enforcement. Anyone can turn scripting off.

use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardedEvent {
    ContextMenu,
    KeyDown,
    DragStart,
}

impl GuardedEvent {
    pub const ALL: [Self; 3] = [Self::ContextMenu, Self::KeyDown, Self::DragStart];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContextMenu => "contextmenu",
            Self::KeyDown => "keydown",
            Self::DragStart => "dragstart",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardInput {
    ContextMenu,
    Key(KeyChord),
    DragStart,
}

/// Browser default that was suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blocked {
    ContextMenu,
    Drag,
    SelectAll,
    Copy,
    Cut,
    Paste,
    ViewSource,
    DevTools,
    Inspector,
    Console,
}

pub fn intercept(input: &GuardInput) -> Option<Blocked> {
    match input {
        GuardInput::ContextMenu => Some(Blocked::ContextMenu),
        GuardInput::DragStart => Some(Blocked::Drag),
        GuardInput::Key(chord) => blocked_shortcut(chord),
    }
}

fn blocked_shortcut(chord: &KeyChord) -> Option<Blocked> {
    if chord.key == "F12" {
        return Some(Blocked::DevTools);
    }

    if !chord.ctrl {
        return None;
    }

    let key = chord.key.to_ascii_lowercase();

    if chord.shift {
        match key.as_str() {
            "i" => return Some(Blocked::DevTools),
            "c" => return Some(Blocked::Inspector),
            "j" => return Some(Blocked::Console),
            _ => {}
        }
    }

    match key.as_str() {
        "a" => Some(Blocked::SelectAll),
        "c" => Some(Blocked::Copy),
        "x" => Some(Blocked::Cut),
        "v" => Some(Blocked::Paste),
        "u" => Some(Blocked::ViewSource),
        _ => None,
    }
}

pub type GuardHandler = Rc<dyn Fn(&GuardInput) -> Option<Blocked>>;

/// Something global listeners can be attached to.
///
/// Dropping the returned registration must detach the listener.
pub trait ListenerHost {
    type Registration;

    fn register(&self, event: GuardedEvent, handler: GuardHandler) -> Self::Registration;
}

/// Owns one listener per [`GuardedEvent`] for as long as it lives.
pub struct ContentGuard<R> {
    registrations: Vec<R>,
}

impl<R> ContentGuard<R> {
    pub fn install<H>(host: &H) -> Self
    where
        H: ListenerHost<Registration = R>,
    {
        let handler: GuardHandler = Rc::new(intercept);
        let registrations = GuardedEvent::ALL
            .into_iter()
            .map(|event| host.register(event, Rc::clone(&handler)))
            .collect();

        Self { registrations }
    }
}

impl<R> Drop for ContentGuard<R> {
    fn drop(&mut self) {
        self.registrations.clear();
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DocumentHost;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{GuardHandler, GuardInput, GuardedEvent, KeyChord, ListenerHost};
    use gloo_events::{EventListener, EventListenerOptions};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, KeyboardEvent};

    pub struct DocumentHost {
        document: Document,
    }

    impl DocumentHost {
        pub fn new(document: Document) -> Self {
            Self { document }
        }
    }

    impl ListenerHost for DocumentHost {
        type Registration = EventListener;

        fn register(&self, event: GuardedEvent, handler: GuardHandler) -> EventListener {
            EventListener::new_with_options(
                &self.document,
                event.as_str(),
                EventListenerOptions::enable_prevent_default(),
                move |raw: &Event| {
                    let Some(input) = guard_input(event, raw) else {
                        return;
                    };
                    if handler(&input).is_some() {
                        raw.prevent_default();
                    }
                },
            )
        }
    }

    fn guard_input(event: GuardedEvent, raw: &Event) -> Option<GuardInput> {
        match event {
            GuardedEvent::ContextMenu => Some(GuardInput::ContextMenu),
            GuardedEvent::DragStart => Some(GuardInput::DragStart),
            GuardedEvent::KeyDown => {
                let key_event = raw.dyn_ref::<KeyboardEvent>()?;
                Some(GuardInput::Key(KeyChord {
                    key: key_event.key(),
                    ctrl: key_event.ctrl_key(),
                    shift: key_event.shift_key(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    impl KeyChord {
        fn new(key: &str) -> Self {
            Self {
                key: key.to_string(),
                ctrl: false,
                shift: false,
            }
        }

        fn with_ctrl(mut self) -> Self {
            self.ctrl = true;
            self
        }

        fn with_shift(mut self) -> Self {
            self.shift = true;
            self
        }
    }

    impl GuardInput {
        fn event(&self) -> GuardedEvent {
            match self {
                Self::ContextMenu => GuardedEvent::ContextMenu,
                Self::Key(_) => GuardedEvent::KeyDown,
                Self::DragStart => GuardedEvent::DragStart,
            }
        }
    }

    impl<R> ContentGuard<R> {
        fn listener_count(&self) -> usize {
            self.registrations.len()
        }
    }

    type Slots = Rc<RefCell<Vec<(u64, GuardedEvent, GuardHandler)>>>;

    #[derive(Default)]
    struct RecordingHost {
        slots: Slots,
        next_id: Cell<u64>,
    }

    struct Registration {
        id: u64,
        slots: Slots,
    }

    impl Drop for Registration {
        fn drop(&mut self) {
            self.slots.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }

    impl ListenerHost for RecordingHost {
        type Registration = Registration;

        fn register(&self, event: GuardedEvent, handler: GuardHandler) -> Registration {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.slots.borrow_mut().push((id, event, handler));
            Registration {
                id,
                slots: Rc::clone(&self.slots),
            }
        }
    }

    impl RecordingHost {
        fn registered(&self, event: GuardedEvent) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|(_, registered, _)| *registered == event)
                .count()
        }

        fn total(&self) -> usize {
            self.slots.borrow().len()
        }

        /// Runs every handler listening for the input's event. `true` means
        /// at least one of them suppressed the default.
        fn dispatch(&self, input: &GuardInput) -> bool {
            let handlers: Vec<GuardHandler> = self
                .slots
                .borrow()
                .iter()
                .filter(|(_, event, _)| *event == input.event())
                .map(|(_, _, handler)| Rc::clone(handler))
                .collect();

            handlers
                .iter()
                .fold(false, |prevented, handler| handler(input).is_some() || prevented)
        }
    }

    fn ctrl(key: &str) -> GuardInput {
        GuardInput::Key(KeyChord::new(key).with_ctrl())
    }

    fn ctrl_shift(key: &str) -> GuardInput {
        GuardInput::Key(KeyChord::new(key).with_ctrl().with_shift())
    }

    #[test]
    fn copy_and_inspect_shortcuts_are_blocked() {
        let cases = [
            (GuardInput::ContextMenu, Blocked::ContextMenu),
            (GuardInput::DragStart, Blocked::Drag),
            (ctrl("a"), Blocked::SelectAll),
            (ctrl("c"), Blocked::Copy),
            (ctrl("X"), Blocked::Cut),
            (ctrl("v"), Blocked::Paste),
            (ctrl("U"), Blocked::ViewSource),
            (GuardInput::Key(KeyChord::new("F12")), Blocked::DevTools),
            (ctrl_shift("I"), Blocked::DevTools),
            (ctrl_shift("C"), Blocked::Inspector),
            (ctrl_shift("j"), Blocked::Console),
        ];

        for (input, expected) in cases {
            assert_eq!(intercept(&input), Some(expected), "{input:?}");
        }
    }

    #[test]
    fn unrelated_keys_pass_through() {
        for input in [
            ctrl("b"),
            ctrl("F5"),
            ctrl_shift("k"),
            GuardInput::Key(KeyChord::new("c")),
            GuardInput::Key(KeyChord::new("i").with_shift()),
            GuardInput::Key(KeyChord::new("F11")),
        ] {
            assert_eq!(intercept(&input), None, "{input:?}");
        }
    }

    #[test]
    fn shift_does_not_unblock_plain_ctrl_shortcuts() {
        assert_eq!(intercept(&ctrl_shift("v")), Some(Blocked::Paste));
        assert_eq!(intercept(&ctrl_shift("A")), Some(Blocked::SelectAll));
    }

    #[test]
    fn mounted_guard_prevents_defaults() {
        let host = RecordingHost::default();
        let guard = ContentGuard::install(&host);

        assert_eq!(guard.listener_count(), 3);
        assert!(host.dispatch(&GuardInput::ContextMenu));
        assert!(host.dispatch(&ctrl("C")));
        assert!(host.dispatch(&ctrl("a")));
        assert!(host.dispatch(&GuardInput::Key(KeyChord::new("F12"))));
        assert!(host.dispatch(&ctrl_shift("I")));
        assert!(host.dispatch(&GuardInput::DragStart));
        assert!(!host.dispatch(&ctrl("b")));
    }

    #[test]
    fn one_listener_per_event_while_mounted() {
        let host = RecordingHost::default();
        let _guard = ContentGuard::install(&host);

        for event in GuardedEvent::ALL {
            assert_eq!(host.registered(event), 1, "{}", event.as_str());
        }
    }

    #[test]
    fn dropping_guard_releases_every_listener() {
        let host = RecordingHost::default();
        let guard = ContentGuard::install(&host);
        assert_eq!(host.total(), 3);

        drop(guard);

        assert_eq!(host.total(), 0);
        assert!(!host.dispatch(&GuardInput::ContextMenu));
        assert!(!host.dispatch(&ctrl("c")));
    }

    #[test]
    fn remounting_does_not_leak_or_double_register() {
        let host = RecordingHost::default();

        for _ in 0..5 {
            let guard = ContentGuard::install(&host);
            for event in GuardedEvent::ALL {
                assert_eq!(host.registered(event), 1);
            }
            drop(guard);
            assert_eq!(host.total(), 0);
        }
    }
}
