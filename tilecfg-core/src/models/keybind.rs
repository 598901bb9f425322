use crate::{Button, Command, Host, ModMask};

/// A resolved key binding: modifiers, key name and the command it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub modmask: ModMask,
    pub key: String,
    pub command: Command,
    pub desc: Option<String>,
}

impl Keybind {
    pub fn new(modmask: ModMask, key: impl Into<String>, command: Command) -> Self {
        Self {
            modmask,
            key: key.into(),
            command,
            desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn matches(&self, modmask: ModMask, key: &str) -> bool {
        self.modmask == modmask && self.key == key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    /// Runs `start` when the button goes down and `command` on every motion while held.
    Drag {
        modmask: ModMask,
        button: Button,
        command: Command,
        start: Option<Command>,
    },
    Click {
        modmask: ModMask,
        button: Button,
        command: Command,
    },
}

impl MouseAction {
    pub fn modmask(&self) -> ModMask {
        match self {
            Self::Drag { modmask, .. } | Self::Click { modmask, .. } => *modmask,
        }
    }

    pub fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }

    pub fn matches(&self, modmask: ModMask, button: Button) -> bool {
        self.modmask() == modmask && self.button() == button
    }
}

/// Every key and mouse binding of a configuration, in declaration order.
///
/// Several bindings may share a combination. Lookups return the one declared last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub keys: Vec<Keybind>,
    pub mouse: Vec<MouseAction>,
}

impl Bindings {
    pub fn new(keys: Vec<Keybind>, mouse: Vec<MouseAction>) -> Self {
        Self { keys, mouse }
    }

    pub fn lookup_key(&self, modmask: ModMask, key: &str) -> Option<&Keybind> {
        self.keys.iter().rev().find(|kb| kb.matches(modmask, key))
    }

    /// Dispatches the bound command, returns `false` if nothing is bound.
    pub fn press_key<H: Host + ?Sized>(&self, modmask: ModMask, key: &str, host: &mut H) -> bool {
        match self.lookup_key(modmask, key) {
            Some(keybind) => {
                tracing::trace!("{}+{} -> {}", modmask, key, keybind.command);
                keybind.command.dispatch(host);
                true
            }
            None => false,
        }
    }

    pub fn lookup_mouse(&self, modmask: ModMask, button: Button) -> Option<&MouseAction> {
        self.mouse.iter().rev().find(|ma| ma.matches(modmask, button))
    }

    pub fn press_mouse<H: Host + ?Sized>(
        &self,
        modmask: ModMask,
        button: Button,
        host: &mut H,
    ) -> bool {
        match self.lookup_mouse(modmask, button) {
            Some(MouseAction::Drag { start, .. }) => {
                if let Some(start) = start {
                    start.dispatch(host);
                }
                true
            }
            Some(MouseAction::Click { command, .. }) => {
                command.dispatch(host);
                true
            }
            None => false,
        }
    }

    /// Pointer motion with `button` held. Only drags react to it.
    pub fn motion_mouse<H: Host + ?Sized>(
        &self,
        modmask: ModMask,
        button: Button,
        host: &mut H,
    ) -> bool {
        match self.lookup_mouse(modmask, button) {
            Some(MouseAction::Drag { command, .. }) => {
                command.dispatch(host);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::tests::MockHost;
    use crate::{LayoutCommand, WindowCommand};

    fn bindings() -> Bindings {
        Bindings::new(
            vec![
                Keybind::new(ModMask::Mod1, "w", Command::spawn("firefox")),
                Keybind::new(
                    ModMask::Mod1 | ModMask::Shift,
                    "h",
                    Command::Layout(LayoutCommand::ShuffleLeft),
                ),
                Keybind::new(ModMask::Mod1, "w", Command::spawn("chromium")),
            ],
            vec![
                MouseAction::Drag {
                    modmask: ModMask::Mod1,
                    button: Button::Button1,
                    command: Command::Window(WindowCommand::SetPositionFloating),
                    start: Some(Command::Window(WindowCommand::GetPosition)),
                },
                MouseAction::Click {
                    modmask: ModMask::Mod1,
                    button: Button::Button2,
                    command: Command::Window(WindowCommand::BringToFront),
                },
            ],
        )
    }

    #[test]
    fn last_binding_wins() {
        let bindings = bindings();
        let kb = bindings.lookup_key(ModMask::Mod1, "w").unwrap();
        assert_eq!(kb.command, Command::spawn("chromium"));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let bindings = bindings();
        assert!(bindings.lookup_key(ModMask::Mod1, "h").is_none());
        assert!(bindings
            .lookup_key(ModMask::Shift | ModMask::Mod1, "h")
            .is_some());
    }

    #[test]
    fn press_key_dispatches() {
        let bindings = bindings();
        let mut host = MockHost::default();
        assert!(bindings.press_key(ModMask::Mod1 | ModMask::Shift, "h", &mut host));
        assert!(!bindings.press_key(ModMask::empty(), "h", &mut host));
        assert_eq!(host.calls, vec!["layout.shuffle_left()"]);
    }

    #[test]
    fn drag_runs_start_then_command_on_motion() {
        let bindings = bindings();
        let mut host = MockHost::default();
        assert!(bindings.press_mouse(ModMask::Mod1, Button::Button1, &mut host));
        assert!(bindings.motion_mouse(ModMask::Mod1, Button::Button1, &mut host));
        assert!(bindings.motion_mouse(ModMask::Mod1, Button::Button1, &mut host));
        assert_eq!(
            host.calls,
            vec![
                "window.get_position()",
                "window.set_position_floating()",
                "window.set_position_floating()",
            ]
        );
    }

    #[test]
    fn click_ignores_motion() {
        let bindings = bindings();
        let mut host = MockHost::default();
        assert!(bindings.press_mouse(ModMask::Mod1, Button::Button2, &mut host));
        assert!(!bindings.motion_mouse(ModMask::Mod1, Button::Button2, &mut host));
        assert!(!bindings.press_mouse(ModMask::Mod1, Button::Button3, &mut host));
        assert_eq!(host.calls, vec!["window.bring_to_front()"]);
    }
}
