use crate::Host;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deferred action. Building one records what to do; only [`Command::dispatch`] does it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Layout(LayoutCommand),
    Window(WindowCommand),
    /// Shell command line, spawned without waiting for it.
    Spawn(String),
    NextLayout,
    ReloadConfig,
    Shutdown,
    /// Show the named group on the current screen.
    GroupToScreen(String),
}

/// Actions forwarded to the active layout.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutCommand {
    Left,
    Right,
    Down,
    Up,
    Next,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    Normalize,
    ToggleSplit,
}

/// Actions applied to the focused window.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum WindowCommand {
    Kill,
    ToggleFullscreen,
    ToggleFloating,
    ToGroup { group: String, switch_group: bool },
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
}

impl Command {
    pub fn dispatch<H: Host + ?Sized>(&self, host: &mut H) {
        match self {
            Self::Layout(cmd) => host.layout(*cmd),
            Self::Window(cmd) => host.window(cmd),
            Self::Spawn(cmdline) => host.spawn(cmdline),
            Self::NextLayout => host.next_layout(),
            Self::ReloadConfig => host.reload_config(),
            Self::Shutdown => host.shutdown(),
            Self::GroupToScreen(group) => host.group_to_screen(group),
        }
    }

    pub fn spawn(cmdline: impl Into<String>) -> Self {
        Self::Spawn(cmdline.into())
    }
}

impl LayoutCommand {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
            Self::Up => "up",
            Self::Next => "next",
            Self::ShuffleLeft => "shuffle_left",
            Self::ShuffleRight => "shuffle_right",
            Self::ShuffleDown => "shuffle_down",
            Self::ShuffleUp => "shuffle_up",
            Self::GrowLeft => "grow_left",
            Self::GrowRight => "grow_right",
            Self::GrowDown => "grow_down",
            Self::GrowUp => "grow_up",
            Self::Normalize => "normalize",
            Self::ToggleSplit => "toggle_split",
        }
    }
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kill => write!(f, "window.kill()"),
            Self::ToggleFullscreen => write!(f, "window.toggle_fullscreen()"),
            Self::ToggleFloating => write!(f, "window.toggle_floating()"),
            Self::ToGroup {
                group,
                switch_group,
            } => write!(f, "window.togroup({group}, switch_group={switch_group})"),
            Self::SetPositionFloating => write!(f, "window.set_position_floating()"),
            Self::SetSizeFloating => write!(f, "window.set_size_floating()"),
            Self::GetPosition => write!(f, "window.get_position()"),
            Self::GetSize => write!(f, "window.get_size()"),
            Self::BringToFront => write!(f, "window.bring_to_front()"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(cmd) => write!(f, "layout.{}()", cmd.name()),
            Self::Window(cmd) => write!(f, "{cmd}"),
            Self::Spawn(cmdline) => write!(f, "spawn: {cmdline}"),
            Self::NextLayout => write!(f, "next_layout()"),
            Self::ReloadConfig => write!(f, "reload_config()"),
            Self::Shutdown => write!(f, "shutdown()"),
            Self::GroupToScreen(group) => write!(f, "group[{group}].toscreen()"),
        }
    }
}
