use crate::errors::{Result, TileError};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Represents the set of modifier keys a binding requires
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModMask: u8 {
        const Shift = 1;
        const Control = 1 << 1;
        /// Alt
        const Mod1 = 1 << 2;
        /// Super
        const Mod4 = 1 << 3;
    }
}

bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Button: u8 {
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
        /// Scroll wheel up
        const Button4 = 1 << 3;
        /// Scroll wheel down
        const Button5 = 1 << 4;
    }
}

/// Folds a list of modifier names into a single mask.
///
/// # Errors
///
/// Fails on the first name that is not a known modifier.
pub fn into_modmask<S: AsRef<str>>(keys: &[S]) -> Result<ModMask> {
    keys.iter()
        .try_fold(ModMask::empty(), |mask, key| Ok(mask | into_mod(key.as_ref())?))
}

/// # Errors
///
/// Returns [`TileError::UnknownModifier`] for anything but shift, control, mod1/alt and
/// mod4/super (case insensitive).
pub fn into_mod(key: &str) -> Result<ModMask> {
    match key.to_ascii_lowercase().as_str() {
        "shift" => Ok(ModMask::Shift),
        "control" | "ctrl" => Ok(ModMask::Control),
        "mod1" | "alt" => Ok(ModMask::Mod1),
        "mod4" | "super" => Ok(ModMask::Mod4),
        _ => Err(TileError::UnknownModifier(key.to_owned())),
    }
}

/// # Errors
///
/// Returns [`TileError::UnknownButton`] unless the name is `Button1` to `Button5`.
pub fn into_button(name: &str) -> Result<Button> {
    match name {
        "Button1" => Ok(Button::Button1),
        "Button2" => Ok(Button::Button2),
        "Button3" => Ok(Button::Button3),
        "Button4" => Ok(Button::Button4),
        "Button5" => Ok(Button::Button5),
        _ => Err(TileError::UnknownButton(name.to_owned())),
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (ModMask::Mod1, "mod1"),
            (ModMask::Mod4, "mod4"),
            (ModMask::Control, "control"),
            (ModMask::Shift, "shift"),
        ]
        .iter()
        .filter(|(m, _)| self.contains(*m))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("+"))
    }
}
