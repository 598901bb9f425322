use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tilecfg_core::utils::modmask_lookup::{into_button, into_modmask};
use tilecfg_core::{Command, ModMask, MouseAction};

/// Placeholder replaced by [`crate::Config::modkey`] when a binding is resolved.
pub const MODKEY: &str = "modkey";

/// A key binding as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: Option<Modifier>,
    pub key: String,
    pub command: Command,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Keybind {
    pub fn new(modifier: &[&str], key: &str, command: Command) -> Self {
        Self {
            modifier: if modifier.is_empty() {
                None
            } else {
                Some(Modifier::from(modifier))
            },
            key: key.to_owned(),
            command,
            desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_owned());
        self
    }

    /// # Errors
    ///
    /// Fails if a modifier is not a known modifier name.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Result<tilecfg_core::Keybind> {
        Ok(tilecfg_core::Keybind {
            modmask: resolve_modifier(self.modifier.as_ref(), modkey)?,
            key: self.key.clone(),
            command: self.command.clone(),
            desc: self.desc.clone(),
        })
    }
}

/// A mouse binding as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MouseBind {
    Drag {
        modifier: Option<Modifier>,
        button: String,
        command: Command,
        #[serde(default)]
        start: Option<Command>,
    },
    Click {
        modifier: Option<Modifier>,
        button: String,
        command: Command,
    },
}

impl MouseBind {
    pub fn modifier(&self) -> Option<&Modifier> {
        match self {
            Self::Drag { modifier, .. } | Self::Click { modifier, .. } => modifier.as_ref(),
        }
    }

    pub fn button(&self) -> &str {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => button,
        }
    }

    /// # Errors
    ///
    /// Fails on unknown modifier or button names.
    pub fn try_convert_to_mouse_action(&self, modkey: &str) -> Result<MouseAction> {
        let modmask = resolve_modifier(self.modifier(), modkey)?;
        let button = into_button(self.button())
            .with_context(|| format!("invalid button for mouse binding {self:?}"))?;
        Ok(match self {
            Self::Drag { command, start, .. } => MouseAction::Drag {
                modmask,
                button,
                command: command.clone(),
                start: start.clone(),
            },
            Self::Click { command, .. } => MouseAction::Click {
                modmask,
                button,
                command: command.clone(),
            },
        })
    }
}

fn resolve_modifier(modifier: Option<&Modifier>, modkey: &str) -> Result<ModMask> {
    let names: Vec<String> = modifier
        .into_iter()
        .flatten()
        .map(|m| if m == MODKEY { modkey.to_owned() } else { m })
        .collect();
    into_modmask(&names).with_context(|| format!("invalid modifier `{}`", names.join("+")))
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl std::convert::From<&[&str]> for Modifier {
    fn from(l: &[&str]) -> Self {
        Self::List(l.iter().map(ToString::to_string).collect())
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
