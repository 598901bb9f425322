use crate::{Command, Keybind, ModMask, WindowCommand};
use serde::{Deserialize, Serialize};

/// A virtual desktop windows can be assigned to and switched between.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Builds two bindings per group, pairing groups with the characters of `hotkeys` in order:
///
/// - `modkey + hotkey` shows the group on the current screen
/// - `modkey + shift + hotkey` moves the focused window to the group without following it
///
/// Extra groups or extra hotkeys are ignored.
pub fn group_keybinds(groups: &[Group], hotkeys: &str, modkey: ModMask) -> Vec<Keybind> {
    groups
        .iter()
        .zip(hotkeys.chars())
        .flat_map(|(group, hotkey)| {
            let key = hotkey.to_string();
            [
                Keybind::new(modkey, key.clone(), Command::GroupToScreen(group.name.clone()))
                    .desc(format!("Switch to group {}", group.name)),
                Keybind::new(
                    modkey | ModMask::Shift,
                    key,
                    Command::Window(WindowCommand::ToGroup {
                        group: group.name.clone(),
                        switch_group: false,
                    }),
                )
                .desc(format!(
                    "Switch to & move focused window to group {}",
                    group.name
                )),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Vec<Group> {
        names.iter().map(|n| Group::new(*n)).collect()
    }

    #[test]
    fn two_bindings_per_group() {
        let groups = groups(&["一", "二", "三"]);
        let keys = group_keybinds(&groups, "123", ModMask::Mod1);
        assert_eq!(keys.len(), 6);

        for pair in keys.chunks(2) {
            let (switch, move_to) = (&pair[0], &pair[1]);
            assert_eq!(switch.key, move_to.key);
            assert!(!switch.modmask.contains(ModMask::Shift));
            assert!(move_to.modmask.contains(ModMask::Shift));
            assert!(move_to.modmask.contains(ModMask::Mod1));
        }
        assert_eq!(keys[2].command, Command::GroupToScreen("二".to_owned()));
        assert_eq!(keys[2].desc.as_deref(), Some("Switch to group 二"));
    }

    #[test]
    fn move_binding_does_not_follow_window() {
        let keys = group_keybinds(&groups(&["一"]), "1", ModMask::Mod1);
        assert_eq!(
            keys[1].command,
            Command::Window(WindowCommand::ToGroup {
                group: "一".to_owned(),
                switch_group: false
            })
        );
    }

    #[test]
    fn mismatched_lengths_truncate() {
        let keys = group_keybinds(&groups(&["一", "二", "三"]), "12", ModMask::Mod1);
        assert_eq!(keys.len(), 4);

        let keys = group_keybinds(&groups(&["一"]), "123456789", ModMask::Mod1);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key, "1");

        assert!(group_keybinds(&[], "123", ModMask::Mod1).is_empty());
    }
}
