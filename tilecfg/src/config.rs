//! `tilecfg` general configuration

mod checks;
mod default;
mod keybind;

pub use checks::{CheckReport, Finding, Severity};
pub use keybind::{Keybind, Modifier, MouseBind, MODKEY};

use crate::utils::expand_path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tilecfg_core::child_process::StartupOnce;
use tilecfg_core::models::{
    group_keybinds, AppRule, Bindings, ColorTable, FloatingLayout, FocusOnActivation, Group,
    InputRule, Layout, Match, Screen, WidgetDefaults, WindowProps,
};
use tilecfg_core::utils::modmask_lookup::into_modmask;
use tilecfg_core::{MouseAction, TextShortener};

/// Everything the window manager reads from its configuration.
///
/// Built once at startup and handed around by reference. Field names follow the names the
/// window manager looks its settings up by; a field missing from the config file falls back
/// to the value of [`Config::default`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    /// Modifier substituted for `"modkey"` in bindings.
    pub modkey: String,
    pub terminal: String,
    /// Script run once when the window manager first starts.
    pub autostart: Option<String>,
    pub colors: ColorTable,
    pub keybind: Vec<Keybind>,
    pub groups: Vec<Group>,
    /// One character per group, in group order.
    pub group_hotkeys: String,
    pub layouts: Vec<Layout>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBind>,
    /// Shortener used by `tilecfg shorten`.
    pub shortener: TextShortener,
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<AppRule>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub floating_layout: FloatingLayout,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
    pub wl_input_rules: Option<BTreeMap<String, InputRule>>,
    pub wmname: String,
}

impl Config {
    /// Explicit key bindings followed by the two bindings of every group.
    ///
    /// Bindings with an invalid modifier are logged and left out.
    pub fn keys(&self) -> Vec<tilecfg_core::Keybind> {
        let mut keys: Vec<tilecfg_core::Keybind> = self
            .keybind
            .iter()
            .filter_map(
                |keybind| match keybind.try_convert_to_core_keybind(&self.modkey) {
                    Ok(core_keybind) => Some(core_keybind),
                    Err(err) => {
                        tracing::error!("Invalid key binding: {:#}\n{:?}", err, keybind);
                        None
                    }
                },
            )
            .collect();

        match into_modmask(&[self.modkey.as_str()]) {
            Ok(modkey) => keys.extend(group_keybinds(&self.groups, &self.group_hotkeys, modkey)),
            Err(err) => tracing::error!("Cannot bind group keys: {}", err),
        }
        keys
    }

    pub fn mouse_actions(&self) -> Vec<MouseAction> {
        self.mouse
            .iter()
            .filter_map(
                |bind| match bind.try_convert_to_mouse_action(&self.modkey) {
                    Ok(action) => Some(action),
                    Err(err) => {
                        tracing::error!("Invalid mouse binding: {:#}", err);
                        None
                    }
                },
            )
            .collect()
    }

    pub fn bindings(&self) -> Bindings {
        Bindings::new(self.keys(), self.mouse_actions())
    }

    /// The floating rule that applies to `window`, if any.
    pub fn float_rule_for(&self, window: &WindowProps) -> Option<&Match> {
        self.floating_layout.should_float(window)
    }

    pub fn app_rules_for(&self, window: &WindowProps) -> Vec<&AppRule> {
        AppRule::select(&self.dgroups_app_rules, window)
    }

    pub fn autostart_path(&self) -> Option<PathBuf> {
        self.autostart.as_deref().map(expand_path)
    }

    pub fn autostart_hook(&self) -> Option<StartupOnce> {
        self.autostart_path().map(StartupOnce::new)
    }

    /// Wallpaper of every screen that has one, with `~` expanded.
    pub fn wallpapers(&self) -> Vec<(usize, PathBuf)> {
        self.screens
            .iter()
            .enumerate()
            .filter_map(|(i, screen)| screen.wallpaper.as_deref().map(|w| (i, expand_path(w))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ron::extensions::Extensions;
    use tilecfg_core::models::{is_hex_color, BarPosition, WidgetKind};
    use tilecfg_core::{Command, ModMask, WindowCommand};

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::default();

        let ron_pretty_conf = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .extensions(Extensions::IMPLICIT_SOME);
        let ron = ron::ser::to_string_pretty(&config, ron_pretty_conf);
        assert!(ron.is_ok(), "Could not serialize default config");

        let ron_config = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str::<Config>(ron.unwrap().as_str());
        assert!(ron_config.is_ok(), "Could not deserialize default config");
        assert_eq!(ron_config.unwrap(), config);
    }

    #[test]
    fn default_is_deterministic() {
        assert_eq!(Config::default(), Config::default());
        assert_eq!(Config::default().keys(), Config::default().keys());
    }

    #[test]
    fn default_palette_is_hex() {
        let config = Config::default();
        assert_eq!(config.colors.len(), 15);
        assert!(config.colors.invalid_entries().is_empty());
        let mut names: Vec<&str> = config.colors.iter().map(|(n, _)| n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 15);
        assert!(config
            .colors
            .iter()
            .all(|(_, color)| is_hex_color(color)));
    }

    #[test]
    fn default_keys_include_groups() {
        let config = Config::default();
        let keys = config.keys();
        assert_eq!(config.keybind.len(), 34);
        assert_eq!(keys.len(), 34 + 2 * 9);

        let group_keys = &keys[34..];
        for pair in group_keys.chunks(2) {
            assert!(!pair[0].modmask.contains(ModMask::Shift));
            assert!(pair[1].modmask.contains(ModMask::Shift));
        }
        assert_eq!(group_keys[0].command, Command::GroupToScreen("一".to_owned()));
        assert_eq!(
            group_keys[17].command,
            Command::Window(WindowCommand::ToGroup {
                group: "九".to_owned(),
                switch_group: false,
            })
        );
    }

    #[test]
    fn default_modifiers_stay_within_mod1_shift_control() {
        let allowed = ModMask::Mod1 | ModMask::Shift | ModMask::Control;
        for key in Config::default().keys() {
            assert!(allowed.contains(key.modmask), "{key:?}");
        }
    }

    #[test]
    fn terminal_key_spawns_terminal() {
        let bindings = Config::default().bindings();
        let kb = bindings.lookup_key(ModMask::Mod1, "Return").unwrap();
        assert_eq!(kb.command, Command::spawn("alacritty"));
        assert_eq!(bindings.mouse.len(), 3);
    }

    #[test]
    fn invalid_bindings_are_dropped() {
        let mut config = Config::default();
        config.keybind = vec![
            Keybind::new(&["hyper"], "x", Command::Shutdown),
            Keybind::new(&[MODKEY], "x", Command::Shutdown),
        ];
        config.groups.clear();
        assert_eq!(config.keys().len(), 1);

        config.modkey = "nope".to_owned();
        config.groups = vec![Group::new("一")];
        assert!(config.keys().is_empty());
    }

    #[test]
    fn floating_rules_cover_gitk_and_pinentry() {
        let config = Config::default();
        assert!(config
            .float_rule_for(&WindowProps::with_class("makebranch"))
            .is_some());
        assert!(config
            .float_rule_for(&WindowProps::with_title("pinentry"))
            .is_some());
        assert!(config
            .float_rule_for(&WindowProps::with_class("alacritty"))
            .is_none());
    }

    #[test]
    fn default_screen_has_two_bars() {
        let config = Config::default();
        let screen = &config.screens[0];
        assert_eq!(screen.bar(BarPosition::Top).unwrap().size, 28);
        assert_eq!(screen.bar(BarPosition::Bottom).unwrap().margin, 10);
        let window_name = screen
            .widgets()
            .find(|w| matches!(w.kind, WidgetKind::WindowName { .. }))
            .unwrap();
        assert_eq!(window_name.display_text("nvim - Chromium split"), "Chromium");
    }

    #[test]
    fn bars_open_with_their_logos() {
        let config = Config::default();
        let logo = |position| match &config.screens[0].bar(position).unwrap().widgets[0].kind {
            WidgetKind::TextBox { text } => text.clone(),
            other => panic!("expected a text box, got {other:?}"),
        };
        assert_eq!(logo(BarPosition::Bottom), "\u{e78e}");
        assert_eq!(logo(BarPosition::Top), " \u{e77d} ");
    }

    #[test]
    fn paths_are_expanded() {
        let config = Config::default();
        let autostart = config.autostart_path().unwrap();
        assert!(autostart.ends_with(".config/tilecfg/scripts/start.sh"));
        assert!(!autostart.starts_with("~"));
        assert_eq!(config.wallpapers().len(), 1);
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let config: Config = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(r#"(modkey: "mod4", wmname: "tilecfg")"#)
            .unwrap();
        assert_eq!(config.modkey, "mod4");
        assert_eq!(config.wmname, "tilecfg");
        assert_eq!(config.groups.len(), 9);
        let keys = config.keys();
        assert!(keys[0].modmask.contains(ModMask::Mod4));
    }
}
