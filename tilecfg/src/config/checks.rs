use super::Config;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tilecfg_core::models::{group_keybinds, is_hex_color, Layout};
use tilecfg_core::utils::modmask_lookup::into_modmask;
use tilecfg_core::ModMask;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "\x1b[1;93mWARN: {}\x1b[0m", self.message),
            Severity::Error => write!(f, "\x1b[1;91mERROR: {}\x1b[0m", self.message),
        }
    }
}

/// Everything the checks found. Nothing in here stops a config from loading.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
}

impl CheckReport {
    fn warn(&mut self, message: String) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            message,
        });
    }

    fn error(&mut self, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl Config {
    /// Runs every check.
    pub fn check(&self, verbose: bool) -> CheckReport {
        let mut report = CheckReport::default();
        self.check_log_level(&mut report, verbose);
        self.check_keybinds(&mut report, verbose);
        self.check_mouse(&mut report, verbose);
        self.check_groups(&mut report, verbose);
        self.check_layouts(&mut report);
        self.check_colors(&mut report, verbose);
        self.check_paths(&mut report, verbose);
        report
    }

    pub fn check_log_level(&self, report: &mut CheckReport, verbose: bool) {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => report.error(format!("Log level is invalid: {err}")),
        }
    }

    /// Reports bindings with invalid modifiers and combinations that are bound more than
    /// once, group keys included. Only the last of those is reachable.
    pub fn check_keybinds(&self, report: &mut CheckReport, verbose: bool) {
        let mut bindings: HashMap<(ModMask, String), String> = HashMap::new();
        for keybind in &self.keybind {
            if verbose {
                println!("Keybind: {keybind:?}");
            }
            if keybind.key.is_empty() {
                report.error(format!("Empty key for keybind {keybind:?}"));
            }
            match keybind.try_convert_to_core_keybind(&self.modkey) {
                Ok(core) => note_binding(&mut bindings, report, core),
                Err(err) => report.error(format!("{err:#} for keybind {keybind:?}")),
            }
        }

        match into_modmask(&[self.modkey.as_str()]) {
            Ok(modkey) => {
                for keybind in group_keybinds(&self.groups, &self.group_hotkeys, modkey) {
                    note_binding(&mut bindings, report, keybind);
                }
            }
            Err(err) => report.error(format!("Invalid modkey `{}`: {err}", self.modkey)),
        }
    }

    pub fn check_mouse(&self, report: &mut CheckReport, verbose: bool) {
        for bind in &self.mouse {
            if verbose {
                println!("Mouse binding: {bind:?}");
            }
            if let Err(err) = bind.try_convert_to_mouse_action(&self.modkey) {
                report.error(format!("{err:#}"));
            }
        }
    }

    /// Groups and hotkeys are paired in order, surplus entries on either side get no keys.
    pub fn check_groups(&self, report: &mut CheckReport, verbose: bool) {
        let hotkeys = self.group_hotkeys.chars().count();
        if verbose {
            println!("{} groups, {} hotkeys", self.groups.len(), hotkeys);
        }
        if hotkeys < self.groups.len() {
            let unbound: Vec<&str> = self.groups[hotkeys..]
                .iter()
                .map(|g| g.name.as_str())
                .collect();
            report.warn(format!("Groups without hotkey: {}", unbound.join(", ")));
        } else if hotkeys > self.groups.len() {
            report.warn(format!(
                "{} hotkeys but only {} groups, extra hotkeys are unused",
                hotkeys,
                self.groups.len()
            ));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                report.error(format!("Group `{}` is declared twice", group.name));
            }
        }
    }

    pub fn check_layouts(&self, report: &mut CheckReport) {
        if self.layouts.is_empty() {
            report.error("No layouts configured".to_owned());
        }
    }

    pub fn check_colors(&self, report: &mut CheckReport, verbose: bool) {
        for (name, color) in self.colors.invalid_entries() {
            report.warn(format!("Color `{name}` is not a #rrggbb color: {color}"));
        }
        for layout in &self.layouts {
            if let Layout::Columns {
                border_focus_stack, ..
            } = layout
            {
                for color in border_focus_stack.iter().filter(|c| !is_hex_color(c)) {
                    report.warn(format!("Layout border color is not a #rrggbb color: {color}"));
                }
            }
        }
        for (i, screen) in self.screens.iter().enumerate() {
            for widget in screen.widgets() {
                for color in widget.colors().into_iter().filter(|c| !is_hex_color(c)) {
                    report.warn(format!(
                        "{} on screen {} uses color `{}` which is not a #rrggbb color",
                        widget.name(),
                        i,
                        color
                    ));
                }
            }
        }
        if verbose {
            println!("Checked {} colors.", self.colors.len());
        }
    }

    /// Paths are handed over as they are. A missing file only shows up once it is used.
    pub fn check_paths(&self, report: &mut CheckReport, verbose: bool) {
        if let Some(script) = self.autostart_path() {
            if verbose {
                println!("Autostart script: {}", script.display());
            }
            if !script.exists() {
                report.warn(format!(
                    "Autostart script {} does not exist",
                    script.display()
                ));
            }
        }
        for (i, wallpaper) in self.wallpapers() {
            if !wallpaper.exists() {
                report.warn(format!(
                    "Wallpaper {} of screen {} does not exist",
                    wallpaper.display(),
                    i
                ));
            }
        }
    }
}

/// Records `keybind` and warns when it replaces an earlier binding of the same combination.
fn note_binding(
    bindings: &mut HashMap<(ModMask, String), String>,
    report: &mut CheckReport,
    keybind: tilecfg_core::Keybind,
) {
    let command = keybind.command.to_string();
    if let Some(previous) = bindings.insert((keybind.modmask, keybind.key.clone()), command) {
        report.warn(format!(
            "Multiple commands bound to key combination {} + {}:\
            \n    -> {} (unreachable)\
            \n    -> {}",
            keybind.modmask, keybind.key, previous, keybind.command,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Keybind, MODKEY};
    use tilecfg_core::models::Group;
    use tilecfg_core::Command;

    fn messages(report: &CheckReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn default_config_has_no_errors() {
        let mut config = Config::default();
        config.autostart = None;
        config.screens[0].wallpaper = None;
        let report = config.check(false);
        assert!(report.is_empty(), "{:?}", report.findings);
    }

    #[test]
    fn shadowed_bindings_are_reported() {
        let mut config = Config::default();
        config.keybind = vec![
            Keybind::new(&[MODKEY, "shift"], "w", Command::spawn("firefox")),
            Keybind::new(&["shift", "mod1"], "w", Command::spawn("chromium")),
        ];
        let mut report = CheckReport::default();
        config.check_keybinds(&mut report, false);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Warning);
        assert!(messages(&report)[0].contains("spawn: firefox"));
        assert!(!report.has_errors());
    }

    #[test]
    fn explicit_key_shadowed_by_group_key_is_reported() {
        let mut config = Config::default();
        config.keybind = vec![Keybind::new(&[MODKEY], "1", Command::spawn("firefox"))];
        let mut report = CheckReport::default();
        config.check_keybinds(&mut report, false);
        assert_eq!(report.findings.len(), 1);
        let message = messages(&report)[0];
        assert!(message.contains("spawn: firefox (unreachable)"), "{message}");
        assert!(message.contains("group[一].toscreen()"), "{message}");
    }

    #[test]
    fn invalid_modifier_is_an_error() {
        let mut config = Config::default();
        config.keybind = vec![Keybind::new(&["hyper"], "w", Command::NextLayout)];
        let mut report = CheckReport::default();
        config.check_keybinds(&mut report, false);
        assert!(report.has_errors());
    }

    #[test]
    fn group_hotkey_mismatch_is_reported() {
        let mut config = Config::default();
        config.group_hotkeys = "1234567".to_owned();
        let mut report = CheckReport::default();
        config.check_groups(&mut report, false);
        assert_eq!(messages(&report), vec!["Groups without hotkey: 八, 九"]);

        config.groups = vec![Group::new("一"), Group::new("一")];
        let mut report = CheckReport::default();
        config.check_groups(&mut report, false);
        assert!(report.has_errors());
    }

    #[test]
    fn bad_colors_are_warnings() {
        let mut config = Config::default();
        config.colors.insert("Broken", "blue");
        config.screens[0].top.as_mut().unwrap().widgets[0].style.background =
            Some("ff00ff".to_owned());
        let mut report = CheckReport::default();
        config.check_colors(&mut report, false);
        assert_eq!(report.findings.len(), 2);
        assert!(!report.has_errors());
    }

    #[test]
    fn missing_paths_are_warnings() {
        let mut config = Config::default();
        config.autostart = Some("/nonexistent/tilecfg/start.sh".to_owned());
        config.screens[0].wallpaper = Some("/nonexistent/tilecfg/01.png".to_owned());
        let mut report = CheckReport::default();
        config.check_paths(&mut report, false);
        assert_eq!(report.findings.len(), 2);
    }

    #[test]
    fn invalid_log_level_is_reported() {
        let mut config = Config::default();
        config.log_level = "tilecfg=loud".to_owned();
        let mut report = CheckReport::default();
        config.check_log_level(&mut report, false);
        assert!(report.has_errors());
    }
}
