use super::{Match, WindowProps};
use serde::{Deserialize, Serialize};

/// What happens when a window asks to be activated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusOnActivation {
    /// Focus if the window is on the current group, mark it urgent otherwise.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Input device settings for the Wayland backend.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InputRule {
    pub tap: Option<bool>,
    pub natural_scroll: Option<bool>,
    pub pointer_accel: Option<f32>,
    pub kb_layout: Option<String>,
    pub kb_options: Option<String>,
}

/// Sends matching windows to a group and/or floats them when they appear.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppRule {
    pub matcher: Match,
    pub group: Option<String>,
    pub float: bool,
    /// No further rules are looked at once this one matched.
    pub break_on_match: bool,
}

impl AppRule {
    /// Matching rules in order, up to and including the first matching one that breaks.
    pub fn select<'a>(rules: &'a [AppRule], window: &WindowProps) -> Vec<&'a AppRule> {
        let mut selected = Vec::new();
        for rule in rules.iter().filter(|r| r.matcher.matches(window)) {
            selected.push(rule);
            if rule.break_on_match {
                break;
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_stop_at_break_on_match() {
        let rules = vec![
            AppRule {
                matcher: Match::wm_class("gimp"),
                float: true,
                ..AppRule::default()
            },
            AppRule {
                matcher: Match::wm_class("gimp"),
                group: Some("五".to_owned()),
                break_on_match: true,
                ..AppRule::default()
            },
            AppRule {
                matcher: Match::wm_class("gimp"),
                group: Some("六".to_owned()),
                ..AppRule::default()
            },
        ];
        let selected = AppRule::select(&rules, &WindowProps::with_class("gimp"));
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[1].group.as_deref(), Some("五"));
        assert!(AppRule::select(&rules, &WindowProps::with_class("xterm")).is_empty());
    }
}
