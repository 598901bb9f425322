use serde::{Deserialize, Serialize};

/// What a rule gets to see of a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    /// `WM_CLASS` in X11: instance and class name.
    pub wm_class: Vec<String>,
    /// `_NET_WM_NAME` in X11
    pub title: Option<String>,
    /// `_NET_WM_WINDOW_TYPE` without the prefix, lowercase: "dialog", "utility", ...
    pub wm_type: Option<String>,
}

impl WindowProps {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            wm_class: vec![class.into()],
            ..Self::default()
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Selects windows by `WM_CLASS`, title and/or window type.
///
/// Every field that is set must equal the window's value. A rule without any field set
/// matches nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Match {
    pub wm_class: Option<String>,
    pub title: Option<String>,
    pub wm_type: Option<String>,
}

impl Match {
    pub fn wm_class(class: impl Into<String>) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: impl Into<String>) -> Self {
        Self {
            wm_type: Some(wm_type.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wm_class.is_none() && self.title.is_none() && self.wm_type.is_none()
    }

    pub fn matches(&self, window: &WindowProps) -> bool {
        if self.is_empty() {
            return false;
        }
        let class_ok = self
            .wm_class
            .as_ref()
            .map_or(true, |class| window.wm_class.iter().any(|c| c == class));
        let title_ok = self
            .title
            .as_ref()
            .map_or(true, |title| window.title.as_ref() == Some(title));
        let type_ok = self
            .wm_type
            .as_ref()
            .map_or(true, |wm_type| window.wm_type.as_ref() == Some(wm_type));
        class_ok && title_ok && type_ok
    }
}

/// Rules every floating layout starts with: transient window types and the classes of
/// common progress and confirmation popups.
pub fn default_float_rules() -> Vec<Match> {
    let types = ["utility", "notification", "toolbar", "splash", "dialog"];
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ];
    types
        .into_iter()
        .map(Match::wm_type)
        .chain(classes.into_iter().map(Match::wm_class))
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        Self {
            float_rules: default_float_rules(),
        }
    }
}

impl FloatingLayout {
    /// The first rule matching `window`, rules are tried in declaration order.
    pub fn should_float(&self, window: &WindowProps) -> Option<&Match> {
        self.float_rules.iter().find(|rule| rule.matches(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matches_any_class_entry() {
        let window = WindowProps {
            wm_class: vec!["ssh-askpass".to_owned(), "Ssh-askpass".to_owned()],
            ..WindowProps::default()
        };
        assert!(Match::wm_class("Ssh-askpass").matches(&window));
        assert!(!Match::wm_class("askpass").matches(&window));
    }

    #[test]
    fn all_set_fields_must_match() {
        let rule = Match {
            wm_class: Some("gitk".to_owned()),
            title: Some("branchdialog".to_owned()),
            wm_type: None,
        };
        let mut window = WindowProps::with_class("gitk");
        assert!(!rule.matches(&window));
        window.title = Some("branchdialog".to_owned());
        assert!(rule.matches(&window));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!Match::default().matches(&WindowProps::default()));
        assert!(!Match::default().matches(&WindowProps::with_title("pinentry")));
    }

    #[test]
    fn first_matching_rule_wins() {
        let layout = FloatingLayout {
            float_rules: vec![
                Match::wm_class("maketag"),
                Match::title("pinentry"),
                Match::wm_class("pinentry-gtk"),
            ],
        };
        let window = WindowProps {
            wm_class: vec!["pinentry-gtk".to_owned()],
            title: Some("pinentry".to_owned()),
            wm_type: None,
        };
        assert_eq!(layout.should_float(&window), Some(&Match::title("pinentry")));
        assert!(layout.should_float(&WindowProps::with_class("alacritty")).is_none());
    }

    #[test]
    fn dialogs_float_by_default() {
        let layout = FloatingLayout::default();
        let dialog = WindowProps {
            wm_type: Some("dialog".to_owned()),
            ..WindowProps::default()
        };
        assert!(layout.should_float(&dialog).is_some());
        assert_eq!(layout.float_rules.len(), 13);
    }
}
