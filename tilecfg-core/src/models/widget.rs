use crate::TextShortener;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Font settings every widget falls back to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "sans".to_owned(),
            fontsize: 12,
            padding: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerLinePath {
    RoundedLeft,
    RoundedRight,
    ArrowLeft,
    ArrowRight,
    ForwardSlash,
    BackSlash,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    PowerLine { path: PowerLinePath, size: u32 },
}

impl Decoration {
    pub const fn power_line(path: PowerLinePath) -> Self {
        Self::PowerLine { path, size: 12 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetStyle {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub font: Option<String>,
    pub fontsize: Option<u32>,
    pub padding: Option<u32>,
    pub decorations: Vec<Decoration>,
}

/// A [`WidgetStyle`] with every font setting filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle<'a> {
    pub background: Option<&'a str>,
    pub foreground: Option<&'a str>,
    pub font: &'a str,
    pub fontsize: u32,
    pub padding: u32,
    pub decorations: &'a [Decoration],
}

impl WidgetStyle {
    pub fn resolve<'a>(&'a self, defaults: &'a WidgetDefaults) -> ResolvedStyle<'a> {
        ResolvedStyle {
            background: self.background.as_deref(),
            foreground: self.foreground.as_deref(),
            font: self.font.as_deref().unwrap_or(&defaults.font),
            fontsize: self.fontsize.unwrap_or(defaults.fontsize),
            padding: self.padding.unwrap_or(defaults.padding),
            decorations: &self.decorations,
        }
    }

    /// Every color this style sets.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.background
            .iter()
            .chain(self.foreground.iter())
            .map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    TextBox {
        text: String,
    },
    Spacer {
        length: u32,
    },
    Net,
    Memory {
        format: String,
    },
    Cpu,
    GroupBox {
        borderwidth: u32,
        block_highlight_text_color: Option<String>,
        this_current_screen_border: Option<String>,
        this_screen_border: Option<String>,
    },
    /// Title of the focused window, optionally shortened.
    WindowName {
        parse_text: Option<TextShortener>,
    },
    Systray,
    Clock {
        format: String,
    },
    Volume {
        fmt: String,
        mute_command: Option<String>,
    },
    QuickExit {
        default_text: String,
        countdown_format: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(default)]
    pub style: WidgetStyle,
}

impl Widget {
    pub fn new(kind: WidgetKind, style: WidgetStyle) -> Self {
        Self { kind, style }
    }

    pub fn spacer(length: u32, background: &str, decoration: PowerLinePath) -> Self {
        Self::new(
            WidgetKind::Spacer { length },
            WidgetStyle {
                background: Some(background.to_owned()),
                decorations: vec![Decoration::power_line(decoration)],
                ..WidgetStyle::default()
            },
        )
    }

    pub const fn name(&self) -> &'static str {
        match self.kind {
            WidgetKind::TextBox { .. } => "TextBox",
            WidgetKind::Spacer { .. } => "Spacer",
            WidgetKind::Net => "Net",
            WidgetKind::Memory { .. } => "Memory",
            WidgetKind::Cpu => "CPU",
            WidgetKind::GroupBox { .. } => "GroupBox",
            WidgetKind::WindowName { .. } => "WindowName",
            WidgetKind::Systray => "Systray",
            WidgetKind::Clock { .. } => "Clock",
            WidgetKind::Volume { .. } => "Volume",
            WidgetKind::QuickExit { .. } => "QuickExit",
        }
    }

    /// Text a `WindowName` widget shows for `title`. Other widgets return the title as is.
    pub fn display_text<'t>(&self, title: &'t str) -> Cow<'t, str> {
        match &self.kind {
            WidgetKind::WindowName {
                parse_text: Some(shortener),
            } => Cow::Owned(shortener.shorten(title)),
            _ => Cow::Borrowed(title),
        }
    }

    /// Every color this widget sets, style and widget specific ones alike.
    pub fn colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = self.style.colors().collect();
        if let WidgetKind::GroupBox {
            block_highlight_text_color,
            this_current_screen_border,
            this_screen_border,
            ..
        } = &self.kind
        {
            colors.extend(
                [
                    block_highlight_text_color,
                    this_current_screen_border,
                    this_screen_border,
                ]
                .into_iter()
                .filter_map(Option::as_deref),
            );
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_falls_back_to_defaults() {
        let defaults = WidgetDefaults {
            font: "Firacode Nerd Font".to_owned(),
            fontsize: 12,
            padding: 0,
        };
        let style = WidgetStyle {
            fontsize: Some(14),
            padding: Some(10),
            ..WidgetStyle::default()
        };
        let resolved = style.resolve(&defaults);
        assert_eq!(resolved.font, "Firacode Nerd Font");
        assert_eq!(resolved.fontsize, 14);
        assert_eq!(resolved.padding, 10);
        assert!(resolved.background.is_none());
    }

    #[test]
    fn window_name_shortens_title() {
        let name = Widget::new(
            WidgetKind::WindowName {
                parse_text: Some(TextShortener::default()),
            },
            WidgetStyle::default(),
        );
        assert_eq!(name.display_text("Mozilla Firefox"), "Firefox");

        let plain = Widget::new(
            WidgetKind::WindowName { parse_text: None },
            WidgetStyle::default(),
        );
        assert_eq!(plain.display_text("Mozilla Firefox"), "Mozilla Firefox");
    }

    #[test]
    fn spacer_carries_one_powerline_decoration() {
        let spacer = Widget::spacer(2, "#c678dd", PowerLinePath::ArrowLeft);
        assert_eq!(spacer.name(), "Spacer");
        assert_eq!(
            spacer.style.decorations,
            vec![Decoration::PowerLine {
                path: PowerLinePath::ArrowLeft,
                size: 12
            }]
        );
    }

    #[test]
    fn group_box_colors_are_collected() {
        let group_box = Widget::new(
            WidgetKind::GroupBox {
                borderwidth: 2,
                block_highlight_text_color: Some("#c678dd".to_owned()),
                this_current_screen_border: Some("#6b58a7".to_owned()),
                this_screen_border: None,
            },
            WidgetStyle {
                background: Some("#e5c07b".to_owned()),
                ..WidgetStyle::default()
            },
        );
        assert_eq!(group_box.colors(), vec!["#e5c07b", "#c678dd", "#6b58a7"]);
    }
}
