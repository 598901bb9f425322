use super::Widget;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPosition {
    Top,
    Bottom,
}

/// A strip of widgets along one screen edge. Widgets are placed left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    pub margin: u32,
    pub background: Option<String>,
}

impl Bar {
    pub fn new(widgets: Vec<Widget>, size: u32) -> Self {
        Self {
            widgets,
            size,
            margin: 0,
            background: None,
        }
    }

    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperMode {
    Fill,
    Stretch,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Screen {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
    /// Image path, `~` is expanded when the wallpaper gets applied.
    pub wallpaper: Option<String>,
    pub wallpaper_mode: Option<WallpaperMode>,
}

impl Screen {
    pub const fn bar(&self, position: BarPosition) -> Option<&Bar> {
        match position {
            BarPosition::Top => self.top.as_ref(),
            BarPosition::Bottom => self.bottom.as_ref(),
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = (BarPosition, &Bar)> {
        [BarPosition::Top, BarPosition::Bottom]
            .into_iter()
            .filter_map(|position| self.bar(position).map(|bar| (position, bar)))
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.bars().flat_map(|(_, bar)| bar.widgets.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WidgetKind, WidgetStyle};

    #[test]
    fn bars_by_position() {
        let screen = Screen {
            bottom: Some(Bar::new(vec![], 25).margin(10)),
            ..Screen::default()
        };
        assert!(screen.bar(BarPosition::Top).is_none());
        assert_eq!(screen.bar(BarPosition::Bottom).unwrap().margin, 10);
        assert_eq!(screen.bars().count(), 1);
    }

    #[test]
    fn widgets_are_listed_top_bar_first() {
        let widget = |kind| Widget::new(kind, WidgetStyle::default());
        let screen = Screen {
            top: Some(Bar::new(vec![widget(WidgetKind::Systray)], 28)),
            bottom: Some(Bar::new(vec![widget(WidgetKind::Cpu), widget(WidgetKind::Net)], 25)),
            ..Screen::default()
        };
        let names: Vec<&str> = screen.widgets().map(Widget::name).collect();
        assert_eq!(names, vec!["Systray", "CPU", "Net"]);
    }
}
