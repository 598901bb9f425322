mod color;
mod flags;
mod float_rule;
mod group;
mod keybind;
mod layout;
mod screen;
mod widget;

pub use color::{is_hex_color, ColorTable};
pub use flags::{AppRule, FocusOnActivation, InputRule};
pub use float_rule::{default_float_rules, FloatingLayout, Match, WindowProps};
pub use group::{group_keybinds, Group};
pub use keybind::{Bindings, Keybind, MouseAction};
pub use layout::Layout;
pub use screen::{Bar, BarPosition, Screen, WallpaperMode};
pub use widget::{
    Decoration, PowerLinePath, ResolvedStyle, Widget, WidgetDefaults, WidgetKind, WidgetStyle,
};
