use super::keybind::{Keybind, MouseBind, MODKEY};
use super::Config;
use tilecfg_core::models::{
    Bar, ColorTable, FloatingLayout, FocusOnActivation, Group, Layout, Match, PowerLinePath,
    Screen, WallpaperMode, Widget, WidgetDefaults, WidgetKind, WidgetStyle,
};
use tilecfg_core::{Command, LayoutCommand, TextShortener, WindowCommand};

const BLACK: &str = "#282c34";
const WHITE: &str = "#abb2bf";
const LIGHT_RED: &str = "#e06c75";
const DARK_RED: &str = "#be5046";
const GREEN: &str = "#98c379";
const LIGHT_YELLOW: &str = "#e5c07b";
const DARK_YELLOW: &str = "#d19a66";
const BLUE: &str = "#61afef";
const MAGENTA: &str = "#c678dd";
const CYAN: &str = "#56b6c2";
const GUTTER_GREY: &str = "#4b5263";
const COMMENT_GREY: &str = "#5c6370";
const MIDNIGHT_BLUE: &str = "#003366";
const SMALT: &str = "#033494";
const ORANGE: &str = "#ff5f1f";

const LAVENDER: &str = "#BC96E6";
const PURPLE: &str = "#6b58a7";

const FONT: &str = "Firacode Nerd Font";
const GROUP_NAMES: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

impl Default for Config {
    fn default() -> Self {
        let terminal = "alacritty".to_owned();
        let widget_defaults = WidgetDefaults {
            font: FONT.to_owned(),
            fontsize: 12,
            padding: 0,
        };
        let mut float_rules = FloatingLayout::default().float_rules;
        float_rules.extend([
            Match::wm_class("confirmreset"),
            Match::wm_class("makebranch"),
            Match::wm_class("maketag"),
            Match::wm_class("ssh-askpass"),
            Match::title("branchdialog"),
            Match::title("pinentry"),
        ]);

        Self {
            log_level: "info".to_owned(),
            modkey: "mod1".to_owned(),
            keybind: default_keybinds(&terminal),
            terminal,
            autostart: Some("~/.config/tilecfg/scripts/start.sh".to_owned()),
            colors: default_colors(),
            groups: GROUP_NAMES.iter().map(|name| Group::new(*name)).collect(),
            group_hotkeys: "123456789".to_owned(),
            layouts: vec![
                Layout::Columns {
                    border_focus_stack: vec!["#d75f5f".to_owned(), "#8f3d3d".to_owned()],
                    border_width: 1,
                    margin: 8,
                },
                Layout::Max,
            ],
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: vec![Screen {
                top: Some(top_bar()),
                bottom: Some(bottom_bar()),
                wallpaper: Some("~/.config/tilecfg/wallpapers/01.png".to_owned()),
                wallpaper_mode: Some(WallpaperMode::Stretch),
            }],
            mouse: default_mouse(),
            shortener: TextShortener::default(),
            dgroups_key_binder: None,
            dgroups_app_rules: vec![],
            follow_mouse_focus: true,
            bring_front_click: false,
            floats_kept_above: true,
            cursor_warp: false,
            floating_layout: FloatingLayout { float_rules },
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            wmname: "LG3D".to_owned(),
        }
    }
}

fn default_colors() -> ColorTable {
    [
        ("Black", BLACK),
        ("White", WHITE),
        ("Light Red", LIGHT_RED),
        ("Dark Red", DARK_RED),
        ("Green", GREEN),
        ("Light Yellow", LIGHT_YELLOW),
        ("Dark Yellow", DARK_YELLOW),
        ("Blue", BLUE),
        ("Magenta", MAGENTA),
        ("Cyan", CYAN),
        ("Gutter Grey", GUTTER_GREY),
        ("Comment Grey", COMMENT_GREY),
        ("Midnight Blue", MIDNIGHT_BLUE),
        ("Smalt", SMALT),
        ("Orange", ORANGE),
    ]
    .into_iter()
    .collect()
}

// One long list on purpose, it reads like the keymap it declares.
#[allow(clippy::too_many_lines)]
fn default_keybinds(terminal: &str) -> Vec<Keybind> {
    use LayoutCommand as L;
    use WindowCommand as W;

    let m = &[MODKEY][..];
    let ms = &[MODKEY, "shift"][..];
    let mc = &[MODKEY, "control"][..];
    let none = &[][..];

    vec![
        // Switch between windows
        Keybind::new(m, "h", Command::Layout(L::Left)).desc("Move focus to left"),
        Keybind::new(m, "l", Command::Layout(L::Right)).desc("Move focus to right"),
        Keybind::new(m, "j", Command::Layout(L::Down)).desc("Move focus down"),
        Keybind::new(m, "k", Command::Layout(L::Up)).desc("Move focus up"),
        Keybind::new(m, "space", Command::Layout(L::Next))
            .desc("Move window focus to other window"),
        // Move windows between columns or up/down in the current stack
        Keybind::new(ms, "h", Command::Layout(L::ShuffleLeft)).desc("Move window to the left"),
        Keybind::new(ms, "l", Command::Layout(L::ShuffleRight))
            .desc("Move window to the right"),
        Keybind::new(ms, "j", Command::Layout(L::ShuffleDown)).desc("Move window down"),
        Keybind::new(ms, "k", Command::Layout(L::ShuffleUp)).desc("Move window up"),
        // Grow windows, shrinks when already at the screen edge
        Keybind::new(mc, "h", Command::Layout(L::GrowLeft)).desc("Grow window to the left"),
        Keybind::new(mc, "l", Command::Layout(L::GrowRight)).desc("Grow window to the right"),
        Keybind::new(mc, "j", Command::Layout(L::GrowDown)).desc("Grow window down"),
        Keybind::new(mc, "k", Command::Layout(L::GrowUp)).desc("Grow window up"),
        Keybind::new(m, "n", Command::Layout(L::Normalize)).desc("Reset all window sizes"),
        Keybind::new(ms, "Return", Command::Layout(L::ToggleSplit))
            .desc("Toggle between split and unsplit sides of stack"),
        Keybind::new(m, "Return", Command::spawn(terminal)).desc("Launch terminal"),
        Keybind::new(m, "Tab", Command::NextLayout).desc("Toggle between layouts"),
        Keybind::new(m, "q", Command::Window(W::Kill)).desc("Kill focused window"),
        Keybind::new(m, "f", Command::Window(W::ToggleFullscreen))
            .desc("Toggle fullscreen on the focused window"),
        Keybind::new(m, "t", Command::Window(W::ToggleFloating))
            .desc("Toggle floating on the focused window"),
        Keybind::new(mc, "r", Command::ReloadConfig).desc("Reload the config"),
        Keybind::new(mc, "q", Command::Shutdown).desc("Shutdown the window manager"),
        // Applications
        Keybind::new(m, "w", Command::spawn("firefox")).desc("launch firefox"),
        Keybind::new(m, "r", Command::spawn("rofi -show drun")).desc("Rofi"),
        // Audio
        Keybind::new(m, "minus", Command::spawn("amixer sset Master,0 5%-")),
        Keybind::new(m, "equal", Command::spawn("amixer sset Master,0 5%+")),
        Keybind::new(none, "XF86AudioLowerVolume", Command::spawn("amixer sset Master,0 1%-")),
        Keybind::new(none, "XF86AudioRaiseVolume", Command::spawn("amixer sset Master,0 1%+")),
        Keybind::new(none, "XF86AudioMute", Command::spawn("amixer sset Master,0 toggle")),
        Keybind::new(none, "XF86AudioPause", Command::spawn("playerctl play-pause"))
            .desc("Play/Pause player"),
        Keybind::new(none, "XF86AudioPlay", Command::spawn("playerctl play-pause"))
            .desc("Play/Pause player"),
        Keybind::new(none, "XF86AudioNext", Command::spawn("playerctl next"))
            .desc("Skip to next"),
        Keybind::new(none, "XF86AudioPrev", Command::spawn("playerctl previous"))
            .desc("Skip to previous"),
        Keybind::new(none, "XF86AudioStop", Command::spawn("playerctl stop")).desc("Stop"),
    ]
}

fn default_mouse() -> Vec<MouseBind> {
    vec![
        MouseBind::Drag {
            modifier: Some(MODKEY.into()),
            button: "Button1".to_owned(),
            command: Command::Window(WindowCommand::SetPositionFloating),
            start: Some(Command::Window(WindowCommand::GetPosition)),
        },
        MouseBind::Drag {
            modifier: Some(MODKEY.into()),
            button: "Button3".to_owned(),
            command: Command::Window(WindowCommand::SetSizeFloating),
            start: Some(Command::Window(WindowCommand::GetSize)),
        },
        MouseBind::Click {
            modifier: Some(MODKEY.into()),
            button: "Button2".to_owned(),
            command: Command::Window(WindowCommand::BringToFront),
        },
    ]
}

fn style(background: &str, foreground: Option<&str>) -> WidgetStyle {
    WidgetStyle {
        background: Some(background.to_owned()),
        foreground: foreground.map(ToOwned::to_owned),
        ..WidgetStyle::default()
    }
}

fn bottom_bar() -> Bar {
    use PowerLinePath::ArrowLeft;

    Bar::new(
        vec![
            Widget::new(
                WidgetKind::TextBox {
                    text: "\u{e78e}".to_owned(),
                },
                WidgetStyle {
                    padding: Some(10),
                    fontsize: Some(36),
                    ..style(MAGENTA, Some(BLACK))
                },
            ),
            Widget::spacer(2, MAGENTA, ArrowLeft),
            Widget::new(
                WidgetKind::Net,
                WidgetStyle {
                    padding: Some(10),
                    ..style(BLACK, None)
                },
            ),
            Widget::spacer(2, BLACK, ArrowLeft),
            Widget::new(
                WidgetKind::Memory {
                    format: "RAM {MemPercent}%".to_owned(),
                },
                WidgetStyle {
                    padding: Some(10),
                    fontsize: Some(14),
                    ..style(LAVENDER, Some(BLACK))
                },
            ),
            Widget::spacer(2, LAVENDER, ArrowLeft),
            Widget::new(
                WidgetKind::Cpu,
                WidgetStyle {
                    padding: Some(10),
                    ..style(BLACK, None)
                },
            ),
            Widget::spacer(1, BLACK, ArrowLeft),
            Widget::spacer(1, LAVENDER, ArrowLeft),
        ],
        25,
    )
    .margin(10)
    .background(BLACK)
}

fn top_bar() -> Bar {
    use PowerLinePath::{ArrowLeft, RoundedLeft, RoundedRight};

    Bar::new(
        vec![
            Widget::new(
                WidgetKind::TextBox {
                    text: " \u{e77d} ".to_owned(),
                },
                WidgetStyle {
                    fontsize: Some(20),
                    ..style(MAGENTA, Some(BLACK))
                },
            ),
            Widget::spacer(2, MAGENTA, RoundedLeft),
            Widget::new(
                WidgetKind::GroupBox {
                    borderwidth: 2,
                    block_highlight_text_color: Some(MAGENTA.to_owned()),
                    this_current_screen_border: Some(PURPLE.to_owned()),
                    this_screen_border: Some(PURPLE.to_owned()),
                },
                WidgetStyle {
                    font: Some(FONT.to_owned()),
                    fontsize: Some(15),
                    padding: Some(3),
                    ..style(LIGHT_YELLOW, Some(BLACK))
                },
            ),
            Widget::spacer(2, LIGHT_YELLOW, RoundedLeft),
            Widget::new(
                WidgetKind::WindowName {
                    parse_text: Some(TextShortener::default()),
                },
                WidgetStyle {
                    fontsize: Some(13),
                    padding: Some(29),
                    ..style(DARK_YELLOW, Some(BLACK))
                },
            ),
            Widget::spacer(1, DARK_YELLOW, ArrowLeft),
            Widget::spacer(400, BLACK, RoundedRight),
            Widget::new(WidgetKind::Systray, style(PURPLE, None)),
            Widget::spacer(2, PURPLE, RoundedRight),
            Widget::new(
                WidgetKind::Clock {
                    format: "\u{f073} %d/%m/%y \u{f0954} %H:%M".to_owned(),
                },
                WidgetStyle {
                    fontsize: Some(14),
                    ..style(BLUE, Some(BLACK))
                },
            ),
            Widget::spacer(2, BLUE, RoundedRight),
            Widget::new(
                WidgetKind::Volume {
                    fmt: "\u{fa7d} {}".to_owned(),
                    mute_command: Some("amixer -D pulse set Master toggle".to_owned()),
                },
                WidgetStyle {
                    fontsize: Some(14),
                    padding: Some(10),
                    ..style(GREEN, Some(BLACK))
                },
            ),
            Widget::spacer(1, GREEN, RoundedRight),
            Widget::new(
                WidgetKind::QuickExit {
                    default_text: "\u{f05fc}".to_owned(),
                    countdown_format: "{}".to_owned(),
                },
                WidgetStyle {
                    fontsize: Some(20),
                    padding: Some(10),
                    ..style(DARK_RED, None)
                },
            ),
        ],
        28,
    )
    .margin(5)
}
