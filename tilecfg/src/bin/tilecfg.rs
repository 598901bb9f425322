//! Inspects and exercises the tiling desktop configuration.
//!
//! Loads the config file (or the default declaration) once and runs a single subcommand on it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilecfg::utils::{file_handler, log};
use tilecfg::{Config, TracingHost};
use tilecfg_core::utils::modmask_lookup::{into_button, into_modmask};
use tilecfg_core::ShortenPolicy;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Loads the tilecfg configuration and lets you inspect it: dump it, list the \
             key bindings, try the title shortener or trigger a binding as the window manager \
             would."
)]
struct TilecfgCli {
    /// Config file to use instead of $XDG_CONFIG_HOME/tilecfg/config.ron
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    subcommand: TilecfgSubcommand,
}

#[derive(Debug, Subcommand)]
enum TilecfgSubcommand {
    /// Print the loaded configuration
    Dump {
        /// Print JSON instead of RON
        #[arg(long)]
        json: bool,
    },
    /// List every key and mouse binding, group keys included
    Keys,
    /// Shorten a window title the way the window name widget does
    Shorten {
        text: Vec<String>,
        /// first-match or rebind, overrides the configured policy
        #[arg(short, long)]
        policy: Option<ShortenPolicy>,
    },
    /// Run the command bound to a key combination
    Press {
        key: String,
        modifiers: Vec<String>,
        /// Log spawned commands instead of running them
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Run the command bound to a mouse button, drags run their start command
    Click {
        button: String,
        modifiers: Vec<String>,
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Run the autostart script
    Autostart,
}

fn main() -> Result<()> {
    let cli = TilecfgCli::parse();

    let config = match &cli.config {
        Some(path) => file_handler::load_from_path(path)
            .with_context(|| format!("could not load {}", path.display()))?,
        None => file_handler::load(),
    };
    log::setup_logging(&config.log_level);

    match cli.subcommand {
        TilecfgSubcommand::Dump { json } => dump(&config, json)?,
        TilecfgSubcommand::Keys => list_keys(&config),
        TilecfgSubcommand::Shorten { text, policy } => {
            let mut shortener = config.shortener.clone();
            if let Some(policy) = policy {
                shortener.policy = policy;
            }
            println!("{}", shortener.shorten(&text.join(" ")));
        }
        TilecfgSubcommand::Press {
            key,
            modifiers,
            dry_run,
        } => {
            let modmask = into_modmask(&modifiers)?;
            let mut host = TracingHost::new(dry_run);
            if !config.bindings().press_key(modmask, &key, &mut host) {
                println!("Nothing bound to {modmask}+{key}");
            }
        }
        TilecfgSubcommand::Click {
            button,
            modifiers,
            dry_run,
        } => {
            let modmask = into_modmask(&modifiers)?;
            let button = into_button(&button)?;
            let mut host = TracingHost::new(dry_run);
            if !config.bindings().press_mouse(modmask, button, &mut host) {
                println!("Nothing bound to {modmask}+{button:?}");
            }
        }
        TilecfgSubcommand::Autostart => match config.autostart_hook() {
            Some(hook) => {
                if let Some(pid) = hook.fire() {
                    tracing::info!("Started {} as pid {}", hook.script().display(), pid);
                }
            }
            None => println!("No autostart script configured."),
        },
    }

    Ok(())
}

fn dump(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("{}", file_handler::to_ron(config)?);
    }
    Ok(())
}

fn list_keys(config: &Config) {
    let bindings = config.bindings();
    for keybind in &bindings.keys {
        let combo = if keybind.modmask.is_empty() {
            keybind.key.clone()
        } else {
            format!("{}+{}", keybind.modmask, keybind.key)
        };
        println!(
            "{:<28} {:<40} {}",
            combo,
            keybind.command.to_string(),
            keybind.desc.as_deref().unwrap_or_default()
        );
    }
    for action in &bindings.mouse {
        println!("{}+{:?}  {:?}", action.modmask(), action.button(), action);
    }
}
