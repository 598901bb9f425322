use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::{Path, PathBuf};
use tilecfg::utils::file_handler::{check_file_type, get_default_path, load_from_path};
use tilecfg::Config;
use tilecfg_core::child_process::Nanny;

fn main() -> Result<()> {
    let matches = command!("tilecfg Check")
        .about("Checks syntax and contents of the configuration file")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses $XDG_CONFIG_HOME/tilecfg/config.ron otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilecfg version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilecfg git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );
    if verbose {
        match Nanny::get_config_dir() {
            Ok(dir) => println!("\x1b[0;94m::\x1b[0m Config directory: {}", dir.display()),
            Err(err) => println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m"),
        }
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            bail!("configuration could not be loaded");
        }
    };

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    let report = config.check(verbose);
    for finding in &report.findings {
        println!("{finding}");
    }
    if report.is_empty() {
        println!("\x1b[0;92m    -> No issues found \x1b[0m");
    }
    if report.has_errors() {
        bail!(
            "{} error(s) found",
            report
                .findings
                .iter()
                .filter(|f| f.severity == tilecfg::Severity::Error)
                .count()
        );
    }

    Ok(())
}

/// Loads `fspath`, or the default config file, without falling back to the defaults.
fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_file = match fspath {
        Some(fspath) => {
            println!("\x1b[1;35mNote: Using file {fspath} \x1b[0m");
            PathBuf::from(fspath)
        }
        None => get_default_path()?,
    };
    if !Path::new(&config_file).exists() {
        bail!("Configuration file not found: {}", config_file.display());
    }
    if verbose {
        println!(
            "\x1b[0;94m::\x1b[0m Reading {:?} file {}",
            check_file_type(&config_file),
            config_file.display()
        );
    }
    load_from_path(&config_file)
}
