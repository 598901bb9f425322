use crate::Config;
use anyhow::{self, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r"//  _   _ _                 __
// | |_(_) | ___  ___ ___  / _| __ _
// | __| | |/ _ \/ __/ _ \| |_ / _` |
// | |_| | |  __/ (_| (_) |  _| (_| |
//  \__|_|_|\___|\___\___/|_|  \__, |
//                             |___/
// Keys, groups, bars and rules of your tiling desktop.

";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: impl AsRef<Path>) -> ConfigFileType {
    if path.as_ref().extension() == Some(std::ffi::OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// Loads the config, falling back to [`Config::default`] on any error.
#[must_use]
pub fn load() -> Config {
    load_config_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// `$XDG_CONFIG_HOME/tilecfg/config.ron`
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined or the config directory cannot be
/// created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tilecfg")?;
    Ok(path.place_config_file("config.ron")?)
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, if the config file cannot be read (access rights,
/// malformed file, etc.).
/// Function can also error from inability to save config.ron (if it is the first time
/// running `tilecfg`).
pub fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    let config_file_ron = get_default_path()?;
    let config_file_toml = config_file_ron.with_extension("toml");

    if config_file_ron.exists() {
        tracing::debug!("Config file '{}' found.", config_file_ron.to_string_lossy());
        load_from_path(&config_file_ron)
    } else if config_file_toml.exists() {
        tracing::debug!(
            "Config file '{}' found.",
            config_file_toml.to_string_lossy()
        );
        tracing::info!("You are using TOML as config language which will be deprecated in the future.\nPlease consider migrating your config to RON.");
        load_from_path(&config_file_toml)
    } else {
        tracing::debug!("Config file not found. Using default config file.");

        let config = Config::default();
        write_to_file(&config_file_ron, &config)?;
        Ok(config)
    }
}

/// Loads a config file, RON or TOML depending on its extension.
///
/// # Errors
///
/// Errors if the file cannot be read or does not parse.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    match check_file_type(path) {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(&contents)?)
        }
        ConfigFileType::TomlFile => Ok(toml::from_str(&contents)?),
    }
}

/// # Errors
///
/// Errors if serialization fails.
pub fn to_ron(config: &Config) -> Result<String> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    Ok(to_string_pretty(config, ron_pretty_conf)?)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron_with_header = String::from(COMMENT_HEADER) + &to_ron(config)?;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
