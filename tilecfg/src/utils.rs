pub mod file_handler;
pub mod log;

use std::path::PathBuf;

#[must_use]
pub const fn get_help_template() -> &'static str {
    "\
{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}
"
}

/// Expands a leading `~` and `$VARS`. The path is not checked for existence.
pub fn expand_path(path: &str) -> PathBuf {
    shellexpand::full(path).map_or_else(
        |err| {
            tracing::warn!("Could not expand path {}: {}", path, err);
            PathBuf::from(shellexpand::tilde(path).as_ref())
        },
        |expanded| PathBuf::from(expanded.as_ref()),
    )
}
