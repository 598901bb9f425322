use crate::child_process;
use crate::{LayoutCommand, WindowCommand};

/// The window manager engine a configuration is handed to.
///
/// Every [`crate::Command`] ends up as exactly one call on this trait. Spawning has a default
/// implementation: the command line runs through `sh -c` and is never waited on.
pub trait Host {
    fn layout(&mut self, command: LayoutCommand);

    fn window(&mut self, command: &WindowCommand);

    fn group_to_screen(&mut self, group: &str);

    fn next_layout(&mut self);

    fn reload_config(&mut self);

    fn shutdown(&mut self);

    fn spawn(&mut self, cmdline: &str) {
        _ = child_process::exec_shell(cmdline);
    }
}
