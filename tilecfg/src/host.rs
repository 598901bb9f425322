use tilecfg_core::{child_process, Host, LayoutCommand, WindowCommand};

/// A host without a window manager behind it: every action is logged, spawns run for real.
///
/// Used by `tilecfg press` and `tilecfg click` to try out bindings.
#[derive(Debug, Default)]
pub struct TracingHost {
    /// Log spawns instead of running them.
    pub dry_run: bool,
    pub spawned: Vec<u32>,
}

impl TracingHost {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            spawned: vec![],
        }
    }
}

impl Host for TracingHost {
    fn layout(&mut self, command: LayoutCommand) {
        tracing::info!("layout.{}()", command.name());
    }

    fn window(&mut self, command: &WindowCommand) {
        tracing::info!("{}", command);
    }

    fn group_to_screen(&mut self, group: &str) {
        tracing::info!("group[{}].toscreen()", group);
    }

    fn next_layout(&mut self) {
        tracing::info!("next_layout()");
    }

    fn reload_config(&mut self) {
        tracing::info!("reload_config()");
    }

    fn shutdown(&mut self) {
        tracing::info!("shutdown()");
    }

    fn spawn(&mut self, cmdline: &str) {
        if self.dry_run {
            tracing::info!("spawn (dry run): {}", cmdline);
            return;
        }
        if let Some(pid) = child_process::exec_shell(cmdline) {
            tracing::info!("spawn: {} (pid {})", cmdline, pid);
            self.spawned.push(pid);
        }
    }
}
