/// Hand a path to the desktop's file manager.
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Open `path` in the system file manager.
///
/// Directories are opened directly. For files the parent folder is opened,
/// with the file pre-selected where the platform supports it (Explorer's
/// `/select,` and Finder's `-R`).
pub fn reveal_in_file_manager(path: &Path, is_dir: bool) -> io::Result<()> {
    spawn_detached(reveal_command(path, is_dir)).map(|_| ())
}

/// Start `cmd` without blocking, with a background thread that waits on the
/// child so it is reaped when it exits.
fn spawn_detached(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    tracing::debug!("Spawning {:?}", cmd);
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || {
        let status = child.wait();
        if let Err(e) = &status {
            tracing::debug!("Waiting on file manager process failed: {}", e);
        }
        status
    }))
}

#[cfg(windows)]
fn reveal_command(path: &Path, is_dir: bool) -> Command {
    let mut cmd = Command::new("explorer.exe");
    if is_dir {
        cmd.arg(path);
    } else {
        let mut arg = std::ffi::OsString::from("/select,");
        arg.push(path);
        cmd.arg(arg);
    }
    cmd
}

#[cfg(target_os = "macos")]
fn reveal_command(path: &Path, is_dir: bool) -> Command {
    let mut cmd = Command::new("open");
    if !is_dir {
        cmd.arg("-R");
    }
    cmd.arg(path);
    cmd
}

#[cfg(not(any(windows, target_os = "macos")))]
fn reveal_command(path: &Path, is_dir: bool) -> Command {
    let target = if is_dir {
        path
    } else {
        path.parent().unwrap_or(path)
    };
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn spawned_child_is_waited_on() {
        let waiter = spawn_detached(Command::new("true")).unwrap();
        let status = waiter.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let result = spawn_detached(Command::new("folderview-no-such-program"));
        assert!(result.is_err());
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    #[test]
    fn files_open_their_parent_folder() {
        let cmd = reveal_command(Path::new("/home/user/notes.md"), false);
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![Path::new("/home/user").as_os_str()]);
    }
}
