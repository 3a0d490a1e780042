use std::path::{Path, PathBuf};

use crate::error::Error;

/// Returns the identifier of the current process.
pub fn current_process_id() -> u32 {
    std::process::id()
}

/// Returns the path of the executable of the current process.
pub fn current_process_path() -> Option<PathBuf> {
    std::env::current_exe().ok()
}

/// Returns the directory containing the executable of the current process.
pub fn current_process_dir() -> Option<PathBuf> {
    current_process_path()?.parent().map(Path::to_path_buf)
}

#[cfg(unix)]
fn to_pid(pid: u32) -> Option<libc::pid_t> {
    libc::pid_t::try_from(pid).ok().filter(|pid| *pid > 0)
}

/// Checks whether a process with the given identifier exists.
#[cfg(unix)]
pub fn is_running(pid: u32) -> bool {
    let Some(pid) = to_pid(pid) else {
        return false;
    };

    // signal 0 only checks that the process can be signaled
    let result = unsafe { libc::kill(pid, 0) };
    result == 0 || std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

/// Checks whether a process with the given identifier exists.
#[cfg(not(unix))]
pub fn is_running(_pid: u32) -> bool {
    false
}

/// Forcefully terminates the process with the given identifier.
#[cfg(unix)]
pub fn kill(pid: u32) -> Result<(), Error> {
    let target = to_pid(pid).ok_or_else(|| Error::Generic(format!("invalid process id: {pid}")))?;

    if unsafe { libc::kill(target, libc::SIGKILL) } != 0 {
        return Err(Error::IOError(std::io::Error::last_os_error()));
    }
    tracing::debug!("sent SIGKILL to process {}", pid);
    Ok(())
}

/// Forcefully terminates the process with the given identifier.
#[cfg(not(unix))]
pub fn kill(pid: u32) -> Result<(), Error> {
    Err(Error::Generic(format!("unable to terminate process {pid}: unsupported platform")))
}

#[cfg(test)]
mod tests {
    use crate::utils::process::*;

    #[test]
    fn test_current_process() {
        assert!(current_process_id() > 0);

        let path = current_process_path().expect("should find executable");
        assert!(path.is_file());

        let dir = current_process_dir().expect("should find executable directory");
        assert!(path.starts_with(dir));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_running_current_process() {
        assert!(is_running(current_process_id()));
        assert!(!is_running(0));
        assert!(!is_running(u32::MAX));
    }

    #[cfg(unix)]
    #[test]
    fn test_kill_child_process() {
        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep");

        assert!(is_running(child.id()));
        kill(child.id()).expect("failed to kill child");

        let status = child.wait().expect("failed to wait for child");
        assert!(!status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_kill_invalid_pid() {
        assert!(kill(0).is_err());
    }
}
