use super::*;

#[test]
fn default_shell_matches_platform() {
    let shell = default_shell();
    if cfg!(windows) {
        assert_eq!(shell, "cmd.exe");
    } else if cfg!(unix) {
        assert_eq!(shell, "/bin/bash");
    } else {
        assert_eq!(shell, "/bin/sh");
    }
}

#[test]
fn shell_error_messages_name_the_failure() {
    assert_eq!(
        ShellError::Spawn("no such file".to_string()).to_string(),
        "failed to spawn shell: no such file"
    );
    assert_eq!(
        ShellError::Unsupported.to_string(),
        "terminal support is disabled"
    );
}

#[cfg(all(unix, feature = "terminal"))]
#[test]
fn spawned_shell_output_reaches_the_channel() {
    use std::time::{Duration, Instant};

    let Ok(mut shell) = ShellProcess::spawn_program("/bin/sh", 80, 24) else {
        // No pty available in this environment.
        return;
    };
    shell.write(b"echo jotpad-ready; exit\n").unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = Vec::new();
    while Instant::now() < deadline {
        let out = shell.drain_output(64);
        seen.extend_from_slice(&out.bytes);
        if String::from_utf8_lossy(&seen).contains("jotpad-ready") || out.closed {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    assert!(String::from_utf8_lossy(&seen).contains("jotpad-ready"));
}

#[cfg(not(feature = "terminal"))]
#[test]
fn spawn_without_terminal_feature_is_unsupported() {
    assert!(matches!(
        ShellProcess::spawn(80, 24),
        Err(ShellError::Unsupported)
    ));
}
