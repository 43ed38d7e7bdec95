//! Runs `NmapExecutor` against stub scripts standing in for nmap.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use netbaseline_core::{parse_scan_output, Error, NmapExecutor, ScanExecutor};
use tempfile::tempdir;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

// Scripts are created and run from a single test so no other test thread
// forks while a script is still open for writing.
#[tokio::test]
async fn stub_nmap_scripts() {
    let dir = tempdir().unwrap();
    let args_file = dir.path().join("args.txt");

    let ok = write_script(
        dir.path(),
        "nmap-ok",
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\n\
             echo 'PORT     STATE SERVICE VERSION'\n\
             echo '22/tcp   open  ssh     OpenSSH 9.6p1'\n\
             echo '3306/tcp open  mysql   MySQL 8.0.36'\n\
             echo ''\n\
             echo 'Nmap done: 1 IP address (1 host up) scanned in 1.02 seconds'",
            args_file.display()
        ),
    );
    let failing = write_script(
        dir.path(),
        "nmap-fail",
        "echo 'Failed to resolve \"no-such-host\".' >&2\nexit 1",
    );
    let slow = write_script(dir.path(), "nmap-slow", "sleep 5");

    // Successful run: output is returned verbatim and the argv matches nmap's flags.
    let output = NmapExecutor::with_path(Some(ok))
        .scan("127.0.0.1", "1-1024")
        .await
        .unwrap();
    let result = parse_scan_output(&output);
    assert_eq!(result.get(22), Some("ssh"));
    assert_eq!(result.get(3306), Some("mysql"));
    assert_eq!(result.len(), 2);

    let args: Vec<String> = std::fs::read_to_string(&args_file)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(args, NmapExecutor::scan_args("127.0.0.1", "1-1024"));

    // Non-zero exit surfaces stderr.
    let err = NmapExecutor::with_path(Some(failing))
        .scan("no-such-host", "80")
        .await
        .unwrap_err();
    match err {
        Error::CommandFailed(msg) => assert!(msg.contains("no-such-host")),
        other => panic!("unexpected error: {other}"),
    }

    // A hanging scanner is cut off by the timeout.
    let err = NmapExecutor::with_path(Some(slow))
        .with_timeout(Some(Duration::from_millis(200)))
        .scan("127.0.0.1", "22")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}
