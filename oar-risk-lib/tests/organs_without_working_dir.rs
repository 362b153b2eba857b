//! Runs in its own test binary because it changes the process working directory.

#![cfg(unix)]

mod common;

use common::run;

#[test]
#[cfg_attr(miri, ignore = "Miri cannot change the working directory")]
fn test_organs_does_not_need_working_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let gone = tmp.path().join("gone");
    std::fs::create_dir(&gone).unwrap();
    std::env::set_current_dir(&gone).unwrap();
    std::fs::remove_dir(&gone).unwrap();
    assert!(std::env::current_dir().is_err());

    let host = run(&["organs"]);
    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    assert_eq!(host.output_str().lines().count(), 6);

    let host = run(&["summary"]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("determining the current directory"), "{}", host.error_str());
}
