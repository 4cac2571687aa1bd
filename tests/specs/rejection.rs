//! Invalid operations are rejected with a nonzero exit and a reason on
//! stderr, and never mutate state.

use crate::harness::{run, run_expect_failure, Manager};

#[test]
fn duplicate_create_is_rejected() {
    let manager = Manager::start();
    run(manager.cmctl().args(["create", "web-1"]));

    let stderr = run_expect_failure(manager.cmctl().args(["create", "web-1"]));
    assert!(stderr.contains("web-1"));
}

#[test]
fn start_on_unknown_tag_is_rejected() {
    let manager = Manager::start();
    let stderr = run_expect_failure(manager.cmctl().args(["start", "ghost", "/bin/true"]));
    assert!(stderr.contains("ghost"));
}

#[test]
fn stop_on_a_ready_container_is_rejected() {
    let manager = Manager::start();
    run(manager.cmctl().args(["create", "web-1"]));
    let stderr = run_expect_failure(manager.cmctl().args(["stop", "web-1"]));
    assert!(stderr.contains("web-1"));
}

#[test]
fn list_with_an_unknown_tag_filter_is_rejected() {
    let manager = Manager::start();
    let stderr = run_expect_failure(manager.cmctl().args(["list", "ghost"]));
    assert!(stderr.contains("ghost"));
}
