//! Happy-path container lifecycle, driven entirely through `cmctl`.

use crate::harness::{run, Manager};

#[test]
fn create_start_list_shows_the_container_enqueued() {
    let manager = Manager::start();

    let out = run(manager.cmctl().args(["create", "web-1"]));
    assert!(out.contains("created web-1"));

    let out = run(manager.cmctl().args(["start", "web-1", "/bin/true"]));
    assert!(out.contains("started web-1"));

    // No executor is attached, so the container is enqueued but never
    // transitions past READY.
    let out = run(manager.cmctl().args(["list"]));
    assert!(out.contains("web-1"));
    assert!(out.contains("ready"));
}

#[test]
fn list_json_round_trips_through_serde() {
    let manager = Manager::start();
    run(manager.cmctl().args(["create", "web-1"]));

    let out = run(manager.cmctl().args(["list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(parsed[0]["tag"], "web-1");
    assert_eq!(parsed[0]["state"], "Ready");
}

#[test]
fn delete_removes_a_ready_container_from_the_list() {
    let manager = Manager::start();
    run(manager.cmctl().args(["create", "web-1"]));
    run(manager.cmctl().args(["delete", "web-1"]));

    let out = run(manager.cmctl().args(["list"]));
    assert!(out.contains("No containers"));
}
