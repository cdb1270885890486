//! Unload and reload behavior

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{call_at, config, lib, read, returns};
use installkit::descriptor::{entry, group};
use installkit::value::{Container, Value};
use installkit::{InstallConfig, install_entries, install_one};

#[test]
fn test_unload_reload() {
    let lib = lib();
    let mut method_a = install_one(&config(), &lib, "methodA", returns("a")).unwrap();
    let mut object_b = install_one(
        &config(),
        &lib,
        "objectB",
        Container::object()
            .with("methodC", returns("b/c"))
            .with("propertyD", "b/d"),
    )
    .unwrap();

    assert_eq!(call_at(&lib, "methodA"), "a");
    assert_eq!(call_at(&lib, "objectB.methodC"), "b/c");
    assert_eq!(read(&lib, "objectB.propertyD"), Some(Value::from("b/d")));

    method_a.unload();
    assert!(!lib.contains("methodA"));

    method_a.reload().unwrap();
    assert_eq!(call_at(&lib, "methodA"), "a");

    assert_eq!(call_at(&lib, "objectB.methodC"), "b/c");
    object_b.unload();
    assert!(!lib.contains("objectB"));

    object_b.reload().unwrap();
    assert_eq!(read(&lib, "objectB.propertyD"), Some(Value::from("b/d")));
}

#[test]
fn test_unload_removes_every_path() {
    let lib = lib();
    let descriptor = group([
        entry("one", 1).build(),
        entry("deep.two", 2).build(),
        entry("deep.er.three", 3).build(),
    ])
    .namespace("root")
    .build();
    let mut controller = install_entries(&config(), &lib, &descriptor).unwrap();
    let paths: Vec<String> = controller.paths().iter().map(|p| p.to_string()).collect();
    assert_eq!(paths, vec!["root.one", "root.deep.two", "root.deep.er.three"]);

    controller.unload();
    for path in &paths {
        assert!(read(&lib, path).is_none(), "{path} should be gone");
    }
    // intermediate containers created on the way are left behind
    assert!(read(&lib, "root.deep.er").is_some());
}

#[test]
fn test_reload_restores_identity() {
    let lib = lib();
    let f = returns("f");
    let obj = Value::object();
    let descriptor = Value::Array(vec![
        entry("f", f.clone()).build(),
        entry("o.b.j", obj.clone()).build(),
    ]);
    let mut controller = install_entries(&config(), &lib, &descriptor).unwrap();
    controller.reload().unwrap();
    controller.reload().unwrap();
    assert_eq!(read(&lib, "f"), Some(f));
    assert_eq!(read(&lib, "o.b.j"), Some(obj));
}

#[test]
fn test_hooks_run_on_every_cycle() {
    let lib = lib();
    let events = Rc::new(RefCell::new(Vec::<&'static str>::new()));
    let (on_init, on_destroy) = (events.clone(), events.clone());
    let descriptor = entry("svc", 1)
        .on_init(move || on_init.borrow_mut().push("init"))
        .on_destroy(move || on_destroy.borrow_mut().push("destroy"))
        .build();

    let mut controller = install_entries(&config(), &lib, &descriptor).unwrap();
    controller.reload().unwrap();
    controller.unload();

    assert_eq!(
        *events.borrow(),
        vec!["init", "destroy", "init", "destroy"]
    );
}

#[test]
fn test_destroy_hook_sees_member_before_removal() {
    let lib = lib();
    let seen = Rc::new(RefCell::new(None));
    let (probe, slot) = (lib.clone(), seen.clone());
    let descriptor = entry("m", 7)
        .on_destroy(move || *slot.borrow_mut() = probe.get("m"))
        .build();
    let mut controller = install_entries(&config(), &lib, &descriptor).unwrap();
    controller.unload();
    assert_eq!(*seen.borrow(), Some(Value::from(7)));
    assert!(!lib.contains("m"));
}

#[test]
fn test_last_unloader_wins_on_overlap() {
    let lib = lib();
    let mut first = install_one(&config(), &lib, "x", 1).unwrap();
    let mut second =
        install_entries(&config(), &lib, &entry("x", 2).override_existing().build()).unwrap();
    assert_eq!(lib.get("x"), Some(Value::from(2)));

    first.unload();
    assert!(!lib.contains("x"));
    second.unload();
    assert!(!lib.contains("x"));
    assert!(!second.is_loaded());
}

#[test]
fn test_partial_init_can_still_be_unloaded() {
    let lib = lib().with("blocked", 0);
    let descriptor = Value::Array(vec![entry("ok", 1).build(), entry("blocked", 2).build()]);
    let err = install_entries(&config(), &lib, &descriptor).unwrap_err();
    assert!(err.to_string().contains("blocked"));
    assert_eq!(lib.get("ok"), Some(Value::from(1)));
}

#[test]
fn test_reload_with_custom_separator() {
    let config = InstallConfig::new("/").unwrap();
    let lib = lib();
    let mut controller = install_one(&config, &lib, "a/b.c", 1).unwrap();
    let a = lib.get("a").unwrap();
    assert_eq!(a.get("b.c"), Some(Value::from(1)));

    controller.reload().unwrap();
    assert_eq!(Value::Object(lib).lookup("a/b.c", "/"), Some(Value::from(1)));
}
