//! Property tests for install, unload and reload

mod common;

use common::{config, lib, read};
use installkit::descriptor::{entry, group};
use installkit::value::Value;
use installkit::{InstallError, install_entries, install_one};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn dotted_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segments| segments.join("."))
}

fn content() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6f64..1.0e6).prop_map(Value::Number),
        "[ -~]{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn installed_content_reads_back(path in dotted_path(), value in content()) {
        let lib = lib();
        install_one(&config(), &lib, &path, value.clone()).unwrap();
        prop_assert_eq!(read(&lib, &path), Some(value));
    }

    #[test]
    fn unload_makes_path_absent(path in dotted_path(), value in content()) {
        let lib = lib();
        let mut controller = install_one(&config(), &lib, &path, value).unwrap();
        controller.unload();
        prop_assert!(read(&lib, &path).is_none());
    }

    #[test]
    fn reload_restores_content(path in dotted_path(), value in content()) {
        let lib = lib();
        let mut controller = install_one(&config(), &lib, &path, value.clone()).unwrap();
        controller.reload().unwrap();
        prop_assert_eq!(read(&lib, &path), Some(value));
    }

    #[test]
    fn second_install_collides_with_exact_path(path in dotted_path()) {
        let lib = lib();
        install_one(&config(), &lib, &path, 1).unwrap();
        let err = install_one(&config(), &lib, &path, 2).unwrap_err();
        let is_collision = matches!(err, InstallError::PathCollision { .. });
        prop_assert!(is_collision);
        prop_assert_eq!(err.to_string(), format!("install: path {path} already exists!"));
    }

    #[test]
    fn namespace_prefixes_every_item(ns in segment(), leaves in prop::collection::btree_set(segment(), 1..6)) {
        let lib = lib();
        let items: Vec<Value> = leaves.iter().map(|leaf| entry(leaf.as_str(), 1).build()).collect();
        let controller = install_entries(&config(), &lib, &group(items).namespace(ns.as_str()).build()).unwrap();
        for (path, leaf) in controller.paths().iter().zip(&leaves) {
            prop_assert_eq!(*path, format!("{ns}.{leaf}"));
        }
    }
}
