//! Session binding behaviour under rebinds and concurrent readers

use std::sync::Arc;
use std::thread;

use crate::common::{bound_gateway, TestRepo};
use repogate::core::error::ErrorKind;

#[test]
fn test_failed_rebind_keeps_previous_repository() {
    let repo = TestRepo::small();
    let gateway = bound_gateway(&repo);
    let before = gateway.file_tree().unwrap();

    let err = gateway.init("/definitely/not/a/repository").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Binding);

    assert_eq!(gateway.session().root_path().as_deref(), Some(repo.path_str()));
    assert_eq!(gateway.file_tree().unwrap(), before);
}

#[test]
fn test_rebind_to_same_path_is_allowed() {
    let repo = TestRepo::small();
    let gateway = bound_gateway(&repo);
    let before = gateway.file_tree().unwrap();

    gateway.init(repo.path_str()).unwrap();
    assert_eq!(gateway.file_tree().unwrap(), before);
}

#[test]
fn test_readers_observe_whole_trees_during_rebinds() {
    let a = TestRepo::small();
    let b = TestRepo::other();

    let gateway = Arc::new(bound_gateway(&a));
    let tree_a = gateway.file_tree().unwrap();
    gateway.init(b.path_str()).unwrap();
    let tree_b = gateway.file_tree().unwrap();

    let paths = [a.path_str().to_string(), b.path_str().to_string()];
    let writer = {
        let gateway = Arc::clone(&gateway);
        thread::spawn(move || {
            for i in 0..20 {
                gateway.init(&paths[i % 2]).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let gateway = Arc::clone(&gateway);
            let (tree_a, tree_b) = (tree_a.clone(), tree_b.clone());
            thread::spawn(move || {
                for _ in 0..20 {
                    let tree = gateway.file_tree().unwrap();
                    assert!(tree == tree_a || tree == tree_b);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
