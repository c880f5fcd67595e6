//! Integration tests for the folder mutation and query protocol

use dfs_namespace::{File, Folder, NamespaceError};

fn storage_refusal() -> NamespaceError {
    NamespaceError::Storage(anyhow::anyhow!("data node unreachable"))
}

#[test]
fn test_create_folder_then_lookup() {
    let mut folder = Folder::new("/srv");

    folder.create_folder("projects", |_| Ok(())).unwrap();

    assert_eq!(
        folder.folder_path("projects").as_deref(),
        Some("/srv/projects")
    );
    assert_eq!(folder.folder_path("missing"), None);
}

#[test]
fn test_create_file_then_lookup() {
    let mut folder = Folder::new("/srv");

    folder.create_file("report.txt").unwrap();

    let file = folder.file("report.txt").unwrap();
    assert_eq!(file.size, 0);
    assert!(!file.locked);
    assert!(file.content.is_empty());
    assert!(folder.file("missing").is_none());
}

#[test]
fn test_child_names_are_normalized() {
    let mut folder = Folder::new("/srv");

    folder.create_folder("docs/", |shadow| {
        assert_eq!(shadow.full, "/srv/docs");
        Ok(())
    })
    .unwrap();

    assert_eq!(folder.folder_path("docs").as_deref(), Some("/srv/docs"));
}

#[test]
fn test_collision_between_files_and_folders() {
    let mut folder = Folder::new("/srv");

    folder.create_file("shared").unwrap();
    let err = folder.create_folder("shared", |_| Ok(())).unwrap_err();
    assert!(matches!(err, NamespaceError::AlreadyExists(_)));

    folder.create_folder("sub", |_| Ok(())).unwrap();
    let err = folder.create_file("sub").unwrap_err();
    assert!(matches!(err, NamespaceError::AlreadyExists(_)));

    let err = folder.create_folder("sub", |_| Ok(())).unwrap_err();
    assert!(matches!(err, NamespaceError::AlreadyExists(_)));
}

#[test]
fn test_invalid_names_leave_collections_unchanged() {
    let mut folder = Folder::new("/srv");
    folder.create_file("keep.txt").unwrap();
    let before = folder.clone();

    for raw in ["", "/", "a/b", "nested/deep/name"] {
        let err = folder
            .create_folder(raw, |_| panic!("commit must not run for {raw:?}"))
            .unwrap_err();
        assert!(matches!(err, NamespaceError::InvalidName(_)), "{raw:?}");

        let err = folder.create_file(raw).unwrap_err();
        assert!(matches!(err, NamespaceError::InvalidName(_)), "{raw:?}");
    }

    assert_eq!(folder, before);
}

#[test]
fn test_failed_create_commit_leaves_folder_unchanged() {
    let mut folder = Folder::new("/srv");
    folder.create_folder("existing", |_| Ok(())).unwrap();
    let before = folder.clone();

    let err = folder
        .create_folder("fresh", |_| Err(storage_refusal()))
        .unwrap_err();

    assert!(matches!(err, NamespaceError::Storage(_)));
    assert_eq!(folder, before);
    assert_eq!(folder.folder_path("fresh"), None);
}

#[test]
fn test_failed_delete_commit_leaves_folder_unchanged() {
    let mut folder = Folder::new("/srv");
    folder.create_folder("child", |_| Ok(())).unwrap();
    folder.create_file("data.bin").unwrap();
    let before = folder.clone();

    let err = folder
        .delete_folder("child", |_| Err(storage_refusal()))
        .unwrap_err();
    assert!(matches!(err, NamespaceError::Storage(_)));

    let err = folder
        .delete_file("data.bin", |_| Err(storage_refusal()))
        .unwrap_err();
    assert!(matches!(err, NamespaceError::Storage(_)));

    assert_eq!(folder, before);
}

#[test]
fn test_storage_errors_pass_through_verbatim() {
    let mut folder = Folder::new("/srv");

    let err = folder
        .create_folder("fresh", |_| Err(storage_refusal()))
        .unwrap_err();

    assert_eq!(err.to_string(), "data node unreachable");
}

#[test]
fn test_delete_folder_commits_child_path() {
    let mut folder = Folder::new("/srv");
    folder.create_folder("old", |_| Ok(())).unwrap();

    folder
        .delete_folder("old", |child_path| {
            assert_eq!(child_path, "/srv/old");
            Ok(())
        })
        .unwrap();

    assert_eq!(folder.folder_path("old"), None);
    assert!(folder.folders().is_empty());
}

#[test]
fn test_delete_file_commits_record() {
    let mut folder = Folder::new("/srv");
    folder.create_file("stale.log").unwrap();
    folder.file_mut("stale.log").unwrap().size = 512;

    folder
        .delete_file("stale.log", |record| {
            assert_eq!(record.name(), "stale.log");
            assert_eq!(record.size, 512);
            Ok(())
        })
        .unwrap();

    assert!(folder.file("stale.log").is_none());
}

#[test]
fn test_delete_missing_targets() {
    let mut folder = Folder::new("/srv");

    let err = folder
        .delete_folder("ghost", |_| panic!("commit must not run"))
        .unwrap_err();
    assert!(matches!(err, NamespaceError::NotFound(_)));

    let err = folder
        .delete_file("ghost", |_| panic!("commit must not run"))
        .unwrap_err();
    assert!(matches!(err, NamespaceError::NotFound(_)));
}

#[test]
fn test_collections_stay_sorted_through_churn() {
    let mut folder = Folder::new("/srv");

    for name in ["zeta", "alpha", "mid", "beta"] {
        folder.create_folder(name, |_| Ok(())).unwrap();
    }
    for name in ["z.txt", "a.txt", "m.txt"] {
        folder.create_file(name).unwrap();
    }
    folder.delete_folder("mid", |_| Ok(())).unwrap();
    folder.delete_file("m.txt", |_| Ok(())).unwrap();
    folder.create_folder("gamma", |_| Ok(())).unwrap();

    let folder_names: Vec<_> = folder.folders().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(folder_names, ["alpha", "beta", "gamma", "zeta"]);

    let file_names: Vec<_> = folder.files().iter().map(|f| f.name()).collect();
    assert_eq!(file_names, ["a.txt", "z.txt"]);
}

#[test]
fn test_size_sums_direct_files() {
    let mut folder = Folder::new("/srv");
    folder.create_file("a").unwrap();
    folder.file_mut("a").unwrap().size = 10;
    folder.create_file("b").unwrap();
    folder.file_mut("b").unwrap().size = 20;

    let mut aggregator_ran = false;
    let total = folder.size(|_| {
        aggregator_ran = true;
        0
    });

    assert_eq!(total, 30);
    assert!(!aggregator_ran, "no subfolders, aggregator must not run");
}

#[test]
fn test_size_adds_subtree_aggregate() {
    let mut folder = Folder::new("/srv");
    folder.create_file("a").unwrap();
    folder.file_mut("a").unwrap().size = 10;
    folder.create_file("b").unwrap();
    folder.file_mut("b").unwrap().size = 20;
    folder.create_folder("nested", |_| Ok(())).unwrap();

    let total = folder.size(|shadows| {
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].full, "/srv/nested");
        5
    });

    assert_eq!(total, 35);
}

#[test]
fn test_is_locked_tracks_direct_files() {
    let mut folder = Folder::new("/srv");
    assert!(!folder.is_locked());

    folder.create_file("idle").unwrap();
    folder.create_file("busy").unwrap();
    assert!(!folder.is_locked());

    folder.file_mut("busy").unwrap().locked = true;
    assert!(folder.is_locked());

    folder.file_mut("busy").unwrap().locked = false;
    assert!(!folder.is_locked());
}

#[test]
fn test_clone_files_into_isolates_file_records() {
    let mut source = Folder::new("/srv");
    source.create_file("data.bin").unwrap();
    source.file_mut("data.bin").unwrap().size = 100;
    source.create_folder("sub", |_| Ok(())).unwrap();

    let mut target = Folder::new("/snapshot");
    target.create_file("stale.txt").unwrap();
    source.clone_files_into(&mut target);

    assert_eq!(target.folders(), source.folders());
    assert!(target.file("stale.txt").is_none());

    // mutating the source afterwards must not leak into the snapshot
    source.file_mut("data.bin").unwrap().size = 999;
    source.file_mut("data.bin").unwrap().locked = true;

    let copied = target.file("data.bin").unwrap();
    assert_eq!(copied.size, 100);
    assert!(!copied.locked);
}

#[test]
fn test_replace_file_upserts_and_removes() {
    let mut folder = Folder::new("/srv");
    folder.create_file("a.txt").unwrap();
    folder.create_file("c.txt").unwrap();

    // upsert a new record between the existing two
    let mut uploaded = File::new("b.txt");
    uploaded.size = 2048;
    folder.replace_file("b.txt", Some(uploaded));

    let names: Vec<_> = folder.files().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    assert_eq!(folder.file("b.txt").unwrap().size, 2048);

    // overwrite in place
    let mut finalized = File::new("b.txt");
    finalized.size = 4096;
    folder.replace_file("b.txt", Some(finalized));
    assert_eq!(folder.file("b.txt").unwrap().size, 4096);
    assert_eq!(folder.files().len(), 3);

    // remove through the same primitive
    folder.replace_file("b.txt", None);
    assert!(folder.file("b.txt").is_none());
    assert_eq!(folder.files().len(), 2);

    // removing an absent entry is a no-op
    folder.replace_file("ghost", None);
    assert_eq!(folder.files().len(), 2);
}
