use famtree_core::{EditError, EditTree, PersonRecord, TreeSnapshot};
use indexmap::IndexMap;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn person(id: &str, name: &str) -> PersonRecord {
    PersonRecord::from_value(&json!({"id": id, "name": name})).expect("valid record")
}

fn watch_changes(tree: &mut EditTree) -> Rc<RefCell<Vec<TreeSnapshot>>> {
    let seen: Rc<RefCell<Vec<TreeSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tree.on_change(move |snapshot| sink.borrow_mut().push(snapshot));
    seen
}

#[test]
fn add_member_commits_and_notifies() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    let seen = watch_changes(&mut tree);

    tree.add_member(person("1", "Ann")).expect("add succeeds");

    let snapshot = tree.current_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("1").and_then(|r| r.name().map(String::from)), Some("Ann".into()));
    assert_eq!(tree.history_len(), 2);
    assert_eq!(tree.history_cursor(), 1);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], snapshot);
}

#[test]
fn add_member_rejects_missing_id_or_name() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    let seen = watch_changes(&mut tree);

    let no_name = PersonRecord::from_value(&json!({"id": "1"})).expect("id present");
    assert!(matches!(tree.add_member(no_name), Err(EditError::MissingField)));

    let empty_name = PersonRecord::from_value(&json!({"id": "1", "name": ""})).expect("id present");
    assert!(matches!(tree.add_member(empty_name), Err(EditError::MissingField)));

    assert!(tree.current_snapshot().is_empty());
    assert_eq!(tree.history_len(), 1);
    assert!(seen.borrow().is_empty());
}

#[test]
fn add_member_rejects_duplicate_id() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    tree.add_member(person("1", "Ann")).expect("add succeeds");
    let seen = watch_changes(&mut tree);

    assert!(matches!(
        tree.add_member(person("1", "Bo")),
        Err(EditError::DuplicateId(id)) if id == "1"
    ));
    assert_eq!(tree.current_snapshot().len(), 1);
    assert_eq!(tree.history_len(), 2);
    assert!(seen.borrow().is_empty());
}

#[test]
fn edit_member_merges_fields() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    tree.add_member(person("1", "Ann")).expect("add succeeds");
    tree.edit_member("1", &{
        let mut patch = IndexMap::new();
        patch.insert("location".to_string(), json!("Oslo"));
        patch
    })
    .expect("edit succeeds");

    let record = tree.current_snapshot().get("1").cloned().expect("present");
    assert_eq!(record.name(), Some("Ann"));
    assert_eq!(record.field("location"), Some(&json!("Oslo")));
    assert_eq!(tree.history_len(), 3);
}

#[test]
fn edit_and_remove_reject_unknown_ids() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    let seen = watch_changes(&mut tree);

    assert!(matches!(
        tree.edit_member("ghost", &IndexMap::new()),
        Err(EditError::NotFound(id)) if id == "ghost"
    ));
    assert!(matches!(
        tree.remove_member("ghost"),
        Err(EditError::NotFound(id)) if id == "ghost"
    ));
    assert_eq!(tree.history_len(), 1);
    assert!(seen.borrow().is_empty());
}

#[test]
fn undo_redo_walk_back_to_initial_and_forward_again() {
    let initial = TreeSnapshot::from_value(&json!([{"id": "0", "name": "Root"}]))
        .expect("valid snapshot");
    let mut tree = EditTree::new(&initial);

    tree.add_member(person("1", "Ann")).expect("add");
    tree.add_member(person("2", "Bo")).expect("add");
    tree.remove_member("1").expect("remove");
    let final_state = tree.current_snapshot();

    tree.undo();
    tree.undo();
    tree.undo();
    assert_eq!(tree.current_snapshot(), initial);
    assert_eq!(tree.history_cursor(), 0);

    tree.redo();
    tree.redo();
    tree.redo();
    assert_eq!(tree.current_snapshot(), final_state);
}

#[test]
fn undo_redo_at_log_ends_are_silent_noops() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    tree.add_member(person("1", "Ann")).expect("add");
    let seen = watch_changes(&mut tree);

    tree.redo();
    assert!(seen.borrow().is_empty());

    tree.undo();
    assert_eq!(seen.borrow().len(), 1);
    tree.undo();
    assert_eq!(seen.borrow().len(), 1);
    assert!(tree.current_snapshot().is_empty());
}

#[test]
fn new_commit_after_undo_discards_redo_branch() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    tree.add_member(person("1", "Ann")).expect("add");
    tree.undo();
    tree.add_member(person("2", "Bo")).expect("add");

    assert_eq!(tree.history_len(), 2);
    let ids: Vec<String> = tree.current_snapshot().ids().map(String::from).collect();
    assert_eq!(ids, vec!["2"]);

    tree.redo();
    let ids: Vec<String> = tree.current_snapshot().ids().map(String::from).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn returned_snapshot_never_aliases_engine_state() {
    let mut initial = TreeSnapshot::new();
    initial.push(person("1", "Ann")).expect("unique");
    let mut tree = EditTree::new(&initial);

    // Mutating the constructor argument afterwards changes nothing.
    initial.remove("1");
    assert_eq!(tree.current_snapshot().len(), 1);

    // Mutating a returned copy changes nothing either.
    let mut copy = tree.current_snapshot();
    copy.remove("1");
    assert_eq!(tree.current_snapshot().len(), 1);
}

#[test]
fn replace_snapshot_resets_history_and_notifies() {
    let mut tree = EditTree::new(&TreeSnapshot::new());
    tree.add_member(person("1", "Ann")).expect("add");
    let seen = watch_changes(&mut tree);

    let remote = TreeSnapshot::from_value(&json!([{"id": "9", "name": "Zed"}]))
        .expect("valid snapshot");
    tree.replace_snapshot(&remote);

    assert_eq!(tree.current_snapshot(), remote);
    assert_eq!(tree.history_len(), 1);
    assert_eq!(seen.borrow().len(), 1);

    // The old undo chain is gone.
    tree.undo();
    assert_eq!(tree.current_snapshot(), remote);
    assert_eq!(seen.borrow().len(), 1);
}
