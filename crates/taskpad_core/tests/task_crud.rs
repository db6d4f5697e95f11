use taskpad_core::db::open_db_in_memory;
use taskpad_core::{RepoError, SqliteTaskRepository, Task, TaskRepository, TaskValidationError};

#[test]
fn append_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::parse("Buy milk").unwrap();
    repo.append(&task).unwrap();

    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Buy milk");
}

#[test]
fn duplicate_titles_are_allowed_silently() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::parse("water plants").unwrap();
    repo.append(&task).unwrap();
    repo.append(&task).unwrap();

    assert_eq!(repo.list_all().unwrap().len(), 2);
}

#[test]
fn remove_deletes_all_rows_matching_the_title() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let dup = Task::parse("feed cat").unwrap();
    let other = Task::parse("call dentist").unwrap();
    repo.append(&dup).unwrap();
    repo.append(&other).unwrap();
    repo.append(&dup).unwrap();

    let removed = repo.remove("feed cat").unwrap();
    assert_eq!(removed, 2);

    let remaining = repo.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "call dentist");
}

#[test]
fn remove_unknown_title_removes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    repo.append(&Task::parse("one").unwrap()).unwrap();

    assert_eq!(repo.remove("two").unwrap(), 0);
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn clear_empties_the_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    repo.append(&Task::parse("a").unwrap()).unwrap();
    repo.append(&Task::parse("b").unwrap()).unwrap();

    assert_eq!(repo.clear().unwrap(), 2);
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn validation_failure_blocks_append() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let invalid = Task {
        title: "   ".to_string(),
    };
    let err = repo.append(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::EmptyTitle)
    ));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn parse_trims_surrounding_whitespace() {
    let task = Task::parse("  tidy desk \n").unwrap();
    assert_eq!(task.title, "tidy desk");

    assert_eq!(Task::parse(""), Err(TaskValidationError::EmptyTitle));
    assert_eq!(Task::parse("   "), Err(TaskValidationError::EmptyTitle));
}
