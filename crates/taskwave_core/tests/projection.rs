use chrono::{DateTime, Duration, TimeZone, Utc};
use taskwave_core::{
    completed_count, completion_percentage, filtered, project, sorted, SortOrder, StatusFilter,
    Task, TaskDraft,
};
use uuid::Uuid;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn task(title: &str, minutes_after_base: i64) -> Task {
    Task::with_id(
        Uuid::new_v4(),
        base_time() + Duration::minutes(minutes_after_base),
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        },
    )
}

fn titles<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
    tasks.iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn filter_partitions_the_collection() {
    let mut tasks = vec![task("a", 0), task("b", 1), task("c", 2)];
    tasks[1].completed = true;

    let all = filtered(&tasks, StatusFilter::All);
    let active = filtered(&tasks, StatusFilter::Active);
    let completed = filtered(&tasks, StatusFilter::Completed);

    assert_eq!(all.len(), active.len() + completed.len());
    assert!(active.iter().all(|task| !task.completed));
    assert!(completed.iter().all(|task| task.completed));
    assert_eq!(titles(&all), vec!["a", "b", "c"]);
}

#[test]
fn priority_puts_important_first_then_oldest() {
    // A is older and unimportant, B is newer and important.
    let a = task("A", 0);
    let mut b = task("B", 10);
    b.important = true;
    let tasks = vec![a, b];

    assert_eq!(titles(&sorted(&tasks, SortOrder::Priority)), vec!["B", "A"]);
    assert_eq!(
        titles(&sorted(&tasks, SortOrder::Alphabetical)),
        vec!["A", "B"]
    );
    assert_eq!(
        titles(&sorted(&tasks, SortOrder::DateCreated)),
        vec!["B", "A"]
    );
}

#[test]
fn priority_tie_break_is_opposite_of_date_created() {
    let mut both_important = vec![task("older", 0), task("newer", 30)];
    for item in &mut both_important {
        item.important = true;
    }

    assert_eq!(
        titles(&sorted(&both_important, SortOrder::Priority)),
        vec!["older", "newer"]
    );
    assert_eq!(
        titles(&sorted(&both_important, SortOrder::DateCreated)),
        vec!["newer", "older"]
    );
}

#[test]
fn due_date_sorts_ascending_with_dateless_last() {
    let mut late = task("late", 0);
    late.due_date = Some(base_time() + Duration::days(7));
    let mut soon = task("soon", 1);
    soon.due_date = Some(base_time() + Duration::days(1));
    let dateless = task("dateless", 2);

    let tasks = vec![late, dateless, soon];
    assert_eq!(
        titles(&sorted(&tasks, SortOrder::DueDate)),
        vec!["soon", "late", "dateless"]
    );
}

#[test]
fn alphabetical_ignores_case() {
    let tasks = vec![task("banana", 0), task("Apple", 1), task("cherry", 2)];

    assert_eq!(
        titles(&sorted(&tasks, SortOrder::Alphabetical)),
        vec!["Apple", "banana", "cherry"]
    );
}

#[test]
fn sorting_is_reproducible() {
    let mut tasks = vec![task("b", 0), task("a", 5), task("c", 3)];
    tasks[2].due_date = Some(base_time());

    for sort in [
        SortOrder::DateCreated,
        SortOrder::DueDate,
        SortOrder::Alphabetical,
        SortOrder::Priority,
    ] {
        let once: Vec<Task> = sorted(&tasks, sort).into_iter().cloned().collect();
        let twice = sorted(&once, sort);
        assert_eq!(
            titles(&twice),
            once.iter().map(|task| task.title.as_str()).collect::<Vec<_>>(),
            "re-sorting under {sort:?} must not change the order"
        );
    }
}

#[test]
fn project_composes_filter_and_sort() {
    let mut tasks = vec![task("b", 0), task("a", 1), task("c", 2)];
    tasks[0].completed = true;
    tasks[2].completed = true;

    let completed = project(&tasks, StatusFilter::Completed, SortOrder::Alphabetical);
    assert!(completed.iter().all(|task| task.completed));
    assert_eq!(titles(&completed), vec!["b", "c"]);

    let active = project(&tasks, StatusFilter::Active, SortOrder::Alphabetical);
    assert!(active.iter().all(|task| !task.completed));

    let all = project(&tasks, StatusFilter::All, SortOrder::Alphabetical);
    assert_eq!(all.len(), active.len() + completed.len());
}

#[test]
fn completion_statistics_match_collection_state() {
    let mut tasks = vec![task("done", 0), task("open", 1)];
    tasks[0].completed = true;

    assert_eq!(completed_count(&tasks), 1);
    assert_eq!(completion_percentage(&tasks), 50);
    assert_eq!(completion_percentage(&[]), 0);
}

#[test]
fn selection_enums_default_and_use_kebab_case_wire_names() {
    assert_eq!(StatusFilter::default(), StatusFilter::All);
    assert_eq!(SortOrder::default(), SortOrder::DateCreated);

    assert_eq!(
        serde_json::to_value(StatusFilter::Active).unwrap(),
        serde_json::json!("active")
    );
    assert_eq!(
        serde_json::to_value(SortOrder::DateCreated).unwrap(),
        serde_json::json!("date-created")
    );
    assert_eq!(
        serde_json::to_value(SortOrder::DueDate).unwrap(),
        serde_json::json!("due-date")
    );

    let parsed: SortOrder = serde_json::from_str("\"alphabetical\"").unwrap();
    assert_eq!(parsed, SortOrder::Alphabetical);
}
