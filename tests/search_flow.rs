//! End-to-end flow: raw input events through the query pipeline into
//! the list model, checked against the row contract a display pulls.

use citysift::{Dataset, ListModel, QueryPipeline, DEBOUNCE_WINDOW};
use std::time::{Duration, Instant};

fn three_cities() -> Dataset {
    Dataset::from_names(vec![
        "New York".to_string(),
        "London".to_string(),
        "Oslo".to_string(),
    ])
}

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

/// Drain the pipeline into the model the way the event loop tick does.
fn drain(pipeline: &mut QueryPipeline, model: &mut ListModel, now: Instant) -> bool {
    match pipeline.poll(now) {
        Some(query) => {
            model.apply(&query);
            true
        }
        None => false,
    }
}

#[test]
fn typing_settles_into_a_filtered_table() {
    let start = Instant::now();
    let mut pipeline = QueryPipeline::new();
    let mut model = ListModel::new(three_cities());

    pipeline.note_input(Some("L"), at(start, 0));
    pipeline.note_input(Some("Lo"), at(start, 90));

    // Inside the window: the table is untouched.
    assert!(!drain(&mut pipeline, &mut model, at(start, 200)));
    assert_eq!(model.row_count(), 3);

    // Window closes: exactly one refresh with the latest value.
    assert!(drain(&mut pipeline, &mut model, at(start, 300)));
    assert_eq!(model.row_count(), 1);
    assert_eq!(model.row_content(0), Some("London"));
}

#[test]
fn burst_collapsing_matches_the_throttle_contract() {
    // Raw events at 0ms "Lo", 100ms "Lon", 350ms "Lond": the stream
    // delivers "Lon" then "Lond", nothing else.
    let start = Instant::now();
    let mut pipeline = QueryPipeline::new();
    let mut emitted = Vec::new();

    pipeline.note_input(Some("Lo"), at(start, 0));
    pipeline.note_input(Some("Lon"), at(start, 100));
    for ms in (0u64..=700).step_by(50) {
        if ms == 350 {
            pipeline.note_input(Some("Lond"), at(start, 350));
        }
        if let Some(q) = pipeline.poll(at(start, ms)) {
            emitted.push(q);
        }
    }

    assert_eq!(emitted, vec!["Lon".to_string(), "Lond".to_string()]);
}

#[test]
fn unmatched_query_empties_the_table() {
    let mut pipeline = QueryPipeline::new();
    let mut model = ListModel::new(three_cities());

    let query = pipeline.commit(Some("Z"));
    model.apply(&query);

    assert_eq!(model.row_count(), 0);
    assert_eq!(model.row_content(0), None);
}

#[test]
fn clearing_the_query_restores_the_full_table() {
    let start = Instant::now();
    let mut pipeline = QueryPipeline::new();
    let mut model = ListModel::new(three_cities());

    model.apply(&pipeline.commit(Some("Lo")));
    assert_eq!(model.row_count(), 1);

    pipeline.note_input(Some(""), at(start, 0));
    assert!(drain(&mut pipeline, &mut model, at(start, 300)));

    let rows: Vec<&str> = model.rows().collect();
    assert_eq!(rows, vec!["New York", "London", "Oslo"]);
}

#[test]
fn duplicate_settle_does_not_refresh_but_commit_does() {
    let start = Instant::now();
    let mut pipeline = QueryPipeline::new();
    let mut model = ListModel::new(three_cities());

    pipeline.note_input(Some("Oslo"), at(start, 0));
    assert!(drain(&mut pipeline, &mut model, at(start, 300)));

    // Same value settles again: suppressed on the streaming path.
    pipeline.note_input(Some("Oslo"), at(start, 400));
    assert!(!drain(&mut pipeline, &mut model, at(start, 800)));

    // The explicit search path re-renders regardless.
    let query = pipeline.commit(Some("Oslo"));
    model.apply(&query);
    assert_eq!(model.row_count(), 1);
    assert_eq!(model.row_content(0), Some("Oslo"));
}

#[test]
fn visible_set_is_always_an_ordered_subset_of_the_dataset() {
    let cities = Dataset::builtin();
    let mut model = ListModel::new(cities.clone());

    for query in ["", "L", "Lo", "Los", "P", "Par", "Z", "New York"] {
        model.apply(query);
        let rows: Vec<&str> = model.rows().collect();

        // Every row comes from the dataset, matches the predicate,
        // and appears in dataset order.
        let mut cursor = 0;
        for row in &rows {
            assert!(row.starts_with(query));
            let pos = cities
                .iter()
                .skip(cursor)
                .position(|name| name == *row)
                .map(|p| cursor + p)
                .unwrap_or_else(|| panic!("row '{}' out of order for query '{}'", row, query));
            cursor = pos + 1;
        }

        // And nothing matching was left out.
        let expected = cities.iter().filter(|name| name.starts_with(query)).count();
        assert_eq!(rows.len(), expected);
    }
}

#[test]
fn default_window_is_300ms() {
    assert_eq!(DEBOUNCE_WINDOW, Duration::from_millis(300));
}
