use slotsync_core::availability::{
    build_heatmap, build_option_grid, AvailabilityEditor, DateTimeRange, EventData,
    ParticipantPicks, Selection, SerializedEventData,
};

fn two_by_two_event() -> EventData {
    let json = r#"{
        "nanoid": "e2e",
        "title": "Two by two",
        "mode": "datetime",
        "availableDates": ["2024-01-02", "2024-01-01"],
        "availableTimes": ["10:00-11:00", "09:00-10:00"]
    }"#;
    serde_json::from_str(json).unwrap()
}

fn cell(s: &str) -> DateTimeRange {
    s.parse().unwrap()
}

#[test]
fn test_drag_across_grid_covers_every_cell() {
    let mut editor = AvailabilityEditor::new(two_by_two_event(), Selection::new());

    assert!(editor.pointer_down(cell("2024-01-01_09:00-10:00")));
    let span = editor.pointer_move(cell("2024-01-02_10:00-11:00"));

    assert_eq!(span, build_option_grid(editor.event()));
    assert_eq!(editor.pointer_up().map(Selection::len), Some(4));
}

#[test]
fn test_tap_on_selected_cell_clears_it() {
    let tapped = cell("2024-01-01_09:00-10:00");
    let selection: Selection = [tapped].into_iter().collect();
    let mut editor = AvailabilityEditor::new(two_by_two_event(), selection);

    editor.pointer_down(tapped);
    editor.pointer_move(tapped);
    let next = editor.pointer_up().cloned();

    assert_eq!(next, Some(Selection::new()));
}

#[test]
fn test_one_of_four_rounds_to_bucket_three() {
    let event = two_by_two_event();
    let target = cell("2024-01-01_09:00-10:00");
    let results = vec![
        ParticipantPicks::new("Ana", vec![target]),
        ParticipantPicks::new("Ben", vec![]),
        ParticipantPicks::new("Cy", vec![cell("2024-01-02_09:00-10:00")]),
        ParticipantPicks::new("Dee", vec![]),
    ];

    let heatmap = build_heatmap(&event, &results);
    let heat = heatmap.iter().find(|h| h.cell == target).unwrap();

    assert_eq!(heat.count, 1);
    assert_eq!(heat.bucket, 3);
}

#[test]
fn test_selection_survives_wire_round_trip() {
    let mut editor = AvailabilityEditor::new(two_by_two_event(), Selection::new());
    editor.pointer_down(cell("2024-01-02_09:00-10:00"));
    editor.pointer_move(cell("2024-01-02_10:00-11:00"));
    let selection = editor.pointer_up().cloned().unwrap();

    let json = serde_json::to_string(&selection).unwrap();
    assert_eq!(
        json,
        r#"["2024-01-02_09:00-10:00","2024-01-02_10:00-11:00"]"#
    );

    // Stored picks feed straight into aggregation.
    let results: Vec<ParticipantPicks> =
        serde_json::from_str(&format!(r#"[{{"name":"Ana","picks":{}}}]"#, json)).unwrap();
    let heatmap = build_heatmap(editor.event(), &results);
    assert_eq!(heatmap.iter().filter(|h| h.bucket == 9).count(), 2);
}

#[test]
fn test_event_wire_round_trip() {
    let event = two_by_two_event();
    let wire: SerializedEventData = event.clone().into();

    assert_eq!(wire.available_dates, ["2024-01-01", "2024-01-02"]);
    assert_eq!(EventData::parse(wire).unwrap(), event);
}
