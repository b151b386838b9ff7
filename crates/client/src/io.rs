//! Loading events, selections and results from JSON files.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use slotsync_core::availability::{EventData, ParticipantPicks, Selection, SerializedEventData};

use crate::error::{ClientError, Result};

/// Reads and decodes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| ClientError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ClientError::Decode {
        path: path.display().to_string(),
        source,
    })
}

/// Loads an event in wire form, parses it and checks its invariants.
pub fn load_event(path: &Path) -> Result<EventData> {
    let serialized: SerializedEventData = read_json(path)?;
    let event = EventData::parse(serialized)?;
    event.validate()?;
    tracing::debug!(
        nanoid = %event.nanoid,
        dates = event.available_dates.len(),
        times = event.available_times.len(),
        "Loaded event"
    );
    Ok(event)
}

/// Loads a saved selection, or an empty one when no file is given.
pub fn load_selection(path: Option<&Path>) -> Result<Selection> {
    match path {
        Some(path) => read_json(path),
        None => Ok(Selection::new()),
    }
}

/// Writes `selection` to `path` as a JSON array of canonical cell strings.
pub fn save_selection(path: &Path, selection: &Selection) -> Result<()> {
    let json = serde_json::to_string_pretty(selection)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), cells = selection.len(), "Saved selection");
    Ok(())
}

/// Loads every participant's submitted picks.
pub fn load_results(path: &Path) -> Result<Vec<ParticipantPicks>> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_event() {
        let file = write_temp(
            r#"{"nanoid":"abc","title":"Lunch","availableDates":["2024-05-02","2024-05-01"],"availableTimes":["12:00-13:00"]}"#,
        );

        let event = load_event(file.path()).unwrap();

        assert_eq!(event.title, "Lunch");
        assert_eq!(event.available_dates[0].to_string(), "2024-05-01");
    }

    #[test]
    fn test_load_event_rejects_bad_time() {
        let file = write_temp(
            r#"{"nanoid":"abc","title":"Lunch","availableDates":["2024-05-01"],"availableTimes":["12:00-11:00"]}"#,
        );

        assert!(matches!(
            load_event(file.path()),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn test_load_event_rejects_empty_title() {
        let file = write_temp(
            r#"{"nanoid":"abc","title":"","availableDates":["2024-05-01"],"availableTimes":["12:00-13:00"]}"#,
        );

        assert!(matches!(
            load_event(file.path()),
            Err(ClientError::Event(_))
        ));
    }

    #[test]
    fn test_load_selection_defaults_to_empty() {
        assert!(load_selection(None).unwrap().is_empty());

        let file = write_temp(r#"["2024-05-01_12:00-13:00"]"#);
        assert_eq!(load_selection(Some(file.path())).unwrap().len(), 1);
    }

    #[test]
    fn test_save_then_load_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        let selection: Selection = ["2024-05-01_12:00-13:00".parse().unwrap()]
            .into_iter()
            .collect();

        save_selection(&path, &selection).unwrap();

        assert_eq!(load_selection(Some(&path)).unwrap(), selection);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_results(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/results.json"));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let file = write_temp("not json");
        assert!(matches!(
            load_results(file.path()),
            Err(ClientError::Decode { .. })
        ));
    }
}
