//! Tab-separated import for the calendar module.
//
// Rows are read in file order and every row becomes exactly one event. The
// first row whose start or end cannot be parsed aborts the whole import.

use crate::calendar::{parse_temporal, CalendarDocument, CalendarEvent, ConvertError, DateParseError};
use crate::config::Config;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One input row, fields still as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRow {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub end: String,
}

/// Read event rows from a delimited listing with a header row.
///
/// Columns are matched by header name, so their order does not matter and
/// extra columns are ignored.
pub fn read_rows<R: Read>(reader: R, delimiter: u8) -> impl Iterator<Item = Result<EventRow, csv::Error>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
        .into_deserialize::<EventRow>()
}

/// Turn one row into an event, parsing its start and end.
pub fn assemble_event(row: EventRow) -> Result<CalendarEvent, DateParseError> {
    let start = parse_temporal(&row.start)?;
    let end = parse_temporal(&row.end)?;
    Ok(CalendarEvent {
        summary: row.summary,
        description: row.description,
        location: row.location,
        start,
        end,
    })
}

/// Convert a whole listing into a calendar document.
///
/// Nothing is returned unless every row converted.
pub fn import_events<R: Read>(reader: R, config: &Config) -> Result<CalendarDocument, ConvertError> {
    let mut document = CalendarDocument::from_config(config);

    for (index, row) in read_rows(reader, config.delimiter).enumerate() {
        let row_number = index + 1;
        let row = row?;
        debug!("Row {}: {:?}", row_number, row);
        let event = assemble_event(row).map_err(|error| ConvertError::Date { row: row_number, error })?;
        document.push(event);
    }

    info!("Imported {} events", document.len());
    Ok(document)
}

/// Convert the listing stored at `file_path`.
pub fn import_events_from_file(file_path: &Path, config: &Config) -> Result<CalendarDocument, ConvertError> {
    info!("Reading events from {}", file_path.display());
    let file = File::open(file_path)?;
    import_events(file, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "summary\tdescription\tlocation\tstart\tend\n";

    #[test]
    fn test_assemble_event_copies_text_fields() {
        let row = EventRow {
            summary: "Meeting".to_string(),
            description: "desc".to_string(),
            location: "Rm1".to_string(),
            start: "Nov 7 14:35 2018".to_string(),
            end: "Nov 7 15:00 2018".to_string(),
        };

        let event = assemble_event(row).unwrap();
        assert_eq!(event.summary, "Meeting");
        assert_eq!(event.description, "desc");
        assert_eq!(event.location, "Rm1");
        assert_eq!(event.start.to_stamp(), "20181107T143500");
        assert_eq!(event.end.to_stamp(), "20181107T150000");
    }

    #[test]
    fn test_assemble_event_rejects_bad_end() {
        let row = EventRow {
            summary: "Meeting".to_string(),
            description: String::new(),
            location: String::new(),
            start: "Nov 7 2018".to_string(),
            end: "later".to_string(),
        };

        assert_eq!(assemble_event(row).unwrap_err(), DateParseError::new("later"));
    }

    #[test]
    fn test_read_rows_matches_columns_by_name() {
        let input = "start\tend\textra\tsummary\tlocation\tdescription\nNov 1 2018\tNov 2 2018\tx\tTrip\tAway\tnotes\n";
        let rows: Vec<EventRow> = read_rows(input.as_bytes(), b'\t').collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].summary, "Trip");
        assert_eq!(rows[0].location, "Away");
        assert_eq!(rows[0].description, "notes");
        assert_eq!(rows[0].start, "Nov 1 2018");
    }

    #[test]
    fn test_import_events_preserves_order() {
        let input = format!(
            "{}a\t\t\tNov 1 2018\tNov 1 2018\nb\t\t\tNov 2 2018\tNov 2 2018\nc\t\t\tNov 3 2018\tNov 3 2018\n",
            HEADER
        );
        let doc = import_events(input.as_bytes(), &Config::default()).unwrap();

        let summaries: Vec<&str> = doc.events().iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(summaries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_import_events_reports_failing_row() {
        let input = format!("{}a\t\t\tNov 1 2018\tNov 1 2018\nb\t\t\tfoo\tNov 2 2018\n", HEADER);
        let err = import_events(input.as_bytes(), &Config::default()).unwrap_err();

        match err {
            ConvertError::Date { row, error } => {
                assert_eq!(row, 2);
                assert_eq!(error.value, "foo");
            }
            other => panic!("expected a date error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_an_input_error() {
        let input = "summary\tdescription\tstart\tend\nx\ty\tNov 1 2018\tNov 1 2018\n";
        let err = import_events(input.as_bytes(), &Config::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(_)));
    }

    #[test]
    fn test_delimiter_comes_from_config() {
        let config = Config { delimiter: b',', ..Config::default() };
        let input = "summary,description,location,start,end\nTrip,,Away,Nov 1 2018,Nov 2 2018\n";
        let doc = import_events(input.as_bytes(), &config).unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.events()[0].location, "Away");
    }

    #[test]
    fn test_header_only_gives_empty_document() {
        let doc = import_events(HEADER.as_bytes(), &Config::default()).unwrap();
        assert!(doc.is_empty());
    }
}
