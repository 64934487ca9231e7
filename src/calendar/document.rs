//! In-memory calendar document and its iCalendar serialization.

use crate::calendar::ics_format::escape_text;
use crate::calendar::TemporalValue;
use crate::config::Config;
use ical::generator::{Emitter, IcalCalendar, IcalEvent};
use ical::property::Property;

/// One VEVENT, built from a single input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: TemporalValue,
    pub end: TemporalValue,
}

/// Append-only list of events plus the calendar-level metadata.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    product_id: String,
    version: String,
    events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    pub fn new(product_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self { product_id: product_id.into(), version: version.into(), events: Vec::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.product_id.clone(), config.version.clone())
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the document as iCalendar text with CRLF line endings.
    ///
    /// Events are written in insertion order and long lines are folded.
    pub fn to_ical(&self) -> String {
        let mut calendar = IcalCalendar::new();
        calendar.properties.push(property("PRODID", escape_text(&self.product_id)));
        calendar.properties.push(property("VERSION", self.version.clone()));
        calendar.events.extend(self.events.iter().map(to_ical_event));
        calendar.generate()
    }
}

fn to_ical_event(event: &CalendarEvent) -> IcalEvent {
    let mut ical_event = IcalEvent::new();
    ical_event.properties = vec![
        property("SUMMARY", escape_text(&event.summary)),
        property("DESCRIPTION", escape_text(&event.description)),
        property("LOCATION", escape_text(&event.location)),
        temporal_property("DTSTART", &event.start),
        temporal_property("DTEND", &event.end),
    ];
    ical_event
}

fn property(name: &str, value: String) -> Property {
    Property { name: name.to_string(), params: None, value: Some(value) }
}

/// All-day values are tagged `VALUE=DATE`; date-times carry no parameter.
fn temporal_property(name: &str, value: &TemporalValue) -> Property {
    let params = value
        .is_all_day()
        .then(|| vec![("VALUE".to_string(), vec!["DATE".to_string()])]);
    Property { name: name.to_string(), params, value: Some(value.to_stamp()) }
}
