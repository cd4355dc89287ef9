//! Streaming parser for the `eurofxref` reference rate document.
//!
//! Only `Cube` elements matter. A `Cube` with a `time` attribute opens a day
//! that lasts until the element closes; a `Cube` with `currency` and `rate`
//! attributes adds a rate to the open day. The envelope's subject and sender
//! are ignored.

use std::collections::HashSet;
use std::io::BufRead;
use std::str::FromStr;

use eurofx_core::utils::time_utils::parse_rate_date;
use eurofx_core::{ExchangeRate, Snapshot};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rust_decimal::Decimal;
use tracing::warn;

use crate::errors::FeedError;

const CUBE: &[u8] = b"Cube";

/// Parses a complete feed document into snapshots, in document order.
pub fn parse_feed<R: BufRead>(source: R) -> Result<Vec<Snapshot>, FeedError> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();
    let mut days = DayCollector::default();
    // One entry per open `Cube`, true when it is a dated one
    let mut open_cubes: Vec<bool> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) if element.local_name().as_ref() == CUBE => {
                open_cubes.push(days.visit(&element)?);
            }
            Ok(Event::Empty(element)) if element.local_name().as_ref() == CUBE => {
                if days.visit(&element)? {
                    days.close_day();
                }
            }
            Ok(Event::End(element)) if element.local_name().as_ref() == CUBE => {
                if open_cubes.pop() == Some(true) {
                    days.close_day();
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(FeedError::Parse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
        buf.clear();
    }

    Ok(days.finish())
}

pub fn parse_feed_str(document: &str) -> Result<Vec<Snapshot>, FeedError> {
    parse_feed(document.as_bytes())
}

#[derive(Default)]
struct DayCollector {
    snapshots: Vec<Snapshot>,
    current: Option<Snapshot>,
    seen: HashSet<String>,
}

impl DayCollector {
    /// Handles one `Cube`. Returns true when it opened a day.
    fn visit(&mut self, element: &BytesStart<'_>) -> Result<bool, FeedError> {
        if let Some(time) = attribute(element, "time")? {
            let date = parse_rate_date(&time)
                .map_err(|e| FeedError::Parse(e.to_string()))?;
            self.start_day(date);
            return Ok(true);
        }

        let (Some(currency), Some(rate)) =
            (attribute(element, "currency")?, attribute(element, "rate")?)
        else {
            // The outer container cube
            return Ok(false);
        };

        let Some(day) = self.current.as_mut() else {
            return Err(FeedError::Parse(format!(
                "rate for {} appears outside of a dated cube",
                currency
            )));
        };

        let rate = Decimal::from_str(rate.trim()).map_err(|e| {
            FeedError::Parse(format!(
                "invalid rate '{}' for {} on {}: {}",
                rate, currency, day.date, e
            ))
        })?;

        if rate <= Decimal::ZERO {
            warn!("Dropping non-positive rate {} for {} on {}", rate, currency, day.date);
            return Ok(false);
        }
        if !self.seen.insert(currency.clone()) {
            warn!("Dropping duplicate rate for {} on {}", currency, day.date);
            return Ok(false);
        }

        day.rates.push(ExchangeRate::new(currency, rate));
        Ok(false)
    }

    fn start_day(&mut self, date: chrono::NaiveDate) {
        self.close_day();
        self.current = Some(Snapshot::new(date, Vec::new()));
    }

    fn close_day(&mut self) {
        if let Some(day) = self.current.take() {
            self.snapshots.push(day);
        }
        self.seen.clear();
    }

    fn finish(mut self) -> Vec<Snapshot> {
        self.close_day();
        self.snapshots
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, FeedError> {
    let Some(attr) = element
        .try_get_attribute(name)
        .map_err(|e| FeedError::Parse(e.to_string()))?
    else {
        return Ok(None);
    };
    let value = attr
        .unescape_value()
        .map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(Some(value.into_owned()))
}
