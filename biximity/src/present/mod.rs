//! Formatting of the nearest-stations panel.
//!
//! The graphical widget is drawn elsewhere; this module produces the text
//! it shows: distances, repaired names, availability counts, the optional
//! disclaimer and the update time.

mod i18n;

use std::fmt::Write;

use chrono::NaiveTime;
use serde::Serialize;

use crate::domain::{DisplayStation, Distance};
use crate::text::decode_text;

pub use i18n::{Disclaimer, Language};

/// Widest name shown before truncation (the widget shows one line).
const NAME_WIDTH: usize = 28;

/// Width of each availability column.
const COUNT_WIDTH: usize = 8;

/// Width of the distance column.
const DISTANCE_WIDTH: usize = 9;

/// Shown for availability counts missing from the status feed.
const MISSING_COUNT: &str = "-";

/// Render a distance as `"<value> <unit>"`.
///
/// A value whose integer part has exactly three digits is shown as that
/// integer; more than three digits is clamped to `999+`; anything shorter
/// keeps its full decimal representation.
///
/// ```
/// use biximity::domain::{Distance, DistanceUnit};
/// use biximity::present::format_distance;
///
/// assert_eq!(format_distance(&Distance::new(0.5, DistanceUnit::Kilometres)), "0.5 km");
/// assert_eq!(format_distance(&Distance::new(250.0, DistanceUnit::Kilometres)), "250 km");
/// assert_eq!(format_distance(&Distance::new(12345.0, DistanceUnit::Kilometres)), "999+ km");
/// ```
pub fn format_distance(distance: &Distance) -> String {
    let int = (distance.value.trunc() as i64).to_string();
    let value = match int.len() {
        3 => int,
        n if n > 3 => "999+".to_string(),
        _ => distance.value.to_string(),
    };
    format!("{value} {}", distance.unit)
}

/// Everything the widget displays for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub stations: Vec<DisplayStation>,
    pub disclaimer: Option<Disclaimer>,
    pub language: Language,
    pub updated_at: NaiveTime,
}

impl Panel {
    pub fn new(
        stations: Vec<DisplayStation>,
        disclaimer: Option<Disclaimer>,
        language: Language,
        updated_at: NaiveTime,
    ) -> Self {
        Self {
            stations,
            disclaimer,
            language,
            updated_at,
        }
    }

    /// The footer timestamp, e.g. "Updated at 08:05".
    pub fn updated_at_text(&self) -> String {
        format!(
            "{} {}",
            self.language.updated_at(),
            self.updated_at.format("%H:%M")
        )
    }

    /// The localized disclaimer, if any.
    pub fn disclaimer_text(&self) -> Option<&'static str> {
        self.disclaimer.map(|d| d.message(self.language))
    }

    /// Render as a fixed-width text table.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let [bikes, ebikes, docks] = self.language.column_headings();

        // write! into a String cannot fail
        let _ = writeln!(
            out,
            "{:dw$} {:nw$} {bikes:>cw$}{ebikes:>cw$}{docks:>cw$}",
            "",
            "",
            dw = DISTANCE_WIDTH,
            nw = NAME_WIDTH,
            cw = COUNT_WIDTH,
        );

        for station in &self.stations {
            let _ = writeln!(
                out,
                "{:<dw$} {:<nw$} {:>cw$}{:>cw$}{:>cw$}",
                format_distance(&station.distance),
                display_name(&station.name),
                count_text(station.num_bikes_available),
                count_text(station.num_ebikes_available),
                count_text(station.num_docks_available),
                dw = DISTANCE_WIDTH,
                nw = NAME_WIDTH,
                cw = COUNT_WIDTH,
            );
        }

        out.push('\n');
        if let Some(disclaimer) = self.disclaimer_text() {
            let _ = write!(out, "(i) {disclaimer}   ");
        }
        out.push_str(&self.updated_at_text());
        out.push('\n');
        out
    }

    /// Build the JSON view of the panel.
    pub fn to_dto(&self) -> PanelDto {
        PanelDto {
            stations: self
                .stations
                .iter()
                .map(|s| StationRowDto {
                    name: decode_text(&s.name),
                    distance: format_distance(&s.distance),
                    num_bikes_available: s.num_bikes_available,
                    num_ebikes_available: s.num_ebikes_available,
                    num_docks_available: s.num_docks_available,
                })
                .collect(),
            disclaimer: self.disclaimer_text().map(str::to_string),
            updated_at: self.updated_at.format("%H:%M").to_string(),
        }
    }
}

/// JSON view of a [`Panel`].
#[derive(Debug, Clone, Serialize)]
pub struct PanelDto {
    pub stations: Vec<StationRowDto>,
    pub disclaimer: Option<String>,
    pub updated_at: String,
}

/// One station row in a [`PanelDto`].
#[derive(Debug, Clone, Serialize)]
pub struct StationRowDto {
    pub name: String,
    pub distance: String,
    pub num_bikes_available: Option<u32>,
    pub num_ebikes_available: Option<u32>,
    pub num_docks_available: Option<u32>,
}

/// Decode and clip a station name to a single line.
fn display_name(raw: &str) -> String {
    let name = decode_text(raw);
    if name.chars().count() <= NAME_WIDTH {
        return name;
    }
    let mut clipped: String = name.chars().take(NAME_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

fn count_text(count: Option<u32>) -> String {
    count.map_or_else(|| MISSING_COUNT.to_string(), |c| c.to_string())
}
