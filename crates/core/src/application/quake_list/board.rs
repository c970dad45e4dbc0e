// Quake Board - list rows and map markers over one loaded snapshot

use crate::application::relative_time::RelativeTimeFormatter;
use crate::domain::{DepthClass, DomainError, Earthquake, MapFocus, MapMarker, Severity};
use serde::Serialize;
use tracing::warn;

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeRow {
    pub magnitude: String,
    pub severity: Severity,
    pub depth: DepthClass,
    /// Relative phrase ("3 hours ago"), or the raw date if it did not parse
    pub when: String,
    pub location: String,
    pub source: String,
    pub id: String,
}

/// Loaded quakes plus the currently selected entry
///
/// List rows and map markers share indices, so selecting row `i` focuses
/// marker `i`.
#[derive(Debug, Clone, Default)]
pub struct QuakeBoard {
    quakes: Vec<Earthquake>,
    selected: Option<usize>,
}

impl QuakeBoard {
    pub fn new(quakes: Vec<Earthquake>) -> Self {
        Self {
            quakes,
            selected: None,
        }
    }

    pub fn quakes(&self) -> &[Earthquake] {
        &self.quakes
    }

    pub fn len(&self) -> usize {
        self.quakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quakes.is_empty()
    }

    pub fn selected(&self) -> Option<&Earthquake> {
        self.selected.and_then(|i| self.quakes.get(i))
    }

    /// List rows, same order as the feed
    pub fn rows(&self, formatter: &RelativeTimeFormatter) -> Vec<QuakeRow> {
        self.quakes
            .iter()
            .map(|quake| {
                let when = match formatter.format_date_str(&quake.date_time) {
                    Ok(phrase) => phrase,
                    Err(e) => {
                        warn!(eq_id = %quake.eq_id, error = %e, "Unparseable quake date");
                        quake.date_time.clone()
                    }
                };

                QuakeRow {
                    magnitude: format!("{:?}", quake.magnitude),
                    severity: quake.severity(),
                    depth: quake.depth_class(),
                    when,
                    location: quake.location_label(),
                    source: format!("src: {}", quake.src),
                    id: format!("id: {}", quake.eq_id),
                }
            })
            .collect()
    }

    /// One marker per quake, same order as [`QuakeBoard::rows`]
    pub fn markers(&self) -> Vec<MapMarker> {
        self.quakes.iter().map(MapMarker::for_quake).collect()
    }

    /// Select a list entry and return where the map should move
    pub fn select(&mut self, index: usize) -> Result<MapFocus, DomainError> {
        let quake = self
            .quakes
            .get(index)
            .ok_or(DomainError::SelectionOutOfRange {
                index,
                len: self.quakes.len(),
            })?;

        let focus = MapFocus::on_quake(quake);
        self.selected = Some(index);
        Ok(focus)
    }
}
