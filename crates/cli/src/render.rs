//! Terminal rendering for list rows and map data

use colored::{ColoredString, Colorize};
use tabled::{Table, Tabled};

use quakewatch_core::application::QuakeRow;
use quakewatch_core::domain::{MapFocus, MapMarker, Severity};

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Mag")]
    magnitude: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Depth")]
    depth: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct MarkerView {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    eq_id: String,
    #[tabled(rename = "Lat")]
    lat: f64,
    #[tabled(rename = "Lng")]
    lng: f64,
    #[tabled(rename = "Radius (m)")]
    radius_m: f64,
    #[tabled(rename = "Colour")]
    severity: String,
}

pub fn quake_table(rows: &[QuakeRow]) -> String {
    let views = rows.iter().enumerate().map(|(index, row)| RowView {
        index,
        magnitude: paint(&row.magnitude, row.severity).to_string(),
        severity: row.severity.to_string(),
        depth: paint(&row.depth.to_string(), row.depth.severity()).to_string(),
        when: row.when.clone(),
        location: row.location.clone(),
        source: row.source.clone(),
        id: row.id.clone(),
    });

    Table::new(views).to_string()
}

pub fn marker_table(markers: &[MapMarker]) -> String {
    let views = markers.iter().enumerate().map(|(index, m)| MarkerView {
        index,
        eq_id: m.eq_id.clone(),
        lat: m.position.lat,
        lng: m.position.lng,
        radius_m: m.radius_m,
        severity: m.severity.to_string(),
    });

    Table::new(views).to_string()
}

pub fn focus_line(focus: &MapFocus) -> String {
    format!(
        "({}, {}) zoom {}",
        focus.position.lat, focus.position.lng, focus.zoom
    )
}

/// Header above the list table; mentions the total when `--limit` cut rows
pub fn summary_line(shown: usize, total: usize) -> String {
    if shown < total {
        format!("✓ showing {} of {} earthquakes", shown, total)
    } else {
        format!("✓ {} earthquakes", total)
    }
}

fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Danger => text.red(),
        Severity::Warning => text.yellow(),
        Severity::Safe => text.green(),
    }
}

/// Short coloured severity tag for summary lines
pub fn severity_badge(severity: Severity) -> ColoredString {
    match severity {
        Severity::Danger => paint("DANGER", severity).bold(),
        Severity::Warning => paint("WARNING", severity).bold(),
        Severity::Safe => paint("SAFE", severity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakewatch_core::domain::{DepthClass, LatLng};

    fn row() -> QuakeRow {
        QuakeRow {
            magnitude: "8.8".to_string(),
            severity: Severity::Danger,
            depth: DepthClass::Shallow,
            when: "6 years ago".to_string(),
            location: "Ishinomaki, Miyagi, Japan".to_string(),
            source: "src: us".to_string(),
            id: "id: c0001xgp".to_string(),
        }
    }

    #[test]
    fn test_quake_table_contains_row_fields() {
        let table = quake_table(&[row()]);

        assert!(table.contains("Mag"));
        assert!(table.contains("8.8"));
        assert!(table.contains("DANGER"));
        assert!(table.contains("Shallow"));
        assert!(table.contains("6 years ago"));
        assert!(table.contains("id: c0001xgp"));
    }

    #[test]
    fn test_quake_table_colours_magnitude_and_depth() {
        colored::control::set_override(true);

        let mut deep = row();
        deep.magnitude = "5.1".to_string();
        deep.severity = Severity::Warning;
        deep.depth = DepthClass::Deep;
        let table = quake_table(&[row(), deep]);

        // Magnitude follows severity, depth follows its own class
        assert!(table.contains("\u{1b}[31m8.8\u{1b}[0m"));
        assert!(table.contains("\u{1b}[32mShallow\u{1b}[0m"));
        assert!(table.contains("\u{1b}[33m5.1\u{1b}[0m"));
        assert!(table.contains("\u{1b}[31mDeep\u{1b}[0m"));
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(3, 3), "✓ 3 earthquakes");
        assert_eq!(summary_line(2, 10), "✓ showing 2 of 10 earthquakes");
        assert_eq!(summary_line(0, 10), "✓ showing 0 of 10 earthquakes");
    }

    #[test]
    fn test_marker_table() {
        let markers = vec![MapMarker {
            eq_id: "c0001xgp".to_string(),
            position: LatLng::new(38.322, 142.369),
            radius_m: 8800.0,
            severity: Severity::Danger,
        }];
        let table = marker_table(&markers);

        assert!(table.contains("Radius (m)"));
        assert!(table.contains("8800"));
        assert!(table.contains("142.369"));
    }

    #[test]
    fn test_focus_line() {
        let focus = MapFocus {
            position: LatLng::new(38.5, 142.25),
            zoom: 10.0,
        };
        assert_eq!(focus_line(&focus), "(38.5, 142.25) zoom 10");
    }
}
