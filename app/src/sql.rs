use crate::config::Config;
use crate::types::Station;
use std::fmt::Write;

const RULE: &str =
    "-- ============================================================================";

const COLUMNS: &str = "id, code, name, city, state, country, latitude, longitude, status";

/// Renders the seed file: header, database switch, a single multi-row
/// `INSERT ... ON CONFLICT (id) DO UPDATE` and a commented verification query.
pub fn render_upsert(stations: &[Station], config: &Config) -> String {
    let source_name = config.input_path.file_name().map_or_else(
        || config.input_path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    let mut out = String::new();

    out.push_str("-- Bangladesh Stations Seed Data\n");
    let _ = writeln!(out, "-- Generated from {source_name}");
    let _ = writeln!(out, "-- Total Stations: {}", stations.len());
    let _ = writeln!(out, "{RULE}\n");

    let _ = writeln!(out, "\\c {}\n", config.database);

    if !stations.is_empty() {
        out.push_str("-- Insert all Bangladesh district headquarters as stations\n");
        let _ = writeln!(out, "INSERT INTO stations ({COLUMNS}) VALUES");

        let last = stations.len() - 1;
        for (i, station) in stations.iter().enumerate() {
            let terminator = if i < last { ',' } else { ';' };
            let _ = writeln!(
                out,
                "  {}{terminator}  -- {}",
                render_row(station),
                comment_text(&station.bn_name)
            );
        }

        out.push_str("\nON CONFLICT (id) DO UPDATE SET\n");
        out.push_str("  name = EXCLUDED.name,\n");
        out.push_str("  latitude = EXCLUDED.latitude,\n");
        out.push_str("  longitude = EXCLUDED.longitude,\n");
        out.push_str("  updated_at = NOW();\n");
    }

    out.push_str("\n-- Verification query\n");
    let _ = writeln!(
        out,
        "-- SELECT state, COUNT(*) as station_count FROM stations WHERE country = {} GROUP BY state ORDER BY state;",
        quote(&config.country)
    );

    out
}

fn render_row(station: &Station) -> String {
    format!(
        "({}, {}, {}, {}, {}, {}, {}, {}, {})",
        quote(&station.key.to_string()),
        quote(&station.code),
        quote(&station.name),
        quote(&station.city),
        quote(&station.division),
        quote(&station.country),
        station.latitude,
        station.longitude,
        quote(station.status.as_str()),
    )
}

/// Single-quoted SQL string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn comment_text(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::derive_key;
    use crate::types::{Coordinate, StationStatus};

    fn config() -> Config {
        Config::with_paths("data/districts.json", "out/seed.sql")
    }

    fn station(id: &str, code: &str, name: &str, bn_name: &str) -> Station {
        Station {
            key: derive_key(id),
            code: code.to_string(),
            name: name.to_string(),
            bn_name: bn_name.to_string(),
            city: name.to_string(),
            division: "Dhaka".to_string(),
            country: "Bangladesh".to_string(),
            latitude: Coordinate(23.7115253),
            longitude: Coordinate(90.4111451),
            status: StationStatus::Active,
        }
    }

    #[test]
    fn test_quote_escapes_apostrophe() {
        assert_eq!(quote("Cox's Bazar"), "'Cox''s Bazar'");
        assert_eq!(quote("Dhaka"), "'Dhaka'");
    }

    #[test]
    fn test_comment_text_flattens_newlines() {
        assert_eq!(comment_text("ঢাকা\nশহর"), "ঢাকা শহর");
    }

    #[test]
    fn test_render_row_column_order() {
        let row = render_row(&station("1", "DHA", "Dhaka", "ঢাকা"));
        assert_eq!(
            row,
            "('80449607-2125-58cd-bf86-1732871be373', 'DHA', 'Dhaka', 'Dhaka', 'Dhaka', \
             'Bangladesh', 23.7115253, 90.4111451, 'active')"
        );
    }

    #[test]
    fn test_render_upsert_structure() {
        let stations = vec![
            station("1", "DHA", "Dhaka", "ঢাকা"),
            station("2", "DHM", "Dhamrai", "ধামরাই"),
        ];
        let sql = render_upsert(&stations, &config());

        assert!(sql.starts_with("-- Bangladesh Stations Seed Data\n"));
        assert!(sql.contains("-- Generated from districts.json\n"));
        assert!(sql.contains("-- Total Stations: 2\n"));
        assert!(sql.contains("\\c travio_catalog\n"));
        assert!(sql.contains(
            "INSERT INTO stations (id, code, name, city, state, country, latitude, longitude, status) VALUES\n"
        ));
        assert!(sql.contains("'active'),  -- ঢাকা\n"));
        assert!(sql.contains("'active');  -- ধামরাই\n"));
        assert!(sql.contains("ON CONFLICT (id) DO UPDATE SET\n"));
        assert!(sql.contains("  updated_at = NOW();\n"));
        assert!(sql.contains("-- Verification query\n-- SELECT state"));
        assert!(sql.ends_with("ORDER BY state;\n"));
    }

    #[test]
    fn test_render_upsert_one_row_per_station() {
        let stations = vec![
            station("1", "DHA", "Dhaka", "ঢাকা"),
            station("2", "DHM", "Dhamrai", "ধামরাই"),
            station("3", "COX", "Cox's Bazar", "কক্সবাজার"),
        ];
        let sql = render_upsert(&stations, &config());

        let rows = sql.lines().filter(|l| l.starts_with("  ('")).count();
        assert_eq!(rows, 3);
        assert!(sql.contains("'Cox''s Bazar', 'Cox''s Bazar'"));
    }

    #[test]
    fn test_render_upsert_empty_has_no_insert() {
        let sql = render_upsert(&[], &config());
        assert!(sql.contains("-- Total Stations: 0"));
        assert!(!sql.contains("INSERT INTO"));
        assert!(!sql.contains("ON CONFLICT"));
    }
}
