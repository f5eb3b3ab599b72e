use chrono::Utc;

use crate::storage::models::{LoadReport, TableStats};

pub trait ReportFormatter: Send + Sync {
    fn format_load(&self, report: &LoadReport) -> String;
    fn format_stats(&self, stats: &TableStats) -> String;
}

pub struct ConsoleFormatter;

impl ReportFormatter for ConsoleFormatter {
    fn format_load(&self, report: &LoadReport) -> String {
        format!(
            "✅ Data successfully loaded into the '{}' table\n\
             🗄️  Database location: '{}'\n\
             📊 Total records in database: {}",
            report.table_name, report.database_path, report.records_loaded
        )
    }

    fn format_stats(&self, stats: &TableStats) -> String {
        let mut output = format!("📊 Table '{}' statistics:\n", stats.table_name);
        output.push_str(&format!("   Total records: {}\n", stats.total_records));
        output.push_str(&format!(
            "   Columns ({}): {}",
            stats.columns.len(),
            stats.columns.join(", ")
        ));
        output
    }
}

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_load(&self, report: &LoadReport) -> String {
        let result = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "table_name": report.table_name,
            "database_path": report.database_path,
            "records_loaded": report.records_loaded,
            "column_count": report.column_count,
        });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }

    fn format_stats(&self, stats: &TableStats) -> String {
        let result = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "table_name": stats.table_name,
            "total_records": stats.total_records,
            "columns": stats.columns,
        });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_load_report_names_table_and_path() {
        let report = LoadReport {
            records_loaded: 3,
            column_count: 3,
            table_name: "sensor_readings".to_string(),
            database_path: "database/vehicle_diagnostics.db".to_string(),
        };

        let output = ConsoleFormatter.format_load(&report);
        assert!(output.contains("'sensor_readings'"));
        assert!(output.contains("database/vehicle_diagnostics.db"));
        assert!(output.contains("Total records in database: 3"));
    }

    #[test]
    fn test_json_load_report_is_valid_json() {
        let report = LoadReport {
            records_loaded: 3,
            column_count: 3,
            table_name: "sensor_readings".to_string(),
            database_path: "database/vehicle_diagnostics.db".to_string(),
        };

        let output = JsonFormatter.format_load(&report);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["records_loaded"], 3);
        assert_eq!(parsed["table_name"], "sensor_readings");
    }
}
