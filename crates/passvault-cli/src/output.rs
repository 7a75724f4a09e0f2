//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, Utc};
use colored::*;
use passvault_domain::{CredentialRecord, KindSummary, RecordKind};
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Shown instead of a secret that has not been revealed.
pub const MASK: &str = "••••••••";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of records. Secrets are always masked.
    pub fn format_records(&self, records: &[CredentialRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<Value> = records.iter().map(|r| record_json(r, false)).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => {
                let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format one record with all its fields.
    pub fn format_record(&self, record: &CredentialRecord, reveal: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record, reveal))?),
            OutputFormat::Table => Ok(self.format_record_table(record, reveal)),
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    /// Format the per-kind counters.
    pub fn format_summary(&self, summary: &KindSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut json = Map::new();
                for kind in RecordKind::ALL {
                    json.insert(kind.as_str().to_string(), summary.count(kind).into());
                }
                json.insert("total".to_string(), summary.total().into());
                Ok(serde_json::to_string_pretty(&Value::Object(json))?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                let mut header: Vec<String> = RecordKind::ALL
                    .iter()
                    .map(|k| k.display_name().to_string())
                    .collect();
                header.push("Total".to_string());
                builder.push_record(header);

                let mut counts: Vec<String> = RecordKind::ALL
                    .iter()
                    .map(|k| summary.count(*k).to_string())
                    .collect();
                counts.push(summary.total().to_string());
                builder.push_record(counts);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(summary.total().to_string()),
        }
    }

    fn format_records_table(&self, records: &[CredentialRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No passwords found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Title", "Details", "Secret", "Added"]);

        for record in records {
            let details: Vec<String> = record
                .details
                .fields(false)
                .into_iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect();

            builder.push_record([
                record.id.short(),
                self.kind_badge(record.kind()),
                record.title.clone(),
                details.join("\n"),
                MASK.to_string(),
                format_date(record.created_at),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_record_table(&self, record: &CredentialRecord, reveal: bool) -> String {
        let kind = record.kind();
        let mut builder = Builder::default();

        builder.push_record(["ID".to_string(), record.id.to_string()]);
        builder.push_record(["Kind".to_string(), self.kind_badge(kind)]);
        builder.push_record(["Title".to_string(), record.title.clone()]);
        for (label, value) in record.details.fields(reveal) {
            builder.push_record([label.to_string(), value.to_string()]);
        }
        let secret = if reveal { record.secret.clone() } else { MASK.to_string() };
        builder.push_record([kind.secret_label().to_string(), secret]);
        builder.push_record(["Added".to_string(), format_date(record.created_at)]);

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the unlock confirmation.
    pub fn access_granted(&self) -> String {
        self.success("Access Granted: Welcome to your secure dashboard!")
    }

    /// Format the add confirmation.
    pub fn record_added(&self, record: &CredentialRecord) -> String {
        self.success(&format!(
            "Password Added: '{}' has been stored ({})",
            record.title,
            record.id.short()
        ))
    }

    /// Format the delete confirmation.
    pub fn record_deleted(&self, record: &CredentialRecord) -> String {
        self.success(&format!(
            "Password Deleted: '{}' has been removed from your vault",
            record.title
        ))
    }

    /// Kind name in its badge color.
    fn kind_badge(&self, kind: RecordKind) -> String {
        let color = match kind {
            RecordKind::Card => "green",
            RecordKind::Website => "blue",
            RecordKind::Email => "magenta",
        };
        self.colorize(kind.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON view of a record; the secret is masked unless revealed.
fn record_json(record: &CredentialRecord, reveal: bool) -> Value {
    let details: Map<String, Value> = record
        .details
        .fields(reveal)
        .into_iter()
        .map(|(label, value)| (json_key(label), Value::String(value.to_string())))
        .collect();

    let secret = if reveal { record.secret.as_str() } else { MASK };

    serde_json::json!({
        "id": record.id.to_string(),
        "kind": record.kind().as_str(),
        "title": record.title,
        "secret": secret,
        "details": details,
        "created_at": format_timestamp(record.created_at),
    })
}

/// `Card Holder` -> `card_holder`
fn json_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Calendar date of a millisecond timestamp.
pub fn format_date(millis: u64) -> String {
    to_datetime(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_timestamp(millis: u64) -> String {
    to_datetime(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

fn to_datetime(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
