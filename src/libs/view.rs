use super::entry::LogEntry;
use super::reconcile::Diff;
use super::tempo_data::TempoData;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn worklogs(data: &TempoData) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "ID", "ISSUE", "ACTIVITY", "HOURS", "SUMMARY", "COMMENT"]);
        for entry in data.entries() {
            table.add_row(row![
                entry.date,
                entry.remote_id.map(|id| id.to_string()).unwrap_or_default(),
                entry.issue,
                entry.activity,
                r->entry.hours,
                entry.summary,
                entry.comment
            ]);
        }
        table.add_row(row!["", "", "", "TOTAL", r->total_hours(data.entries()), "", ""]);
        table.printstd();
    }

    pub fn diff(diff: &Diff) {
        let mut table = Table::new();

        table.add_row(row!["", "DATE", "ID", "ISSUE", "ACTIVITY", "HOURS", "SUMMARY", "COMMENT"]);
        for (_, changes) in diff.iter() {
            for entry in &changes.to_delete {
                table.add_row(Self::change_row("-", entry));
            }
            for entry in &changes.to_add {
                table.add_row(Self::change_row("+", entry));
            }
        }
        table.printstd();
    }

    fn change_row(sign: &str, entry: &LogEntry) -> prettytable::Row {
        row![
            sign,
            entry.date,
            entry.remote_id.map(|id| id.to_string()).unwrap_or_default(),
            entry.issue,
            entry.activity,
            r->entry.hours,
            entry.summary,
            entry.comment
        ]
    }
}

fn total_hours<'a>(entries: impl Iterator<Item = &'a LogEntry>) -> String {
    let seconds: u64 = entries.map(|entry| entry.hours.seconds() as u64).sum();
    format!("{:.2}", seconds as f64 / 3600.0)
}
