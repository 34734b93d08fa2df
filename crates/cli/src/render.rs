//! Text and JSON rendering of listings and demo reports.

use std::fmt::Write as _;

use boxoffice_inventory::SlotSnapshot;

use crate::config::OutputFormat;
use crate::demo::DemoReport;

fn text_listing(buf: &mut String, slots: &[SlotSnapshot]) {
    // Writing into a String cannot fail.
    let _ = writeln!(buf, "\nAvailable Shows and Tickets:");
    for slot in slots {
        let _ = writeln!(buf, "{} - {} tickets available", slot.key, slot.remaining);
    }
    buf.push('\n');
}

pub fn listing(slots: &[SlotSnapshot], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut buf = String::new();
            text_listing(&mut buf, slots);
            Ok(buf)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(slots)? + "\n"),
    }
}

pub fn report(report: &DemoReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut buf = String::new();
            text_listing(&mut buf, &report.before);
            for step in &report.steps {
                let _ = writeln!(buf, "{}", step.message);
            }
            text_listing(&mut buf, &report.after);
            Ok(buf)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}
