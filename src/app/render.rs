use crate::core::DisplayRecord;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_TITLE: &str = "Home Page";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

pub fn render_header(title: &str) -> String {
    let rule = "=".repeat(title.chars().count().max(1));
    format!("{}\n{}\n", title, rule)
}

pub fn render_card(record: &DisplayRecord) -> String {
    format!("[ {} ]\n  {}\n", record.title, record.content)
}

pub fn render_card_list(records: &[DisplayRecord]) -> String {
    records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_page(title: &str, records: &[DisplayRecord]) -> String {
    let mut page = render_header(title);
    if records.is_empty() {
        page.push_str("\n(no breeds)\n");
    } else {
        page.push('\n');
        page.push_str(&render_card_list(records));
    }
    page
}

pub fn render_json(records: &[DisplayRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn render_csv(records: &[DisplayRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["title", "content"])?;
    for record in records {
        writer.serialize((&record.title, &record.content))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render(format: OutputFormat, title: &str, records: &[DisplayRecord]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_page(title, records)),
        OutputFormat::Json => render_json(records),
        OutputFormat::Csv => render_csv(records),
    }
}
