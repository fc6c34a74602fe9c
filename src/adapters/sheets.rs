use crate::domain::model::DropdownData;
use crate::domain::ports::DropdownSource;
use crate::utils::error::{Result, TranscriptError};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::OnceLock;

static GVIZ_PADDING: OnceLock<Regex> = OnceLock::new();

fn gviz_padding() -> &'static Regex {
    GVIZ_PADDING.get_or_init(|| {
        Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((.*)\);")
            .expect("hard-coded pattern")
    })
}

/// Dropdown data backed by a published Google Sheet, read per column range
/// through the gviz JSON endpoint. The sheet layout is fixed: A holds degree
/// levels, B their abbreviations, C majors, D options, E honors labels.
pub struct SheetSource {
    endpoint: String,
    client: Client,
}

impl SheetSource {
    /// `endpoint` is the spreadsheet base URL without the gviz path.
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    fn range_url(&self, range: &str) -> String {
        format!(
            "{}/gviz/tq?tqx=out:json&headers=1&range={}",
            self.endpoint.trim_end_matches('/'),
            range
        )
    }

    async fn fetch_rows(&self, range: &str) -> Result<Vec<serde_json::Value>> {
        let url = self.range_url(range);
        tracing::debug!("Fetching sheet range {} from {}", range, url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // The gviz endpoint wraps its JSON in a JS callback invocation.
        let Some(caps) = gviz_padding().captures(&body) else {
            return Err(TranscriptError::ProcessingError {
                message: "missing gviz response padding".to_string(),
            });
        };
        let parsed: serde_json::Value = serde_json::from_str(&caps[1])?;

        parsed
            .pointer("/table/rows")
            .and_then(|v| v.as_array())
            .cloned()
            .ok_or_else(|| TranscriptError::ProcessingError {
                message: "no rows found in sheet response".to_string(),
            })
    }

    async fn fetch_column(&self, range: &str) -> Result<Vec<String>> {
        let rows = self.fetch_rows(range).await?;
        Ok(rows.iter().filter_map(|row| cell_value(row, 0)).collect())
    }

    async fn fetch_map(&self, range: &str) -> Result<HashMap<String, String>> {
        let rows = self.fetch_rows(range).await?;
        let mut map = HashMap::new();
        for row in &rows {
            // Both cells must be present and non-empty to form an entry.
            if let (Some(key), Some(value)) = (cell_value(row, 0), cell_value(row, 1)) {
                if !key.is_empty() && !value.is_empty() {
                    map.insert(key, value);
                }
            }
        }
        Ok(map)
    }
}

fn cell_value(row: &serde_json::Value, index: usize) -> Option<String> {
    match row.pointer(&format!("/c/{index}/v"))? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn or_empty_list(result: Result<Vec<String>>, what: &str) -> Vec<String> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch {}: {}", what, e);
        Vec::new()
    })
}

#[async_trait]
impl DropdownSource for SheetSource {
    /// Fetches all five collections concurrently. Any individual failure
    /// degrades that collection to empty; nothing propagates past here.
    async fn fetch_all(&self) -> DropdownData {
        let (degree_levels, degree_map, majors, options, honors) = tokio::join!(
            self.fetch_column("A1:A"),
            self.fetch_map("A:B"),
            self.fetch_column("C1:C"),
            self.fetch_column("D1:D"),
            self.fetch_column("E1:E"),
        );

        DropdownData {
            degree_levels: or_empty_list(degree_levels, "degree levels"),
            degree_map: degree_map.unwrap_or_else(|e| {
                tracing::warn!("Failed to fetch degree abbreviation map: {}", e);
                HashMap::new()
            }),
            majors: or_empty_list(majors, "majors"),
            options: or_empty_list(options, "options"),
            honors: or_empty_list(honors, "honors labels"),
        }
    }
}
