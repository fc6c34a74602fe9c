use crate::domain::model::DropdownData;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the dropdown collections backing the form. Implementations must
/// degrade to empty collections rather than fail past this boundary.
#[async_trait]
pub trait DropdownSource: Send + Sync {
    async fn fetch_all(&self) -> DropdownData;
}

/// Write-only clipboard access. Callers pass the final post-processed text;
/// a failed write is logged by the caller and never affects session state.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
