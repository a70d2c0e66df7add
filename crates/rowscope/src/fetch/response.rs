//! Wire types for the dataset API.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::item::DatasetItem;

/// One page of rows from the rows endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RowsPage {
    /// Rows in server order.
    pub rows: Vec<RowEntry>,
    /// Authoritative total for the whole split.
    pub num_rows_total: usize,
    /// Page size advertised by the server.
    #[serde(default)]
    pub num_rows_per_page: Option<usize>,
    /// True when the server truncated the response.
    #[serde(default)]
    pub partial: bool,
}

/// One row wrapper within a page.
#[derive(Debug, Clone, Deserialize)]
pub struct RowEntry {
    /// Absolute row index within the split.
    #[serde(default)]
    pub row_idx: usize,
    /// The row itself.
    pub row: DatasetItem,
    /// Cells the server elided for size.
    #[serde(default)]
    pub truncated_cells: Vec<String>,
}

/// Response body of the info endpoint: config name -> config metadata,
/// in server order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetInfo {
    #[serde(default)]
    pub dataset_info: IndexMap<String, ConfigInfo>,
}

/// Metadata for a single dataset config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigInfo {
    /// Split name -> split metadata, in server order.
    #[serde(default)]
    pub splits: IndexMap<String, Value>,
    /// Feature descriptions, shape left to the server.
    #[serde(default)]
    pub features: Value,
}
