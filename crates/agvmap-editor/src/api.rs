//! Backend persistence interface.
//!
//! The editor core does not speak HTTP; the host application supplies a
//! transport implementing [`MapService`]. This module pins down the wire
//! contract: the response envelope, the payload shapes, and the three
//! logical endpoints (list maps, upload a map's full graph, fetch one map
//! by name).

use serde::{Deserialize, Serialize};

use agvmap_core::constants::API_CODE_OK;
use agvmap_core::{ApiError, Result};

use crate::model::{NodeData, PathData};

/// Response envelope every endpoint returns: `code == 200` is success,
/// anything else carries a failure message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, mapping non-success codes to
    /// [`ApiError::Status`].
    pub fn into_result(self) -> Result<T> {
        if self.code == API_CODE_OK {
            Ok(self.data)
        } else {
            Err(ApiError::Status {
                code: self.code,
                message: self.message,
            }
            .into())
        }
    }
}

/// One entry of the map list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub map_name: String,
    pub width: f64,
    pub height: f64,
}

/// Full graph of one map, as uploaded and fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDetail {
    pub map_name: String,
    pub width: f64,
    pub height: f64,
    pub node_list: Vec<NodeData>,
    pub path_list: Vec<PathData>,
}

/// The three logical persistence endpoints, implemented by the host's
/// transport layer.
pub trait MapService {
    /// Lists all stored maps (summaries only).
    fn fetch_map_list(&self) -> Result<Vec<MapSummary>>;

    /// Creates or replaces a map's full graph.
    fn upload_map(&self, detail: &MapDetail) -> Result<()>;

    /// Fetches one map's full graph by name.
    fn map_detail(&self, map_name: &str) -> Result<MapDetail>;
}
