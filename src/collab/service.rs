use uuid::Uuid;

use crate::{
    config::RasterSettings,
    foundation::error::{CurveError, CurveResult},
    raster::preview::{RasterPreview, rasterize_json},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Success,
    Error,
}

/// `{status, message, data}` envelope returned by outer services.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServiceResponse {
    pub status: ServiceStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ServiceResponse {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            status: ServiceStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Error,
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ServiceStatus::Success
    }

    /// The payload of a successful response; the message of a failed one as an error.
    pub fn into_data(self) -> CurveResult<serde_json::Value> {
        match self.status {
            ServiceStatus::Success => Ok(self.data),
            ServiceStatus::Error => Err(CurveError::Other(anyhow::anyhow!(self.message))),
        }
    }
}

/// Updates one field of a persisted record.
pub trait FieldUpdater {
    fn update_field(&mut self, id: Uuid, table: &str, field: &str, value: &str) -> ServiceResponse;
}

/// Fetches and parses a JSON document.
pub trait JsonFetcher {
    fn fetch_json(&self, url: &str) -> ServiceResponse;
}

/// Fetch a `curve_json` document and rasterize it.
///
/// Fetch failures are errors; a document that cannot be rasterized is `Ok(None)`.
pub fn preview_from_url<F: JsonFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    settings: &RasterSettings,
) -> CurveResult<Option<RasterPreview>> {
    let data = fetcher.fetch_json(url).into_data()?;
    Ok(rasterize_json(&data, settings))
}

/// Candidate names stored comma-separated in one `name` field.
pub fn name_options(name: Option<&str>) -> Vec<String> {
    match name {
        Some(n) if !n.is_empty() => n.split(',').map(|s| s.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Commit one candidate as the record's `name`.
pub fn choose_name<U: FieldUpdater + ?Sized>(
    updater: &mut U,
    id: Uuid,
    table: &str,
    option: &str,
) -> CurveResult<()> {
    let option = option.trim();
    if option.is_empty() {
        return Err(CurveError::validation("name option must not be empty"));
    }
    let response = updater.update_field(id, table, "name", option);
    if !response.is_success() {
        tracing::warn!(%id, table, message = %response.message, "name update rejected");
    }
    response.into_data().map(|_| ())
}

#[cfg(test)]
#[path = "../../tests/unit/collab/service.rs"]
mod tests;
