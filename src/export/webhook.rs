use log::warn;

use crate::error::{NutriError, Result};
use crate::export::payload::ExportPayload;

/// Default endpoint of the plan document generator.
pub const DEFAULT_EXPORT_URL: &str = "https://n8n.srv775529.hstgr.cloud/webhook/generation-plan";

/// POST the plan to the document-generation webhook.
///
/// Synchronous call, no retry or timeout layer here: a transport
/// failure or a non-200 status surfaces as an error and the in-memory
/// plan stays intact for another attempt.
pub fn dispatch_plan(url: &str, payload: &ExportPayload) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let response = client.post(url).json(payload).send()?;

    let status = response.status().as_u16();
    if status == 200 {
        return Ok(());
    }

    let body = response.text().unwrap_or_default();
    warn!("export webhook answered {}: {}", status, body);
    Err(NutriError::ExportServer { status, body })
}
