//! Manager notification text via an external generative-text API.
//!
//! The API call is bounded by the configured timeout; when the key is not
//! configured or the call fails, callers fall back to the deterministic
//! local template so a notification problem never blocks clocking in/out.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::log_action::LogAction;
use crate::utils::time::format_timestamp;
use chrono::{DateTime, Local};
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::env;
use std::time::Duration;

pub const API_KEY_ENV: &str = "ATTLOG_API_KEY";

pub struct Notifier {
    client: Option<Client>,
    endpoint: String,
    model: String,
    api_key: String,
}

impl Notifier {
    /// Build a notifier from the loaded configuration. Without an API key
    /// (config field or `ATTLOG_API_KEY`) the notifier stays offline and
    /// only produces simulated messages.
    pub fn from_config(cfg: &Config) -> Self {
        let api_key = env::var(API_KEY_ENV).unwrap_or_else(|_| cfg.notify_api_key.clone());

        let client = if api_key.is_empty() {
            log::warn!("notification API key not configured, using simulated messages");
            None
        } else {
            Client::builder()
                .timeout(Duration::from_secs(cfg.notify_timeout_secs))
                .build()
                .map_err(|e| log::error!("failed to build notification client: {e}"))
                .ok()
        };

        Self {
            client,
            endpoint: cfg.notify_endpoint.clone(),
            model: cfg.notify_model.clone(),
            api_key,
        }
    }

    /// Produce the manager notification for one clock action.
    /// The returned text is opaque; callers must not parse it.
    pub fn generate(
        &self,
        employee_name: &str,
        action: LogAction,
        time: &DateTime<Local>,
    ) -> AppResult<String> {
        let Some(client) = &self.client else {
            return Ok(format!(
                "(simulated) {}",
                fallback_message(employee_name, action, time)
            ));
        };

        let prompt = format!(
            "Write one short, formal sentence notifying a manager that employee \
             \"{}\" {} on {}. Be very brief and clear.",
            employee_name,
            action.verb(),
            format_timestamp(time),
        );

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key,
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| AppError::Notification(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Notification(format!(
                "service answered with status {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .map_err(|e| AppError::Notification(format!("invalid response body: {e}")))?;

        extract_text(&payload).ok_or_else(|| {
            AppError::Notification("response is not in the expected format".to_string())
        })
    }
}

/// Deterministic local template used when the collaborator is unavailable.
pub fn fallback_message(employee_name: &str, action: LogAction, time: &DateTime<Local>) -> String {
    format!(
        "Employee {} {} at {}.",
        employee_name,
        action.verb(),
        format_timestamp(time)
    )
}

fn extract_text(payload: &Value) -> Option<String> {
    let text = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    Some(text.trim().to_string())
}
