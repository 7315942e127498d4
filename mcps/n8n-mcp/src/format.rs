//! Text rendering for tool results

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::registry::ServerProfile;

const VISIBLE_KEY_CHARS: usize = 4;

fn str_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

/// Ids may come back as strings or numbers depending on the n8n version
fn id_field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "?".to_string(),
    }
}

/// One line per workflow: `- [id] name (active|inactive)`
pub fn summarize_workflow(item: &Value) -> String {
    let state = if item.get("active").and_then(Value::as_bool).unwrap_or(false) {
        "active"
    } else {
        "inactive"
    };

    let mut line = format!(
        "- [{}] {} ({})",
        id_field(item, "id"),
        str_field(item, "name").unwrap_or("unnamed"),
        state
    );
    if let Some(updated) = str_field(item, "updatedAt") {
        line.push_str(&format!(", updated {}", updated));
    }
    line
}

/// One line per execution: id, status, workflow, start time and duration
pub fn summarize_execution(item: &Value) -> String {
    let status = str_field(item, "status")
        .map(str::to_string)
        .unwrap_or_else(|| match item.get("finished").and_then(Value::as_bool) {
            Some(true) => "finished".to_string(),
            Some(false) => "unfinished".to_string(),
            None => "unknown".to_string(),
        });

    let mut line = format!(
        "- [{}] {} (workflow {})",
        id_field(item, "id"),
        status,
        id_field(item, "workflowId")
    );

    if let Some(started) = str_field(item, "startedAt") {
        line.push_str(&format!(", started {}", started));
    }
    if let Some(duration) = execution_duration(item) {
        line.push_str(&format!(", took {}", duration));
    }
    line
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Run time from `startedAt` to `stoppedAt`, when both parse
pub fn execution_duration(item: &Value) -> Option<String> {
    let started = parse_timestamp(str_field(item, "startedAt"))?;
    let stopped = parse_timestamp(str_field(item, "stoppedAt"))?;
    let millis = (stopped - started).num_milliseconds();
    if millis < 0 {
        return None;
    }
    Some(format_millis(millis as u64))
}

pub fn format_millis(millis: u64) -> String {
    if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.1}s", millis as f64 / 1000.0)
    } else {
        format!("{}m {}s", millis / 60_000, (millis % 60_000) / 1000)
    }
}

/// Show only the first few characters of an API key
pub fn redact_key(key: &str) -> String {
    if key.chars().count() <= VISIBLE_KEY_CHARS * 2 {
        return "****".to_string();
    }
    let visible: String = key.chars().take(VISIBLE_KEY_CHARS).collect();
    format!("{}...", visible)
}

/// One line per server profile, default marked
pub fn summarize_server(profile: &ServerProfile, is_default: bool) -> String {
    format!(
        "- {}{}: {} (key: {})",
        profile.name,
        if is_default { " [default]" } else { "" },
        profile.url,
        redact_key(&profile.api_key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_workflow() {
        let line = summarize_workflow(&json!({
            "id": "12",
            "name": "Sync CRM",
            "active": true,
            "updatedAt": "2024-05-01T10:00:00.000Z"
        }));
        assert_eq!(line, "- [12] Sync CRM (active), updated 2024-05-01T10:00:00.000Z");

        assert_eq!(summarize_workflow(&json!({"id": 3})), "- [3] unnamed (inactive)");
    }

    #[test]
    fn test_summarize_execution_with_duration() {
        let line = summarize_execution(&json!({
            "id": 901,
            "status": "error",
            "workflowId": "12",
            "startedAt": "2024-05-01T10:00:00.000Z",
            "stoppedAt": "2024-05-01T10:00:02.500Z"
        }));
        assert_eq!(
            line,
            "- [901] error (workflow 12), started 2024-05-01T10:00:00.000Z, took 2.5s"
        );
    }

    #[test]
    fn test_execution_without_status_uses_finished() {
        let line = summarize_execution(&json!({"id": "1", "finished": true, "workflowId": "2"}));
        assert_eq!(line, "- [1] finished (workflow 2)");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(42), "42ms");
        assert_eq!(format_millis(1500), "1.5s");
        assert_eq!(format_millis(125_000), "2m 5s");
    }

    #[test]
    fn test_redact_key() {
        assert_eq!(redact_key("n8n_api_0123456789abcdef"), "n8n_...");
        assert_eq!(redact_key("short"), "****");
        assert!(!redact_key("n8n_api_0123456789abcdef").contains("0123"));
    }

    #[test]
    fn test_summarize_server() {
        let profile = ServerProfile::new("prod", "https://n8n.example.com", "secret-key-value");
        assert_eq!(
            summarize_server(&profile, true),
            "- prod [default]: https://n8n.example.com (key: secr...)"
        );
    }
}
