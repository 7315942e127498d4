//! Static catalog of commonly used n8n node types
//!
//! This is not fetched from a server. It gives an assistant enough to
//! assemble a draft for `create_workflow`: the type string, a version that
//! is known to work, and a minimal parameter example.

use serde_json::{json, Value};

use crate::types::NodeCategory;

/// One catalog entry
#[derive(Debug, Clone)]
pub struct NodeTypeInfo {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub category: NodeCategory,
    pub type_version: f64,
    pub description: &'static str,
    pub example_parameters: Value,
}

fn entry(
    node_type: &'static str,
    display_name: &'static str,
    category: NodeCategory,
    type_version: f64,
    description: &'static str,
    example_parameters: Value,
) -> NodeTypeInfo {
    NodeTypeInfo {
        node_type,
        display_name,
        category,
        type_version,
        description,
        example_parameters,
    }
}

/// All catalog entries, grouped by category
pub fn node_catalog() -> Vec<NodeTypeInfo> {
    use NodeCategory::*;

    vec![
        entry(
            "n8n-nodes-base.manualTrigger",
            "Manual Trigger",
            Trigger,
            1.0,
            "Starts the workflow when run by hand from the editor",
            json!({}),
        ),
        entry(
            "n8n-nodes-base.scheduleTrigger",
            "Schedule Trigger",
            Trigger,
            1.2,
            "Starts the workflow on an interval or cron expression",
            json!({"rule": {"interval": [{"field": "hours", "hoursInterval": 1}]}}),
        ),
        entry(
            "n8n-nodes-base.webhook",
            "Webhook",
            Trigger,
            2.0,
            "Starts the workflow when an HTTP request hits its path",
            json!({"httpMethod": "POST", "path": "my-hook", "responseMode": "onReceived"}),
        ),
        entry(
            "n8n-nodes-base.httpRequest",
            "HTTP Request",
            Action,
            4.2,
            "Calls any HTTP endpoint and returns the response as items",
            json!({"method": "GET", "url": "https://api.example.com/items"}),
        ),
        entry(
            "n8n-nodes-base.emailSend",
            "Send Email",
            Action,
            2.1,
            "Sends an email over SMTP credentials",
            json!({"fromEmail": "bot@example.com", "toEmail": "team@example.com", "subject": "Report"}),
        ),
        entry(
            "n8n-nodes-base.slack",
            "Slack",
            Action,
            2.2,
            "Posts messages and manages channels in Slack",
            json!({"resource": "message", "operation": "post", "text": "Hello"}),
        ),
        entry(
            "n8n-nodes-base.respondToWebhook",
            "Respond to Webhook",
            Action,
            1.1,
            "Returns a custom response to the request that started a webhook workflow",
            json!({"respondWith": "json", "responseBody": "={{ $json }}"}),
        ),
        entry(
            "n8n-nodes-base.if",
            "If",
            Logic,
            2.0,
            "Routes items to output 0 (true) or output 1 (false)",
            json!({"conditions": {"conditions": [{"leftValue": "={{ $json.status }}", "rightValue": "ok", "operator": {"type": "string", "operation": "equals"}}]}}),
        ),
        entry(
            "n8n-nodes-base.switch",
            "Switch",
            Logic,
            3.0,
            "Routes items to one of several outputs by rule",
            json!({"mode": "rules"}),
        ),
        entry(
            "n8n-nodes-base.merge",
            "Merge",
            Logic,
            3.0,
            "Combines items arriving on input 0 and input 1",
            json!({"mode": "append"}),
        ),
        entry(
            "n8n-nodes-base.splitInBatches",
            "Loop Over Items",
            Logic,
            3.0,
            "Processes items in batches; output 0 is done, output 1 loops",
            json!({"batchSize": 10}),
        ),
        entry(
            "n8n-nodes-base.wait",
            "Wait",
            Logic,
            1.1,
            "Pauses execution for a time or until a webhook call",
            json!({"amount": 5, "unit": "minutes"}),
        ),
        entry(
            "n8n-nodes-base.set",
            "Edit Fields (Set)",
            Data,
            3.4,
            "Adds, renames or removes item fields",
            json!({"mode": "manual", "assignments": {"assignments": [{"name": "status", "value": "done", "type": "string"}]}}),
        ),
        entry(
            "n8n-nodes-base.code",
            "Code",
            Data,
            2.0,
            "Runs JavaScript over the incoming items",
            json!({"jsCode": "return $input.all();"}),
        ),
        entry(
            "n8n-nodes-base.filter",
            "Filter",
            Data,
            2.0,
            "Drops items that do not match the conditions",
            json!({"conditions": {"conditions": []}}),
        ),
    ]
}

/// Catalog entries, optionally restricted to one category
pub fn nodes_in(category: Option<NodeCategory>) -> Vec<NodeTypeInfo> {
    node_catalog()
        .into_iter()
        .filter(|n| category.map_or(true, |c| n.category == c))
        .collect()
}

/// Text description of the catalog, one section per category
pub fn describe(category: Option<NodeCategory>) -> String {
    let nodes = nodes_in(category);
    let mut out = Vec::new();

    for cat in NodeCategory::ALL {
        let section: Vec<&NodeTypeInfo> = nodes.iter().filter(|n| n.category == cat).collect();
        if section.is_empty() {
            continue;
        }

        out.push(format!("## {} nodes", cat));
        for node in section {
            out.push(format!(
                "- {} ({}, typeVersion {}): {}\n  example parameters: {}",
                node.display_name,
                node.node_type,
                node.type_version,
                node.description,
                node.example_parameters
            ));
        }
        out.push(String::new());
    }

    out.push(
        "Connections reference nodes by name. Branching nodes use output index \
         0, 1, ...; Merge uses input index 0 and 1."
            .to_string(),
    );
    out.join("\n")
}
