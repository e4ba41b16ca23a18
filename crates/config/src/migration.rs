use crate::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Adds fields introduced after a config file was written, keeping the
/// user's formatting and comments
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<resmap_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(resmap_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_resources_section(doc, &mut added_fields)?;
    migrate_mappings_array(doc, &mut added_fields);

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    ensure_table(doc, "server", added_fields);

    let server = doc["server"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig("[server] must be a table".to_string()))?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(
        server,
        "base_url",
        Value::from("http://localhost:8080"),
        added_fields,
    );
    ensure_field(server, "context_path", Value::from(""), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(60), added_fields);
    ensure_field(server, "max_body_size_mb", Value::from(10), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );
    ensure_field(
        server,
        "streaming_threshold_mb",
        Value::from(8),
        added_fields,
    );
    ensure_field(
        server,
        "enable_compression",
        Value::from(true),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_resources_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    ensure_table(doc, "resources", added_fields);

    let resources = doc["resources"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig("[resources] must be a table".to_string()))?;
    ensure_field(
        resources,
        "config_watch_debounce_ms",
        Value::from(500),
        added_fields,
    );
    ensure_field(resources, "url_decode", Value::from(true), added_fields);
    ensure_field(
        resources,
        "remove_semicolon_content",
        Value::from(true),
        added_fields,
    );
    ensure_field(
        resources,
        "always_use_full_path",
        Value::from(false),
        added_fields,
    );
    ensure_field(
        resources,
        "create_locations",
        Value::from(true),
        added_fields,
    );

    Ok(())
}

fn migrate_mappings_array(doc: &mut DocumentMut, added_fields: &mut Vec<String>) {
    // Only touch an existing array; never add an empty one
    if let Some(mappings) = doc
        .get_mut("resources")
        .and_then(|r| r.get_mut("mappings"))
        .and_then(|m| m.as_array_of_tables_mut())
    {
        for (idx, mapping) in mappings.iter_mut().enumerate() {
            if !mapping.contains_key("enabled") {
                mapping.insert("enabled", Item::Value(Value::from(true)));
                added_fields.push(format!("resources.mappings[{}].enabled", idx));
            }
        }
    }
}

fn ensure_table(doc: &mut DocumentMut, key: &str, added_fields: &mut Vec<String>) {
    if !doc.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[key] = Item::Table(table);
        added_fields.push(key.to_string());
    }
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}
