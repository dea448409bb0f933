//! Database credentials from AWS Secrets Manager, resolved once at startup.

use crate::error::ConfigError;
use aws_config::BehaviorVersion;
use serde::Deserialize;

/// Everything needed to open the database connection. Held for the process
/// lifetime; a rotated secret requires a restart.
#[derive(Clone, Deserialize)]
pub struct ConnectionDescriptor {
    pub username: String,
    pub password: String,
    pub host: String,
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub port: u16,
    pub dbname: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

// Manual Debug so a stray `{:?}` can never put the password in a log line.
impl std::fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("schema", &self.schema)
            .finish()
    }
}

fn default_schema() -> String {
    "public".into()
}

/// RDS-managed secrets store the port as a JSON number; hand-written ones
/// often use a string. Accept both.
fn port_from_number_or_string<'de, D>(de: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }
    match PortRepr::deserialize(de)? {
        PortRepr::Number(n) => Ok(n),
        PortRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Fetch and parse the named credential bundle. Any transport or parse
/// failure is startup-fatal. Only key names are logged, never values.
pub async fn resolve_descriptor(name: &str) -> Result<ConnectionDescriptor, ConfigError> {
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_secretsmanager::Client::new(&aws_config);

    let output = client
        .get_secret_value()
        .secret_id(name)
        .send()
        .await
        .map_err(|e| ConfigError::SecretFetch {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let payload = output.secret_string().ok_or_else(|| ConfigError::SecretParse {
        name: name.to_string(),
        reason: "response carries no SecretString".into(),
    })?;

    parse_descriptor(name, payload)
}

fn parse_descriptor(name: &str, payload: &str) -> Result<ConnectionDescriptor, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ConfigError::SecretParse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(map) = value.as_object() {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        tracing::debug!(secret = name, ?keys, "retrieved secret keys");
    }

    serde_json::from_value(value).map_err(|e| ConfigError::SecretParse {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rds_payload_with_numeric_port() {
        let payload = r#"{"username":"app","password":"pw","host":"db.internal","port":5432,"dbname":"policies"}"#;
        let d = parse_descriptor("test", payload).unwrap();
        assert_eq!(d.username, "app");
        assert_eq!(d.port, 5432);
        assert_eq!(d.schema, "public");
    }

    #[test]
    fn accepts_string_port_and_explicit_schema() {
        let payload = r#"{"username":"app","password":"pw","host":"db","port":"6432","dbname":"policies","schema":"insurance"}"#;
        let d = parse_descriptor("test", payload).unwrap();
        assert_eq!(d.port, 6432);
        assert_eq!(d.schema, "insurance");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let payload = r#"{"username":"app","host":"db","port":5432,"dbname":"policies"}"#;
        let err = parse_descriptor("test", payload).unwrap_err();
        assert!(matches!(err, ConfigError::SecretParse { .. }));
    }

    #[test]
    fn debug_output_redacts_password() {
        let payload = r#"{"username":"app","password":"hunter2","host":"db","port":5432,"dbname":"policies"}"#;
        let d = parse_descriptor("test", payload).unwrap();
        let rendered = format!("{:?}", d);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
