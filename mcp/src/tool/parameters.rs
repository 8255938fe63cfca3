//! Shared parameter helpers for tool param structs.

use serde::{Deserialize, Deserializer};

use crate::constants::VALID_PORT_RANGE;

/// Deserialize and validate port numbers
///
/// Ensures every `port` parameter is within the valid range (1024-65534).
/// Used as a serde `deserialize_with` attribute on port fields.
pub fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let port = u16::deserialize(deserializer)?;

    if VALID_PORT_RANGE.contains(&port) {
        Ok(port)
    } else {
        Err(serde::de::Error::custom(format!(
            "Invalid port {}: must be in range {}-{}",
            port,
            VALID_PORT_RANGE.start(),
            VALID_PORT_RANGE.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    use crate::constants::default_port;

    #[derive(Deserialize, JsonSchema)]
    struct PortOnly {
        #[serde(default = "default_port", deserialize_with = "super::deserialize_port")]
        port: u16,
    }

    #[test]
    fn test_valid_port_accepted() {
        let parsed: Result<PortOnly, _> = serde_json::from_value(json!({"port": 8585}));
        assert!(matches!(parsed, Ok(ref p) if p.port == 8585));
    }

    #[test]
    fn test_privileged_port_rejected() {
        let parsed: Result<PortOnly, _> = serde_json::from_value(json!({"port": 80}));
        assert!(parsed.is_err());
    }
}
