use serde::{Deserialize, Serialize};

/// Integration settings supplied by the host manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSetSettings {
    /// Endpoint of the backend proxy that forwards requests to the FactSet
    /// API. Searching is disabled while this is empty.
    pub proxy_endpoint: String,
    /// Icon shown on answer entries.
    pub icon: Option<String>,
    /// Icon shown on the busy placeholder; falls back to `icon`.
    pub busy_icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_manifest_style_json() {
        let settings: FactSetSettings = serde_json::from_str(
            r#"{
                "proxyEndpoint": "http://localhost:8080/api/proxy",
                "icon": "http://localhost:8080/assets/factset.svg",
                "busyIcon": "http://localhost:8080/assets/spinner.gif"
            }"#,
        )
        .expect("decode settings");

        assert_eq!(settings.proxy_endpoint, "http://localhost:8080/api/proxy");
        assert_eq!(
            settings.busy_icon.as_deref(),
            Some("http://localhost:8080/assets/spinner.gif")
        );
    }

    #[test]
    fn missing_members_default() {
        let settings: FactSetSettings = serde_json::from_str("{}").expect("decode settings");
        assert!(settings.proxy_endpoint.is_empty());
        assert!(settings.icon.is_none());
    }
}
