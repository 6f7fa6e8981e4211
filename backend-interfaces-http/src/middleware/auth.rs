use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: token.map(ToString::to_string),
            max_body_bytes: 1024,
            request_timeout_seconds: 5,
            default_warhit_limit: 50,
            max_warhit_limit: 100,
        }
    }

    #[test]
    fn open_when_no_token_configured() {
        assert!(authorize(&config(None), &HeaderMap::new()));
    }

    #[test]
    fn requires_matching_bearer() {
        let config = config(Some("s3cret"));
        let mut headers = HeaderMap::new();
        assert!(!authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        assert!(!authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Bearer s3cret"));
        assert!(authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Basic s3cret"));
        assert!(!authorize(&config, &headers));
    }
}
