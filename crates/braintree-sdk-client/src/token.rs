use base64::Engine;
use braintree::types::ClientTokenPayload;
use braintree::BraintreeError;

/// Decode a token returned by `ClientTokenGateway::generate`.
pub fn decode_client_token(token: &str) -> Result<ClientTokenPayload, BraintreeError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(token.trim())
        .map_err(|e| BraintreeError::Unexpected(format!("invalid base64 client token: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: serde_json::Value) -> String {
        base64::engine::general_purpose::STANDARD.encode(serde_json::to_vec(&value).unwrap())
    }

    #[test]
    fn test_decode_client_token() {
        let token = encode(json!({
            "version": 2,
            "authorizationFingerprint": "fp_abc",
            "configUrl": "https://api.sandbox.braintreegateway.com:443/merchants/m/client_api/v1/configuration",
            "merchantId": "m",
            "environment": "sandbox"
        }));
        let payload = decode_client_token(&token).unwrap();
        assert_eq!(payload.version, 2);
        assert_eq!(payload.authorization_fingerprint, "fp_abc");
        assert_eq!(payload.environment.as_deref(), Some("sandbox"));
        assert!(payload.client_api_url.is_none());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode_client_token("not base64!").unwrap_err();
        assert!(matches!(err, BraintreeError::Unexpected(_)));
    }

    #[test]
    fn test_decode_rejects_missing_fingerprint() {
        let token = encode(json!({"version": 2, "configUrl": "https://x"}));
        let err = decode_client_token(&token).unwrap_err();
        assert!(matches!(err, BraintreeError::Serde(_)));
    }
}
