//! Tests for reply classification.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::funding::{classify, Outcome, GENERIC_REJECTION_MESSAGE};

    #[test]
    fn test_successful_envelope() {
        let body = json!({"success": true, "data": {"id": "tx-9"}});
        assert_eq!(
            classify(200, &body),
            Outcome::Success(json!({"id": "tx-9"}))
        );
    }

    #[test]
    fn test_success_without_data_carries_null() {
        let body = json!({"success": true});
        assert_eq!(classify(201, &body), Outcome::Success(serde_json::Value::Null));
    }

    #[test]
    fn test_401_is_auth_expired_regardless_of_body() {
        assert_eq!(classify(401, &json!({})), Outcome::AuthExpired);
        assert_eq!(
            classify(401, &json!({"success": true, "data": {}})),
            Outcome::AuthExpired
        );
    }

    #[test]
    fn test_rejection_carries_server_message() {
        assert_eq!(
            classify(500, &json!({"message": "boom"})),
            Outcome::Rejected("boom".to_string())
        );
    }

    #[test]
    fn test_rejection_reads_nested_error_message() {
        let body = json!({"error": {"message": "Insufficient funds"}});
        assert_eq!(
            classify(422, &body),
            Outcome::Rejected("Insufficient funds".to_string())
        );
    }

    #[test]
    fn test_rejection_falls_back_to_generic_message() {
        assert_eq!(
            classify(503, &json!({})),
            Outcome::Rejected(GENERIC_REJECTION_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_2xx_with_failed_envelope_is_rejected() {
        let body = json!({"success": false, "message": "Transfer limit exceeded"});
        assert_eq!(
            classify(200, &body),
            Outcome::Rejected("Transfer limit exceeded".to_string())
        );
    }

    #[test]
    fn test_transport_failure_constructor() {
        let outcome = Outcome::transport_failure("connection refused");
        assert_eq!(
            outcome,
            Outcome::TransportFailure("connection refused".to_string())
        );
        assert!(!outcome.is_success());
    }
}
