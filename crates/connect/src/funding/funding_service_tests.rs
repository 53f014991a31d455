//! Tests for the funding submission workflow.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::Notify;

    use aluma_core::accounts::SnapshotStore;
    use aluma_core::errors::Error;
    use aluma_core::funding::{
        FundingError, FundingForm, FundingKind, Outcome, ENDPOINT_TRANSFERS,
    };
    use aluma_core::Result;

    use crate::accounts::{AccountSource, SnapshotRefresher};
    use crate::funding::{FundingService, SubmissionOutcome, SubmissionState};
    use crate::session::{MemorySessionStore, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
    use crate::transport::{Method, Transport, TransportReply};

    // =========================================================================
    // Mock collaborators
    // =========================================================================

    struct MockTransport {
        status: u16,
        body: Value,
        fail: bool,
        requests: Mutex<Vec<(Method, String, Option<Value>)>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: Value) -> Self {
            Self {
                status,
                body,
                fail: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                status: 0,
                body: Value::Null,
                fail: true,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(Method, String, Option<Value>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
        ) -> Result<TransportReply> {
            self.requests
                .lock()
                .unwrap()
                .push((method, path.to_string(), body));
            if self.fail {
                return Err(Error::Transport("network unreachable".to_string()));
            }
            Ok(TransportReply {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    /// Transport that parks every request until released, for exercising
    /// the in-flight guard.
    struct ParkedTransport {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl Transport for ParkedTransport {
        async fn send(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Value>,
        ) -> Result<TransportReply> {
            self.release.notified().await;
            Ok(TransportReply {
                status: 200,
                body: json!({"success": true}),
            })
        }
    }

    struct StaticAccounts;

    #[async_trait]
    impl AccountSource for StaticAccounts {
        async fn list_accounts(&self) -> Result<Vec<aluma_core::accounts::UserAccountRef>> {
            Ok(vec![aluma_core::accounts::UserAccountRef {
                id: "a1".to_string(),
                ..Default::default()
            }])
        }

        async fn list_bank_accounts(&self) -> Result<Vec<aluma_core::accounts::BankAccountRef>> {
            Ok(Vec::new())
        }
    }

    fn transfer_form() -> FundingForm {
        FundingForm {
            account_id: "acc-1".to_string(),
            destination_account_id: "acc-2".to_string(),
            amount: "25".to_string(),
            pin: "1234".to_string(),
            ..FundingForm::default()
        }
    }

    fn service(transport: Arc<dyn Transport>) -> (FundingService, Arc<MemorySessionStore>) {
        let session = Arc::new(MemorySessionStore::new());
        (
            FundingService::new(transport, session.clone(), None),
            session,
        )
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_invalid_form_is_never_sent() {
        let transport = Arc::new(MockTransport::replying(200, json!({"success": true})));
        let (service, _) = service(transport.clone());

        let form = FundingForm {
            pin: "12".to_string(),
            ..transfer_form()
        };
        let report = service.submit(FundingKind::Transfer, &form).await.unwrap();

        assert_eq!(
            report.outcome,
            SubmissionOutcome::Invalid(FundingError::InvalidPin)
        );
        assert!(report.clear_pin);
        assert!(transport.sent().is_empty());
        assert_eq!(service.state(), SubmissionState::Failed);
    }

    // ==================== Dispatch & classification ====================

    #[tokio::test]
    async fn test_successful_submission() {
        let transport = Arc::new(MockTransport::replying(
            200,
            json!({"success": true, "data": {"id": "tx-1"}}),
        ));
        let (service, _) = service(transport.clone());

        let report = service
            .submit(FundingKind::Transfer, &transfer_form())
            .await
            .unwrap();

        assert!(report.succeeded());
        assert!(!report.clear_pin);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let (method, path, body) = &sent[0];
        assert_eq!(*method, Method::Post);
        assert_eq!(path, ENDPOINT_TRANSFERS);
        let body = body.as_ref().unwrap();
        assert_eq!(body["from_account_id"], "acc-1");
        assert_eq!(body["pin"], "1234");

        // No refresher configured: the state falls straight back to Idle.
        assert_eq!(service.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_rejection_reports_server_message_and_wipes_pin() {
        let transport = Arc::new(MockTransport::replying(
            422,
            json!({"success": false, "message": "Insufficient funds"}),
        ));
        let (service, _) = service(transport);

        let report = service
            .submit(FundingKind::Transfer, &transfer_form())
            .await
            .unwrap();

        assert_eq!(
            report.outcome,
            SubmissionOutcome::Completed(Outcome::Rejected("Insufficient funds".to_string()))
        );
        assert!(report.clear_pin);
        assert_eq!(service.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_not_retried() {
        let transport = Arc::new(MockTransport::failing());
        let (service, _) = service(transport.clone());

        let report = service
            .submit(FundingKind::Transfer, &transfer_form())
            .await
            .unwrap();

        assert!(matches!(
            report.outcome,
            SubmissionOutcome::Completed(Outcome::TransportFailure(_))
        ));
        assert!(report.clear_pin);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_auth_expiry_clears_session() {
        let transport = Arc::new(MockTransport::replying(401, json!({})));
        let (service, session) = service(transport);
        session.set(ACCESS_TOKEN_KEY, "at");
        session.set(REFRESH_TOKEN_KEY, "rt");
        session.set(USER_KEY, "{}");

        let report = service
            .submit(FundingKind::Transfer, &transfer_form())
            .await
            .unwrap();

        assert_eq!(
            report.outcome,
            SubmissionOutcome::Completed(Outcome::AuthExpired)
        );
        assert_eq!(session.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(session.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(session.get(USER_KEY), None);
    }

    // ==================== State machine ====================

    #[tokio::test]
    async fn test_overlapping_submission_is_refused() {
        let release = Arc::new(Notify::new());
        let transport = Arc::new(ParkedTransport {
            release: release.clone(),
        });
        let session = Arc::new(MemorySessionStore::new());
        let service = Arc::new(FundingService::new(transport, session, None));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.submit(FundingKind::Transfer, &transfer_form()).await })
        };

        // Let the first submission reach the transport.
        tokio::task::yield_now().await;
        assert_eq!(service.state(), SubmissionState::Submitting);

        let second = service.submit(FundingKind::Transfer, &transfer_form()).await;
        assert!(matches!(second, Err(Error::SubmissionInFlight)));

        release.notify_one();
        assert!(first.await.unwrap().unwrap().succeeded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_schedules_account_refresh_then_idles() {
        let store = Arc::new(SnapshotStore::new());
        let refresher = Arc::new(SnapshotRefresher::new(Arc::new(StaticAccounts), store.clone()));
        let transport = Arc::new(MockTransport::replying(200, json!({"success": true})));
        let session = Arc::new(MemorySessionStore::new());
        let service = FundingService::new(transport, session, Some(refresher));

        let report = service
            .submit(FundingKind::Transfer, &transfer_form())
            .await
            .unwrap();
        assert!(report.succeeded());
        assert_eq!(service.state(), SubmissionState::Succeeded);
        assert!(store.load().user_accounts.is_empty());

        // Paused time: sleeping past the follow-up delay lets the
        // scheduled refresh run.
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        tokio::task::yield_now().await;

        assert_eq!(store.load().user_accounts.len(), 1);
        assert_eq!(service.state(), SubmissionState::Idle);
    }
}
