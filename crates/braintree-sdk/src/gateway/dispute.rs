use serde::Serialize;

use super::{extract, search_body, segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{DisputeResponse, Evidence, FileEvidenceRequest, TextEvidenceRequest};
use crate::validation::{Entity, ValidatedResponse};

/// Chargebacks and retrievals raised against the merchant's transactions.
pub struct DisputeGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> DisputeGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    /// Accept liability. Only open disputes can be accepted.
    pub async fn accept(
        &self,
        dispute_id: &str,
    ) -> Result<ValidatedResponse<DisputeResponse>, BraintreeError> {
        let path = format!("{}/accept", Self::path(dispute_id)?);
        self.transition(dispute_id, ApiRequest::put(path, None)).await
    }

    pub async fn add_file_evidence(
        &self,
        dispute_id: &str,
        evidence: &FileEvidenceRequest,
    ) -> Result<ValidatedResponse<Evidence>, BraintreeError> {
        self.add_evidence(dispute_id, evidence).await
    }

    pub async fn add_text_evidence(
        &self,
        dispute_id: &str,
        evidence: &TextEvidenceRequest,
    ) -> Result<ValidatedResponse<Evidence>, BraintreeError> {
        self.add_evidence(dispute_id, evidence).await
    }

    /// Submit the collected evidence; no more can be added afterwards.
    pub async fn finalize(
        &self,
        dispute_id: &str,
    ) -> Result<ValidatedResponse<DisputeResponse>, BraintreeError> {
        let path = format!("{}/finalize", Self::path(dispute_id)?);
        self.transition(dispute_id, ApiRequest::put(path, None)).await
    }

    pub async fn find(&self, dispute_id: &str) -> Result<DisputeResponse, BraintreeError> {
        let path = Self::path(dispute_id)?;
        self.api
            .entity(ApiRequest::get(path), DisputeResponse::KEY)
            .await
    }

    pub async fn remove_evidence(
        &self,
        dispute_id: &str,
        evidence_id: &str,
    ) -> Result<ValidatedResponse<DisputeResponse>, BraintreeError> {
        let path = format!(
            "{}/evidence/{}",
            Self::path(dispute_id)?,
            segment(evidence_id)?
        );
        self.transition(dispute_id, ApiRequest::delete(path)).await
    }

    pub async fn search<P: Serialize + ?Sized>(
        &self,
        criteria: &P,
    ) -> Result<Vec<DisputeResponse>, BraintreeError> {
        let body = search_body(criteria)?;
        self.api
            .list(ApiRequest::post("/disputes/advanced_search", body), "disputes")
            .await
    }

    async fn add_evidence<E: Serialize>(
        &self,
        dispute_id: &str,
        evidence: &E,
    ) -> Result<ValidatedResponse<Evidence>, BraintreeError> {
        let path = format!("{}/evidence", Self::path(dispute_id)?);
        let body = wrap(Evidence::KEY, evidence)?;
        self.api.validated(ApiRequest::post(path, body)).await
    }

    /// State changes may answer with an empty body; the dispute is then
    /// fetched so the caller always gets the current record.
    async fn transition(
        &self,
        dispute_id: &str,
        request: ApiRequest,
    ) -> Result<ValidatedResponse<DisputeResponse>, BraintreeError> {
        match self.api.submit(request).await? {
            ValidatedResponse::Failure(failure) => Ok(ValidatedResponse::Failure(failure)),
            ValidatedResponse::Success(body) => {
                match extract::<DisputeResponse>(body, DisputeResponse::KEY)? {
                    Some(dispute) => Ok(ValidatedResponse::Success(dispute)),
                    None => self.find(dispute_id).await.map(ValidatedResponse::Success),
                }
            }
        }
    }

    fn path(dispute_id: &str) -> Result<String, BraintreeError> {
        Ok(format!("/disputes/{}", segment(dispute_id)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{fixtures, StubTransport};
    use crate::transport::Method;
    use crate::types::{DisputeStatus, FileEvidenceRequest, TextEvidenceRequest};
    use crate::BraintreeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_accept_refetches_when_body_is_empty() {
        let mut accepted = fixtures::dispute();
        accepted["status"] = json!("accepted");
        let transport = StubTransport::new()
            .respond_empty(200)
            .respond(200, json!({"dispute": accepted}));
        let gateway = BraintreeGateway::new(transport);

        let response = gateway.dispute().accept("dsp_1").await.unwrap();
        assert_eq!(response.entity().unwrap().status, DisputeStatus::Accepted);

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/disputes/dsp_1/accept");
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].path, "/disputes/dsp_1");
    }

    #[tokio::test]
    async fn test_finalize_rejected() {
        let transport = StubTransport::new().respond(
            422,
            json!({
                "message": "Disputes can only be finalized when they are Open.",
                "errors": [{"attribute": "status", "code": "95601", "message": "Disputes can only be finalized when they are Open."}]
            }),
        );
        let gateway = BraintreeGateway::new(transport);

        let response = gateway.dispute().finalize("dsp_1").await.unwrap();
        assert!(!response.success());
        assert_eq!(response.errors()[0].code, "95601");
        assert_eq!(gateway.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_add_evidence_bodies() {
        let transport = StubTransport::new()
            .respond(201, json!({"evidence": fixtures::evidence()}))
            .respond(201, json!({"evidence": fixtures::evidence()}));
        let gateway = BraintreeGateway::new(transport);

        let text = TextEvidenceRequest {
            content: "tracking 1Z999".into(),
            category: Some("PROOF_OF_FULFILLMENT".into()),
        };
        let added = gateway.dispute().add_text_evidence("dsp_1", &text).await.unwrap();
        assert_eq!(added.entity().unwrap().id, "ev_1");

        let file = FileEvidenceRequest {
            document_id: "doc_1".into(),
            category: None,
        };
        gateway.dispute().add_file_evidence("dsp_1", &file).await.unwrap();

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].path, "/disputes/dsp_1/evidence");
        assert_eq!(
            requests[0].body.clone().unwrap(),
            json!({"evidence": {"content": "tracking 1Z999", "category": "PROOF_OF_FULFILLMENT"}})
        );
        assert_eq!(
            requests[1].body.clone().unwrap(),
            json!({"evidence": {"documentId": "doc_1"}})
        );
    }

    #[tokio::test]
    async fn test_remove_evidence_and_search() {
        let transport = StubTransport::new()
            .respond(200, json!({"dispute": fixtures::dispute()}))
            .respond(200, json!({"disputes": [fixtures::dispute()]}));
        let gateway = BraintreeGateway::new(transport);

        let response = gateway.dispute().remove_evidence("dsp_1", "ev_1").await.unwrap();
        assert_eq!(response.entity().unwrap().evidence.len(), 1);
        let found = gateway
            .dispute()
            .search(&json!({"status": {"in": ["open"]}}))
            .await
            .unwrap();
        assert_eq!(found[0].status_history.len(), 1);

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].path, "/disputes/dsp_1/evidence/ev_1");
        assert_eq!(requests[1].path, "/disputes/advanced_search");
    }
}
