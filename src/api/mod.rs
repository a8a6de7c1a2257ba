//! Client for handing visit requests over to the security desk
//!
//! There is no desk service yet: `submit` encodes the request, waits a fixed
//! delay standing in for the round trip, and always succeeds.

use std::time::Duration;

use anyhow::Result;

use crate::models::VisitRequest;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Acknowledgement for one submitted request
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub id: uuid::Uuid,
    pub submitted_at: chrono::DateTime<chrono::Local>,
    /// JSON body that was sent
    pub payload: String,
}

/// Client for the security desk
#[derive(Debug, Clone)]
pub struct GuardDeskClient {
    delay: Duration,
}

impl GuardDeskClient {
    pub fn new(delay: Option<Duration>) -> Self {
        Self {
            delay: delay.unwrap_or(DEFAULT_SUBMIT_DELAY),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn submit(&self, request: &VisitRequest) -> Result<SubmissionReceipt> {
        let payload = serde_json::to_string(request)?;
        tracing::debug!(
            bytes = payload.len(),
            delay_ms = self.delay.as_millis() as u64,
            "sending visit request"
        );

        smol::Timer::after(self.delay).await;

        Ok(SubmissionReceipt {
            id: uuid::Uuid::new_v4(),
            submitted_at: chrono::Local::now(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn request() -> VisitRequest {
        VisitRequest {
            full_name: "Иван Иванов".into(),
            organization: "ООО Ромашка".into(),
            visit_duration: "1 час".into(),
            recipient: "2".into(),
            room_number: "305".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(GuardDeskClient::new(None).delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_submit_waits_for_delay() {
        let client = GuardDeskClient::new(Some(Duration::from_millis(50)));
        let started = Instant::now();
        let receipt = smol::block_on(client.submit(&request())).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert!(!receipt.id.is_nil());
    }

    #[test]
    fn test_receipt_carries_payload() {
        let client = GuardDeskClient::new(Some(Duration::ZERO));
        let receipt = smol::block_on(client.submit(&request())).unwrap();
        let json: serde_json::Value = serde_json::from_str(&receipt.payload).unwrap();
        assert_eq!(json["fullName"], "Иван Иванов");
        assert_eq!(json["organization"], "ООО Ромашка");
        assert_eq!(json["visitDuration"], "1 час");
        assert_eq!(json["recipient"], "2");
        assert_eq!(json["roomNumber"], "305");
    }

    #[test]
    fn test_each_submission_gets_a_new_id() {
        let client = GuardDeskClient::new(Some(Duration::ZERO));
        let a = smol::block_on(client.submit(&request())).unwrap();
        let b = smol::block_on(client.submit(&request())).unwrap();
        assert_ne!(a.id, b.id);
    }
}
