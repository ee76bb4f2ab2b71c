use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest<'a> {
    pub method: &'a str,
    pub amount: f64,
    pub table_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentStatus {
    Approved,
    /// Settled by staff at the till; nothing to charge now.
    PayAtCounter,
    Declined(String),
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn authorize(&self, request: &PaymentRequest<'_>) -> anyhow::Result<PaymentStatus>;
}

/// No gateway attached: counter orders are deferred, everything else is
/// approved as-is.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPayments;

#[async_trait]
impl PaymentProcessor for SimulatedPayments {
    async fn authorize(&self, request: &PaymentRequest<'_>) -> anyhow::Result<PaymentStatus> {
        let status = if request.method == "counter" {
            PaymentStatus::PayAtCounter
        } else {
            PaymentStatus::Approved
        };
        debug!(
            method = request.method,
            amount = request.amount,
            table = ?request.table_number,
            ?status,
            "payment simulated"
        );
        Ok(status)
    }
}
