use async_trait::async_trait;
use time::{macros::format_description, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use super::dto::OrderItem;

#[derive(Debug, Clone, PartialEq)]
pub struct TicketLine {
    pub is_veg: Option<bool>,
    pub quantity: i64,
    pub name: String,
}

impl TicketLine {
    pub fn indicator(&self) -> &'static str {
        match self.is_veg {
            Some(true) => "🟢",
            Some(false) => "🔴",
            None => "⚪",
        }
    }
}

impl From<&OrderItem> for TicketLine {
    fn from(item: &OrderItem) -> Self {
        Self {
            is_veg: item.is_veg,
            quantity: item.quantity,
            name: item.name.clone(),
        }
    }
}

/// Kitchen-facing summary of an accepted order.
#[derive(Debug, Clone)]
pub struct KitchenTicket {
    pub id: Uuid,
    pub printed_at: OffsetDateTime,
    pub table_number: Option<u32>,
    pub payment_method: String,
    pub total: f64,
    pub lines: Vec<TicketLine>,
}

impl KitchenTicket {
    pub fn new(
        table_number: Option<u32>,
        payment_method: &str,
        total: f64,
        items: &[OrderItem],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            printed_at: OffsetDateTime::now_utc(),
            table_number,
            payment_method: payment_method.to_string(),
            total,
            lines: items.iter().map(TicketLine::from).collect(),
        }
    }

    pub fn table_label(&self) -> String {
        self.table_number
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".into())
    }

    pub fn render(&self) -> String {
        const RULE: &str = "--------------------------------";
        let time = self
            .printed_at
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_default();

        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("Table: {}    {} UTC\n", self.table_label(), time));
        for line in &self.lines {
            out.push_str(&format!(
                " - {} {}x {}\n",
                line.indicator(),
                line.quantity,
                line.name
            ));
        }
        out.push_str(&format!(
            "Total: ₹{:.2} ({})\n",
            self.total, self.payment_method
        ));
        out.push_str(RULE);
        out
    }
}

/// Where accepted orders go for preparation. Delivery is fire-and-forget:
/// a failing sink never fails the order.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn submit(&self, ticket: &KitchenTicket) -> anyhow::Result<()>;
}

/// Stands in for a kitchen printer by writing the ticket to the log.
#[derive(Debug, Clone, Default)]
pub struct KitchenLogSink;

#[async_trait]
impl OrderSink for KitchenLogSink {
    async fn submit(&self, ticket: &KitchenTicket) -> anyhow::Result<()> {
        info!(
            target: "kitchen",
            ticket_id = %ticket.id,
            table = %ticket.table_label(),
            lines = ticket.lines.len(),
            "\n{}",
            ticket.render()
        );
        Ok(())
    }
}
