use tracing::{debug, info, warn};

use super::{
    dto::{Confirmation, Order},
    payment::{PaymentRequest, PaymentStatus},
    sink::KitchenTicket,
};
use crate::{
    config::OrderConfig,
    error::{AppError, ValidationError},
    state::AppState,
};

/// Checks the order's structure and returns the server-computed total.
pub fn validate_order(order: &Order, cfg: &OrderConfig) -> Result<f64, ValidationError> {
    if order.items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    if let Some(item) = order.items.iter().find(|i| i.quantity <= 0) {
        return Err(ValidationError::InvalidQuantity {
            item_id: item.id.clone(),
            quantity: item.quantity,
        });
    }

    if let Some(item) = order
        .items
        .iter()
        .find(|i| !i.price.is_finite() || i.price < 0.0)
    {
        return Err(ValidationError::InvalidPrice {
            item_id: item.id.clone(),
            price: item.price,
        });
    }

    if order.table_number == Some(0) {
        return Err(ValidationError::InvalidTableId(0));
    }

    if !cfg.payment_methods.iter().any(|m| *m == order.payment_method) {
        return Err(ValidationError::InvalidPaymentMethod(
            order.payment_method.clone(),
        ));
    }

    let computed = computed_total(order);
    if !order.total.is_finite() || (computed - order.total).abs() > cfg.total_tolerance {
        return Err(ValidationError::TotalMismatch {
            submitted: order.total,
            computed,
        });
    }

    Ok(computed)
}

pub fn computed_total(order: &Order) -> f64 {
    let sum: f64 = order
        .items
        .iter()
        .map(|i| i.price * i.quantity as f64)
        .sum();
    (sum * 100.0).round() / 100.0
}

pub async fn accept_order(state: &AppState, order: Order) -> Result<Confirmation, AppError> {
    let total = validate_order(&order, &state.config.orders)?;
    for item in &order.items {
        if state.catalog.get(&item.id).is_none() {
            debug!(item_id = %item.id, name = %item.name, "order item not on the menu");
        }
    }

    let request = PaymentRequest {
        method: &order.payment_method,
        amount: total,
        table_number: order.table_number,
    };
    match state.payments.authorize(&request).await? {
        PaymentStatus::Declined(reason) => return Err(AppError::PaymentDeclined(reason)),
        status => info!(?status, method = %order.payment_method, total, "payment authorized"),
    }

    let ticket = KitchenTicket::new(
        order.table_number,
        &order.payment_method,
        total,
        &order.items,
    );
    if let Err(e) = state.sink.submit(&ticket).await {
        warn!(error = %e, ticket_id = %ticket.id, "kitchen ticket not delivered");
    }

    info!(
        ticket_id = %ticket.id,
        table = %ticket.table_label(),
        items = order.items.len(),
        total,
        "order accepted"
    );
    Ok(Confirmation::received())
}
