use crate::config::AppConfig;
use crate::menu::Catalog;
use crate::orders::{
    payment::{PaymentProcessor, SimulatedPayments},
    sink::{KitchenLogSink, OrderSink},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub sink: Arc<dyn OrderSink>,
    pub payments: Arc<dyn PaymentProcessor>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let catalog = Catalog::build();
        anyhow::ensure!(catalog.has_unique_ids(), "menu catalog has duplicate ids");
        info!(items = catalog.len(), "menu catalog built");

        // Kitchen printer and payment gateway are simulated
        let sink = Arc::new(KitchenLogSink) as Arc<dyn OrderSink>;
        let payments = Arc::new(SimulatedPayments) as Arc<dyn PaymentProcessor>;

        Ok(Self::from_parts(config, Arc::new(catalog), sink, payments))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        catalog: Arc<Catalog>,
        sink: Arc<dyn OrderSink>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            config,
            catalog,
            sink,
            payments,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(Catalog::build()),
            Arc::new(KitchenLogSink),
            Arc::new(SimulatedPayments),
        )
    }
}
