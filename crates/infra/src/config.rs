use std::path::PathBuf;

use rust_decimal::Decimal;

/// Values filled in when a purchase order is created without them.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasingDefaults {
    pub supplier_id: String,
    pub unit_price: Decimal,
}

impl Default for PurchasingDefaults {
    fn default() -> Self {
        Self {
            supplier_id: "SUPP001".to_string(),
            unit_price: Decimal::new(2500, 2),
        }
    }
}

/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_path: PathBuf,
    pub bind_addr: String,
    pub seed_demo: bool,
    pub defaults: PurchasingDefaults,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let data_path = std::env::var("STOCKROOM_DATA_PATH").unwrap_or_else(|_| {
            tracing::warn!("STOCKROOM_DATA_PATH not set, using data.json");
            "data.json".to_string()
        });
        let bind_addr = std::env::var("STOCKROOM_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let seed_demo = std::env::var("STOCKROOM_SEED_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut defaults = PurchasingDefaults::default();
        if let Ok(supplier) = std::env::var("STOCKROOM_DEFAULT_SUPPLIER") {
            defaults.supplier_id = supplier;
        }
        if let Ok(raw) = std::env::var("STOCKROOM_DEFAULT_UNIT_PRICE") {
            match raw.parse::<Decimal>() {
                Ok(price) => defaults.unit_price = price,
                Err(err) => {
                    tracing::warn!(%raw, %err, "STOCKROOM_DEFAULT_UNIT_PRICE is not a number, keeping default");
                }
            }
        }

        Self {
            data_path: PathBuf::from(data_path),
            bind_addr,
            seed_demo,
            defaults,
        }
    }
}
