use serde::Deserialize;

/// Order fields the gateway reads from the backend. The backend owns the full
/// record; everything else in its response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub shipping_name: String,
    #[serde(default)]
    pub shipping_phone: String,
}

/// Delivery sub-record holding the courier identifiers captured when the
/// quotation was created. All three must be present before a booking is
/// attempted.
#[derive(Debug, Clone, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub quotation_id: Option<String>,
    #[serde(default)]
    pub pickup_stop_id: Option<String>,
    #[serde(default)]
    pub dropoff_stop_id: Option<String>,
}

/// Shape of `GET /api/products/orders/get-order/{order_id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetails {
    pub order: Order,
    pub delivery: Delivery,
}
