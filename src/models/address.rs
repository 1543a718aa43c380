use serde::Deserialize;

/// Buyer dropoff location as submitted at checkout. Coordinates are optional
/// at the type level so missing ones can be rejected with a 400 instead of a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingAddress {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub barangay: String,
    #[serde(default)]
    pub city: String,
}

impl ShippingAddress {
    /// Street, barangay and city joined with commas, skipping empty segments
    /// so the courier never sees a dangling separator.
    pub fn full_address(&self) -> String {
        [&self.address, &self.barangay, &self.city]
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Artisan pickup point for the shipment.
#[derive(Debug, Clone, Deserialize)]
pub struct Artisan {
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    #[serde(default)]
    pub pickup_address: String,
}
