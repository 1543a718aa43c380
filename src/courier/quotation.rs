use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::models::address::{Artisan, ShippingAddress};

pub const QUOTATIONS_PATH: &str = "/v3/quotations";

const SERVICE_TYPE: &str = "MOTORCYCLE";
const LANGUAGE: &str = "en_PH";
const PICKUP_LEAD_MINUTES: i64 = 15;

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Serialize)]
pub struct Stop {
    pub coordinates: Coordinates,
    pub address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    pub schedule_at: String,
    pub service_type: &'static str,
    pub language: &'static str,
    pub is_route_optimized: bool,
    pub special_requests: Vec<String>,
    pub stops: Vec<Stop>,
}

#[derive(Debug, Serialize)]
pub struct QuotationEnvelope {
    pub data: QuotationRequest,
}

/// Builds the courier quotation request: pickup stop first, dropoff second,
/// scheduled `PICKUP_LEAD_MINUTES` ahead. Fails with a 400 before any network
/// call when either side lacks coordinates.
pub fn build_quotation_request(
    shipping: &ShippingAddress,
    artisan: &Artisan,
) -> Result<QuotationEnvelope, AppError> {
    let (drop_lat, drop_lng) = match (shipping.lat, shipping.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(AppError::BadRequest(
                "Shipping address missing coordinates".to_string(),
            ));
        }
    };

    let (pickup_lat, pickup_lng) = match (artisan.pickup_lat, artisan.pickup_lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(AppError::BadRequest(
                "Artisan missing pickup coordinates".to_string(),
            ));
        }
    };

    Ok(QuotationEnvelope {
        data: QuotationRequest {
            schedule_at: schedule_at_from(Utc::now()),
            service_type: SERVICE_TYPE,
            language: LANGUAGE,
            is_route_optimized: false,
            special_requests: Vec::new(),
            stops: vec![
                Stop {
                    coordinates: Coordinates {
                        lat: pickup_lat.to_string(),
                        lng: pickup_lng.to_string(),
                    },
                    address: artisan.pickup_address.clone(),
                },
                Stop {
                    coordinates: Coordinates {
                        lat: drop_lat.to_string(),
                        lng: drop_lng.to_string(),
                    },
                    address: shipping.full_address(),
                },
            ],
        },
    })
}

/// Pickup time quantized to whole seconds, as the courier requires
/// (`YYYY-MM-DDTHH:MM:SS.000Z`).
fn schedule_at_from(now: DateTime<Utc>) -> String {
    (now + Duration::minutes(PICKUP_LEAD_MINUTES))
        .format("%Y-%m-%dT%H:%M:%S.000Z")
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    use super::{build_quotation_request, schedule_at_from};
    use crate::error::AppError;
    use crate::models::address::{Artisan, ShippingAddress};

    fn shipping() -> ShippingAddress {
        ShippingAddress {
            lat: Some(14.5995),
            lng: Some(120.9842),
            address: "123 Mabini St".to_string(),
            barangay: "Poblacion".to_string(),
            city: "Makati".to_string(),
        }
    }

    fn artisan() -> Artisan {
        Artisan {
            pickup_lat: Some(14.676),
            pickup_lng: Some(121.0437),
            pickup_address: "Workshop, Quezon City".to_string(),
        }
    }

    #[test]
    fn schedule_at_is_quantized_to_whole_seconds() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 45).unwrap()
            + chrono::Duration::milliseconds(678);
        assert_eq!(schedule_at_from(now), "2026-03-01T10:45:45.000Z");
    }

    #[test]
    fn schedule_at_is_fifteen_minutes_ahead() {
        let now = Utc::now();
        let rendered = schedule_at_from(now);
        let parsed: DateTime<Utc> = rendered.parse().unwrap();
        let lead = (parsed - now).num_seconds();
        assert!((899..=901).contains(&lead), "lead was {lead}s");
    }

    #[test]
    fn stops_are_pickup_then_dropoff() {
        let envelope = build_quotation_request(&shipping(), &artisan()).unwrap();
        let body = serde_json::to_value(&envelope).unwrap();

        let stops = body["data"]["stops"].as_array().unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(
            stops[0]["coordinates"],
            json!({ "lat": "14.676", "lng": "121.0437" })
        );
        assert_eq!(stops[0]["address"], "Workshop, Quezon City");
        assert_eq!(stops[1]["address"], "123 Mabini St, Poblacion, Makati");

        assert_eq!(body["data"]["serviceType"], "MOTORCYCLE");
        assert_eq!(body["data"]["language"], "en_PH");
        assert_eq!(body["data"]["isRouteOptimized"], false);
        assert_eq!(body["data"]["specialRequests"], json!([]));
    }

    #[test]
    fn missing_shipping_coordinates_is_rejected() {
        let mut addr = shipping();
        addr.lat = None;
        let err = build_quotation_request(&addr, &artisan()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn missing_pickup_coordinates_is_rejected() {
        let mut a = artisan();
        a.pickup_lng = None;
        let err = build_quotation_request(&shipping(), &a).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
