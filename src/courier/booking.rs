use serde::Serialize;

use crate::error::AppError;
use crate::models::order::OrderDetails;
use crate::phone;

pub const ORDERS_PATH: &str = "/v3/orders";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub stop_id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub quotation_id: String,
    pub sender: Contact,
    pub recipients: Vec<Contact>,
}

#[derive(Debug, Serialize)]
pub struct BookingEnvelope {
    pub data: BookingRequest,
}

/// Builds the courier booking request from a fetched order. A booking is
/// only attempted when the quotation id and both stop ids are resolved;
/// anything missing means the checkout never produced a quotation, so the
/// caller gets a 400 and the courier is never contacted.
pub fn build_booking_request(
    details: &OrderDetails,
    sender_name: &str,
    sender_phone: &str,
) -> Result<BookingEnvelope, AppError> {
    let quotation_id = require(&details.delivery.quotation_id, "quotation")?;
    let pickup_stop_id = require(&details.delivery.pickup_stop_id, "pickup stop")?;
    let dropoff_stop_id = require(&details.delivery.dropoff_stop_id, "dropoff stop")?;

    Ok(BookingEnvelope {
        data: BookingRequest {
            quotation_id,
            sender: Contact {
                stop_id: pickup_stop_id,
                name: sender_name.to_string(),
                phone: sender_phone.to_string(),
            },
            recipients: vec![Contact {
                stop_id: dropoff_stop_id,
                name: details.order.shipping_name.clone(),
                phone: phone::normalize_ph(&details.order.shipping_phone),
            }],
        },
    })
}

fn require(field: &Option<String>, what: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(AppError::BadRequest(format!(
            "{what} missing, generate quotation first"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::build_booking_request;
    use crate::error::AppError;
    use crate::models::order::{Delivery, Order, OrderDetails};

    fn details() -> OrderDetails {
        OrderDetails {
            order: Order {
                shipping_name: "Maria Santos".to_string(),
                shipping_phone: "09171234567".to_string(),
            },
            delivery: Delivery {
                quotation_id: Some("Q1".to_string()),
                pickup_stop_id: Some("S-pickup".to_string()),
                dropoff_stop_id: Some("S-dropoff".to_string()),
            },
        }
    }

    #[test]
    fn booking_body_references_quotation_stops() {
        let envelope = build_booking_request(&details(), "TahananCrafts", "+639123456789").unwrap();
        let body = serde_json::to_value(&envelope).unwrap();

        assert_eq!(body["data"]["quotationId"], "Q1");
        assert_eq!(body["data"]["sender"]["stopId"], "S-pickup");
        assert_eq!(body["data"]["sender"]["name"], "TahananCrafts");

        let recipients = body["data"]["recipients"].as_array().unwrap();
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0]["stopId"], "S-dropoff");
        assert_eq!(recipients[0]["name"], "Maria Santos");
        assert_eq!(recipients[0]["phone"], "+639171234567");
    }

    #[test]
    fn missing_quotation_id_is_rejected() {
        let mut d = details();
        d.delivery.quotation_id = None;
        let err = build_booking_request(&d, "TahananCrafts", "+639123456789").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn missing_stop_id_is_rejected() {
        let mut d = details();
        d.delivery.dropoff_stop_id = Some(String::new());
        let err = build_booking_request(&d, "TahananCrafts", "+639123456789").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
