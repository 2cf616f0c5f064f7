use crate::schema::{cars, clients, sales_orders};
use chrono::{DateTime, FixedOffset, NaiveDate};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Deserializer, Serialize};

/// A car in the dealership stock
#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = cars, primary_key(car_id))]
pub struct Car {
    /// Identifier assigned by the database on insertion
    #[serde(rename = "idCarro")]
    pub car_id: i32,
    /// Manufacturer
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    /// Model year
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}

/// Car attributes received on creation and update
#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = cars)]
pub struct NewCar {
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}

/// A person that can place sales orders
#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = clients, primary_key(client_id))]
pub struct Client {
    /// Identifier assigned by the database on insertion
    #[serde(rename = "idCliente")]
    pub client_id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    /// National ID (CPF)
    pub cpf: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Client attributes received on creation and update
#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = clients)]
pub struct NewClient {
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// A sale linking a client to a car
///
/// `car_id` and `client_id` are stored as given; nothing checks that they
/// point at existing rows.
#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = sales_orders, primary_key(order_id))]
pub struct SalesOrder {
    /// Identifier assigned by the database on insertion
    #[serde(rename = "idPedido")]
    pub order_id: i32,
    #[serde(rename = "idCarro")]
    pub car_id: i32,
    #[serde(rename = "idCliente")]
    pub client_id: i32,
    #[serde(rename = "dataPedido")]
    pub order_date: NaiveDate,
    #[serde(rename = "valorPedido")]
    pub order_value: f64,
}

/// Sales order attributes received on creation and update
#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = sales_orders)]
pub struct NewSalesOrder {
    #[serde(rename = "id_carro")]
    pub car_id: i32,
    #[serde(rename = "id_cliente")]
    pub client_id: i32,
    #[serde(rename = "dataPedido", deserialize_with = "deserialize_order_date")]
    pub order_date: NaiveDate,
    #[serde(rename = "valorPedido")]
    pub order_value: f64,
}

/// Accepts either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp,
/// keeping only the calendar date of the latter.
fn deserialize_order_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_order_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid order date '{}'", raw))
    })
}

fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::<FixedOffset>::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_date_accepts_plain_date_and_timestamp() {
        assert_eq!(
            parse_order_date("2024-05-17"),
            NaiveDate::from_ymd_opt(2024, 5, 17)
        );
        assert_eq!(
            parse_order_date("2024-05-17T13:45:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 5, 17)
        );
        assert_eq!(parse_order_date("17/05/2024"), None);
    }

    #[test]
    fn new_sales_order_reads_mixed_case_payload() {
        let payload = json!({
            "dataPedido": "2024-05-17",
            "valorPedido": 85000.5,
            "id_cliente": 3,
            "id_carro": 7
        });

        let order: NewSalesOrder = serde_json::from_value(payload).unwrap();
        assert_eq!(order.car_id, 7);
        assert_eq!(order.client_id, 3);
        assert_eq!(order.order_value, 85000.5);
    }

    #[test]
    fn sales_order_serializes_listing_keys() {
        let order = SalesOrder {
            order_id: 1,
            car_id: 2,
            client_id: 3,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            order_value: 1000.0,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "idPedido": 1,
                "idCarro": 2,
                "idCliente": 3,
                "dataPedido": "2024-01-31",
                "valorPedido": 1000.0
            })
        );
    }

    #[test]
    fn client_payload_rejects_missing_fields() {
        let result = serde_json::from_value::<NewClient>(json!({ "nome": "Ana" }));
        assert!(result.is_err());
    }
}
