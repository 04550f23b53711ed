//! Generated entity records.
//!
//! Records are plain data: a generator builds one, it is written to a file
//! and then dropped. Nothing mutates a record after creation.

use crate::types::{CuisineType, DietaryPreference, MenuCategory, OrderStatus};
use serde::{Deserialize, Serialize};

/// A restaurant, identified by a sequential id starting at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "tipo")]
    pub cuisine: CuisineType,
    /// Opening and closing hours, e.g. `"9:00 AM - 10:00 PM"`.
    #[serde(rename = "horario_atencion")]
    pub opening_hours: String,
    /// Estimated delivery time in minutes.
    #[serde(rename = "tiempo_estimado_entrega")]
    pub estimated_delivery_minutes: u32,
    pub rating: u8,
}

/// A customer, identified by a sequential id starting at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "numero_telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "numero_tarjeta")]
    pub card_number: String,
    /// Between one and three distinct preferences.
    #[serde(rename = "preferencias")]
    pub preferences: Vec<DietaryPreference>,
}

/// A dish offered on a menu. Items carry no id; their position in the
/// generated sequence is their identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categorias")]
    pub categories: Vec<MenuCategory>,
    #[serde(rename = "precio_individual")]
    pub unit_price: f64,
    /// Units available.
    #[serde(rename = "disponibilidad")]
    pub availability: u32,
    /// Discount fraction in `[0.0, 0.5]`.
    #[serde(rename = "descuentos")]
    pub discount: f64,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "nombre")]
    pub item_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Cost breakdown of an order. Every field is rounded to cents on its own,
/// so `total` may differ from `food + tip + shipping` by one cent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    #[serde(rename = "propina")]
    pub tip: f64,
    #[serde(rename = "envio")]
    pub shipping: f64,
    #[serde(rename = "comida")]
    pub food: f64,
    pub total: f64,
}

/// A placed order.
///
/// `user_id` and `restaurant_id` are sampled from a numeric range and are
/// not checked against the generated users or restaurants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "id_usuario")]
    pub user_id: u64,
    #[serde(rename = "id_restaurante")]
    pub restaurant_id: u64,
    #[serde(rename = "num_pedido")]
    pub order_number: u64,
    #[serde(rename = "articulos")]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "total")]
    pub totals: OrderTotals,
    /// `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: String,
    /// `HH:MM:SS`
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

/// A review of a restaurant by a user. Same unchecked reference policy as
/// [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "usuario_id")]
    pub user_id: u64,
    #[serde(rename = "restaurante_id")]
    pub restaurant_id: u64,
    pub rating: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "fecha")]
    pub date: String,
}

/// GeoJSON point attached to persisted restaurants as `ubicacion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            user_id: 4,
            restaurant_id: 2,
            order_number: 1,
            lines: vec![OrderLine {
                item_name: "Café Latte".to_string(),
                quantity: 2,
            }],
            totals: OrderTotals {
                tip: 1.2,
                shipping: 3.5,
                food: 12.0,
                total: 16.7,
            },
            date: "2026-03-14".to_string(),
            time: "18:25:03".to_string(),
            status: OrderStatus::OnTheWay,
        }
    }

    #[test]
    fn test_order_wire_names() {
        let json = serde_json::to_value(sample_order()).unwrap();

        assert_eq!(json["id_usuario"], 4);
        assert_eq!(json["id_restaurante"], 2);
        assert_eq!(json["num_pedido"], 1);
        assert_eq!(json["articulos"][0]["nombre"], "Café Latte");
        assert_eq!(json["articulos"][0]["cantidad"], 2);
        assert_eq!(json["total"]["propina"], 1.2);
        assert_eq!(json["total"]["comida"], 12.0);
        assert_eq!(json["estado"], "En camino");
    }

    #[test]
    fn test_restaurant_uses_mongo_id_key() {
        let restaurant = Restaurant {
            id: 7,
            name: "Acme Foods".to_string(),
            address: "1 Main St".to_string(),
            cuisine: CuisineType::Japanese,
            opening_hours: "9:00 AM - 10:00 PM".to_string(),
            estimated_delivery_minutes: 35,
            rating: 4,
        };
        let json = serde_json::to_value(&restaurant).unwrap();

        assert_eq!(json["_id"], 7);
        assert_eq!(json["tipo"], "Japonesa");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_geo_point_shape() {
        let point = GeoPoint::new(-100.5, 40.25);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], -100.5);
        assert_eq!(json["coordinates"][1], 40.25);
        assert_eq!(point.longitude(), -100.5);
        assert_eq!(point.latitude(), 40.25);
    }
}
