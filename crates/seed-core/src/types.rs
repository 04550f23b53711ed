//! Closed vocabularies used by the generated entities.
//!
//! Each enum serializes to the exact label stored in the database, so a
//! record decoded from a file compares equal to the one that was written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of cuisine a restaurant serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuisineType {
    #[serde(rename = "Italiana")]
    Italian,
    #[serde(rename = "Mexicana")]
    Mexican,
    #[serde(rename = "Japonesa")]
    Japanese,
    #[serde(rename = "Americana")]
    American,
    #[serde(rename = "Vegana")]
    Vegan,
    #[serde(rename = "India")]
    Indian,
}

impl CuisineType {
    /// Every cuisine, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Italian,
        Self::Mexican,
        Self::Japanese,
        Self::American,
        Self::Vegan,
        Self::Indian,
    ];

    /// Stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Italian => "Italiana",
            Self::Mexican => "Mexicana",
            Self::Japanese => "Japonesa",
            Self::American => "Americana",
            Self::Vegan => "Vegana",
            Self::Indian => "India",
        }
    }
}

/// Dietary preference of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[serde(rename = "Vegetariano")]
    Vegetarian,
    #[serde(rename = "Vegano")]
    Vegan,
    #[serde(rename = "Sin gluten")]
    GlutenFree,
    #[serde(rename = "Carnívoro")]
    Carnivore,
    #[serde(rename = "Pescetariano")]
    Pescatarian,
}

impl DietaryPreference {
    pub const ALL: [Self; 5] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::Carnivore,
        Self::Pescatarian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetariano",
            Self::Vegan => "Vegano",
            Self::GlutenFree => "Sin gluten",
            Self::Carnivore => "Carnívoro",
            Self::Pescatarian => "Pescetariano",
        }
    }
}

/// Menu section a dish is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Entradas")]
    Starters,
    #[serde(rename = "Plato fuerte")]
    MainCourse,
    #[serde(rename = "Postres")]
    Desserts,
    #[serde(rename = "Bebidas")]
    Drinks,
}

impl MenuCategory {
    pub const ALL: [Self; 4] = [
        Self::Starters,
        Self::MainCourse,
        Self::Desserts,
        Self::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "Entradas",
            Self::MainCourse => "Plato fuerte",
            Self::Desserts => "Postres",
            Self::Drinks => "Bebidas",
        }
    }
}

/// Delivery status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Completado")]
    Completed,
    #[serde(rename = "Preparando")]
    Preparing,
    #[serde(rename = "En camino")]
    OnTheWay,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Completed,
        Self::Preparing,
        Self::OnTheWay,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completado",
            Self::Preparing => "Preparando",
            Self::OnTheWay => "En camino",
            Self::Cancelled => "Cancelado",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(CuisineType, DietaryPreference, MenuCategory, OrderStatus);
