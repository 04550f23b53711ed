//! Entity kinds and their storage names.

use std::fmt;

/// One of the five generated entity kinds.
///
/// Each kind is written to `<collection>.json` and loaded into a collection
/// of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Restaurants,
    Users,
    MenuItems,
    Orders,
    Reviews,
}

impl EntityKind {
    /// All kinds, in load order.
    pub const ALL: [Self; 5] = [
        Self::Restaurants,
        Self::Users,
        Self::MenuItems,
        Self::Orders,
        Self::Reviews,
    ];

    /// Destination collection name.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::Restaurants => "restaurantes",
            Self::Users => "usuarios",
            Self::MenuItems => "articulos_menu",
            Self::Orders => "ordenes",
            Self::Reviews => "resenas",
        }
    }

    /// File name inside the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.collection_name())
    }

    /// Look a kind up by its collection name.
    pub fn from_collection_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_name() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}
