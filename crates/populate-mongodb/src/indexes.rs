//! Secondary indexes over the loaded collections.

use crate::error::LoadError;
use crate::store::DocumentStore;
use bson::{doc, Document};
use tracing::info;

/// One index to create: a collection and its ascending/descending keys.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Document,
}

impl IndexSpec {
    pub fn new(collection: &'static str, keys: Document) -> Self {
        Self { collection, keys }
    }
}

/// The query indexes used against the dataset.
///
/// Single-field, compound, multikey (over the array fields) and lookup
/// indexes over the text fields, in creation order.
pub fn default_indexes() -> Vec<IndexSpec> {
    vec![
        // single field
        IndexSpec::new("restaurantes", doc! { "nombre": 1 }),
        IndexSpec::new("restaurantes", doc! { "tipo": 1 }),
        IndexSpec::new("restaurantes", doc! { "rating": -1 }),
        IndexSpec::new("resenas", doc! { "rating": -1 }),
        // compound
        IndexSpec::new("restaurantes", doc! { "nombre": 1, "direccion": 1, "rating": 1 }),
        IndexSpec::new("articulos_menu", doc! { "categorias": 1, "precio_individual": 1 }),
        IndexSpec::new("articulos_menu", doc! { "titulo": 1, "disponibilidad": 1 }),
        IndexSpec::new("ordenes", doc! { "id_restaurante": 1, "fecha": 1, "estado": 1 }),
        IndexSpec::new("resenas", doc! { "restaurante_id": 1, "rating": 1 }),
        IndexSpec::new("resenas", doc! { "usuario_id": 1, "restaurante_id": 1 }),
        IndexSpec::new("restaurantes", doc! { "rating": 1, "tiempo_estimado_entrega": 1 }),
        IndexSpec::new("ordenes", doc! { "id_usuario": 1, "estado": 1 }),
        // multikey
        IndexSpec::new("articulos_menu", doc! { "categorias": 1 }),
        IndexSpec::new("usuarios", doc! { "preferencias": 1 }),
        // address lookup
        IndexSpec::new("restaurantes", doc! { "direccion": 1 }),
        IndexSpec::new("usuarios", doc! { "direccion": 1 }),
        // text lookup
        IndexSpec::new("restaurantes", doc! { "nombre": 1, "tipo": 1, "direccion": 1 }),
        IndexSpec::new("articulos_menu", doc! { "titulo": 1, "descripcion": 1 }),
        IndexSpec::new("resenas", doc! { "comentario": 1 }),
    ]
}

/// Create every index from [`default_indexes`], returning their names.
///
/// Creating an index that already exists is a no-op on the server, so this
/// can be run repeatedly. Stops at the first failure.
pub async fn create_indexes(store: &dyn DocumentStore) -> Result<Vec<String>, LoadError> {
    let specs = default_indexes();
    let mut names = Vec::with_capacity(specs.len());

    for spec in specs {
        let name = store.create_index(spec.collection, spec.keys).await?;
        names.push(name);
    }

    info!("Created {} indexes", names.len());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use seed_core::EntityKind;

    #[test]
    fn test_indexes_target_known_collections() {
        for spec in default_indexes() {
            assert!(
                EntityKind::from_collection_name(spec.collection).is_some(),
                "unknown collection {}",
                spec.collection
            );
            assert!(!spec.keys.is_empty());
        }
    }

    #[tokio::test]
    async fn test_create_indexes() {
        let store = MemoryStore::new();
        let names = create_indexes(&store).await.unwrap();

        assert_eq!(names.len(), default_indexes().len());
        assert!(names.contains(&"rating_-1".to_string()));
        assert!(names.contains(&"id_usuario_1_estado_1".to_string()));
    }

    #[tokio::test]
    async fn test_create_indexes_twice() {
        let store = MemoryStore::new();
        create_indexes(&store).await.unwrap();
        create_indexes(&store).await.unwrap();

        assert_eq!(store.indexes().len(), default_indexes().len());
    }
}
