//! Attach a random location to every persisted restaurant.

use crate::error::LoadError;
use crate::store::DocumentStore;
use rand::Rng;
use seed_core::EntityKind;
use seed_generator::generators::geo_point;
use tracing::{debug, info};

/// Field the location is stored under.
pub const LOCATION_FIELD: &str = "ubicacion";

/// Set `ubicacion` on each restaurant to a random GeoJSON point inside the
/// continental United States. Returns how many restaurants were updated.
///
/// Restaurants are read back from the store, so this only touches documents
/// that were actually loaded.
pub async fn geolocate_restaurants<R: Rng + Send>(
    store: &dyn DocumentStore,
    rng: &mut R,
) -> Result<u64, LoadError> {
    let collection = EntityKind::Restaurants.collection_name();
    let ids = store.document_ids(collection).await?;
    let mut updated = 0;

    for id in ids {
        let location = bson::to_bson(&geo_point(rng))?;
        debug!("Locating restaurant {} at {}", id, location);
        store
            .set_field(collection, id, LOCATION_FIELD, location)
            .await?;
        updated += 1;
    }

    info!("Added a location to {} restaurants", updated);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use bson::doc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_generator::generators::location::{LATITUDE_RANGE, LONGITUDE_RANGE};

    #[tokio::test]
    async fn test_every_restaurant_gets_a_point() {
        let store = MemoryStore::new();
        store
            .insert_many(
                "restaurantes",
                vec![doc! { "_id": 1, "nombre": "A" }, doc! { "_id": 2, "nombre": "B" }],
            )
            .await
            .unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let updated = geolocate_restaurants(&store, &mut rng).await.unwrap();
        assert_eq!(updated, 2);

        for restaurant in store.documents("restaurantes") {
            let location = restaurant.get_document(LOCATION_FIELD).unwrap();
            assert_eq!(location.get_str("type").unwrap(), "Point");

            let coordinates = location.get_array("coordinates").unwrap();
            let longitude = coordinates[0].as_f64().unwrap();
            let latitude = coordinates[1].as_f64().unwrap();
            assert!((LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude));
            assert!((LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude));
        }
    }

    #[tokio::test]
    async fn test_no_restaurants() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(geolocate_restaurants(&store, &mut rng).await.unwrap(), 0);
    }
}
