//! In-memory caching using moka
//!
//! Room records and the room listing change rarely (admin edits only), so
//! they are kept in memory and invalidated on writes. Booked days depend on
//! orders and on the current date and are never cached.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db;
use crate::models::{Room, RoomSummary, STATUS_ACTIVE};

const LISTING_KEY: &str = "rooms:active";

/// Application cache holding room records and the room listing
#[derive(Clone)]
pub struct AppCache {
    /// Active rooms (id -> Room)
    pub rooms: Cache<Uuid, Arc<Room>>,
    /// Active room listing (single entry)
    pub room_listing: Cache<String, Arc<Vec<RoomSummary>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Rooms: 200 entries, 5 min TTL
            rooms: Cache::builder()
                .max_capacity(200)
                .time_to_live(Duration::from_secs(5 * 60))
                .build(),

            // Listing: 1 entry, 1 min TTL
            room_listing: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(60))
                .build(),
        }
    }

    pub async fn get_listing(&self) -> Option<Arc<Vec<RoomSummary>>> {
        self.room_listing.get(LISTING_KEY).await
    }

    pub async fn put_listing(&self, listing: Vec<RoomSummary>) -> Arc<Vec<RoomSummary>> {
        let listing = Arc::new(listing);
        self.room_listing
            .insert(LISTING_KEY.to_string(), Arc::clone(&listing))
            .await;
        listing
    }

    /// Cached room while it is still active; a stale entry is dropped
    pub async fn active_room(&self, id: Uuid) -> Option<Arc<Room>> {
        let room = self.rooms.get(&id).await?;
        if room.status == STATUS_ACTIVE {
            return Some(room);
        }
        self.rooms.invalidate(&id).await;
        None
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            rooms_size: self.rooms.entry_count(),
            listing_cached: self.room_listing.entry_count() > 0,
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.rooms.invalidate_all();
        self.room_listing.invalidate_all();
        info!("All caches invalidated");
    }

    /// Drop a room and the listing that may include it
    pub async fn invalidate_room(&self, id: Uuid) {
        self.rooms.invalidate(&id).await;
        self.room_listing.invalidate(LISTING_KEY).await;
        info!("Cache invalidated for room: {}", id);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub rooms_size: u64,
    pub listing_cached: bool,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool) {
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Warm the cache with the active rooms
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    info!("Starting cache warm-up...");

    match db::list_active_rooms(db).await {
        Ok(rooms) => {
            let listing = rooms.iter().map(Room::summary).collect();
            cache.put_listing(listing).await;
            for room in rooms {
                cache.rooms.insert(room.id, Arc::new(room)).await;
            }
        }
        Err(e) => warn!("Failed to warm room cache: {}", e),
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATUS_DELETED;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn room(status: i16) -> Room {
        let now = Utc::now();
        Room {
            id: Uuid::new_v4(),
            name: "Garden Single".to_string(),
            description: "One bed by the garden".to_string(),
            image_url_list: vec![],
            area_info: dec!(12),
            bed_info: "1 single bed".to_string(),
            max_people: 1,
            price: dec!(1800),
            check_in: "15:00".to_string(),
            check_out: "12:00".to_string(),
            weekday_price: dec!(1800),
            weekend_price: dec!(2200),
            status,
            facility_info: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_active_room_hit() {
        let cache = AppCache::new();
        let room = room(STATUS_ACTIVE);
        let id = room.id;
        cache.rooms.insert(id, Arc::new(room)).await;

        assert_eq!(cache.active_room(id).await.unwrap().id, id);
        assert!(cache.active_room(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_active_room_drops_deleted_entry() {
        // A load that raced a soft delete can leave the deleted row cached
        let cache = AppCache::new();
        let room = room(STATUS_DELETED);
        let id = room.id;
        cache.rooms.insert(id, Arc::new(room)).await;

        assert!(cache.active_room(id).await.is_none());
        assert!(cache.rooms.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn test_listing_roundtrip_and_invalidation() {
        let cache = AppCache::new();
        assert!(cache.get_listing().await.is_none());

        let room_id = Uuid::new_v4();
        cache
            .put_listing(vec![RoomSummary {
                id: room_id,
                name: "Deluxe Twin".to_string(),
                image_url: String::new(),
            }])
            .await;

        let listing = cache.get_listing().await.unwrap();
        assert_eq!(listing[0].id, room_id);

        cache.invalidate_room(room_id).await;
        assert!(cache.get_listing().await.is_none());
    }
}
