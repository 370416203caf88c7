//! Database queries for rooms

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateRoomRequest, Room, UpdateRoomRequest, STATUS_ACTIVE, STATUS_DELETED};

/// Get all active rooms, oldest first
pub async fn list_active_rooms(pool: &PgPool) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        FROM rooms
        WHERE status = $1
        ORDER BY created_at
        "#,
    )
    .bind(STATUS_ACTIVE)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Get an active room by id
pub async fn get_active_room(pool: &PgPool, id: Uuid) -> Result<Room> {
    let room = sqlx::query_as::<_, Room>(
        r#"
        SELECT
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        FROM rooms
        WHERE id = $1
          AND status = $2
        "#,
    )
    .bind(id)
    .bind(STATUS_ACTIVE)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok(room)
}

/// Get rooms by id regardless of status (used to populate orders)
pub async fn get_rooms_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        FROM rooms
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Insert a new room
pub async fn insert_room(pool: &PgPool, room: &CreateRoomRequest) -> Result<Room> {
    let room = sqlx::query_as::<_, Room>(
        r#"
        INSERT INTO rooms (
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(room.name.trim())
    .bind(&room.description)
    .bind(&room.image_url_list)
    .bind(room.area_info)
    .bind(&room.bed_info)
    .bind(room.max_people)
    .bind(room.price)
    .bind(&room.check_in)
    .bind(&room.check_out)
    .bind(room.weekday_price)
    .bind(room.weekend_price)
    .bind(STATUS_ACTIVE)
    .bind(Json(&room.facility_info))
    .fetch_one(pool)
    .await?;

    Ok(room)
}

/// Update a room; `None` fields keep their stored value
pub async fn update_room(pool: &PgPool, id: Uuid, changes: &UpdateRoomRequest) -> Result<Option<Room>> {
    let room = sqlx::query_as::<_, Room>(
        r#"
        UPDATE rooms SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            image_url_list = COALESCE($4, image_url_list),
            area_info = COALESCE($5, area_info),
            bed_info = COALESCE($6, bed_info),
            max_people = COALESCE($7, max_people),
            price = COALESCE($8, price),
            check_in = COALESCE($9, check_in),
            check_out = COALESCE($10, check_out),
            weekday_price = COALESCE($11, weekday_price),
            weekend_price = COALESCE($12, weekend_price),
            facility_info = COALESCE($13, facility_info),
            updated_at = now()
        WHERE id = $1
        RETURNING
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(changes.name.as_deref().map(str::trim))
    .bind(changes.description.as_deref())
    .bind(changes.image_url_list.as_deref())
    .bind(changes.area_info)
    .bind(changes.bed_info.as_deref())
    .bind(changes.max_people)
    .bind(changes.price)
    .bind(changes.check_in.as_deref())
    .bind(changes.check_out.as_deref())
    .bind(changes.weekday_price)
    .bind(changes.weekend_price)
    .bind(changes.facility_info.as_ref().map(Json))
    .fetch_optional(pool)
    .await?;

    Ok(room)
}

/// Mark a room as deleted
pub async fn soft_delete_room(pool: &PgPool, id: Uuid) -> Result<Option<Room>> {
    let room = sqlx::query_as::<_, Room>(
        r#"
        UPDATE rooms SET
            status = $2,
            updated_at = now()
        WHERE id = $1
        RETURNING
            id, name, description, image_url_list, area_info, bed_info,
            max_people, price, check_in, check_out, weekday_price, weekend_price,
            status, facility_info, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(STATUS_DELETED)
    .fetch_optional(pool)
    .await?;

    Ok(room)
}
