//! Database queries for orders

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    NewOrder, Order, OrderChanges, OrderDetail, Room, STATUS_ACTIVE, STATUS_DELETED,
};

use super::rooms::get_rooms_by_ids;

/// Get all orders, newest first
pub async fn list_orders(pool: &PgPool) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        r#"
        SELECT
            id, room_id, days, people_num,
            user_name, user_phone, user_email,
            status, created_at, updated_at
        FROM orders
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Get an order by id
pub async fn get_order(pool: &PgPool, id: Uuid) -> Result<Order> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        SELECT
            id, room_id, days, people_num,
            user_name, user_phone, user_email,
            status, created_at, updated_at
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(order)
}

/// Reserved days of every order placed for a room
pub async fn list_room_days(pool: &PgPool, room_id: Uuid) -> Result<Vec<NaiveDate>> {
    let rows: Vec<Vec<NaiveDate>> = sqlx::query_scalar(
        r#"
        SELECT days
        FROM orders
        WHERE room_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(room_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().flatten().collect())
}

/// Insert a validated order
pub async fn insert_order(pool: &PgPool, order: &NewOrder) -> Result<Order> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (
            id, room_id, days, people_num,
            user_name, user_phone, user_email, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING
            id, room_id, days, people_num,
            user_name, user_phone, user_email,
            status, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(order.room_id)
    .bind(&order.days)
    .bind(order.people_num)
    .bind(order.user_info.name.trim())
    .bind(order.user_info.phone.trim())
    .bind(order.user_info.email.trim())
    .bind(STATUS_ACTIVE)
    .fetch_one(pool)
    .await?;

    Ok(order)
}

/// Update an order; `None` fields keep their stored value
pub async fn update_order(pool: &PgPool, id: Uuid, changes: &OrderChanges) -> Result<Option<Order>> {
    let user = changes.user_info.as_ref();

    let order = sqlx::query_as::<_, Order>(
        r#"
        UPDATE orders SET
            room_id = COALESCE($2, room_id),
            days = COALESCE($3, days),
            people_num = COALESCE($4, people_num),
            user_name = COALESCE($5, user_name),
            user_phone = COALESCE($6, user_phone),
            user_email = COALESCE($7, user_email),
            updated_at = now()
        WHERE id = $1
        RETURNING
            id, room_id, days, people_num,
            user_name, user_phone, user_email,
            status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(changes.room_id)
    .bind(changes.days.as_deref())
    .bind(changes.people_num)
    .bind(user.map(|u| u.name.trim()))
    .bind(user.map(|u| u.phone.trim()))
    .bind(user.map(|u| u.email.trim()))
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

/// Mark an order as cancelled
pub async fn soft_delete_order(pool: &PgPool, id: Uuid) -> Result<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        UPDATE orders SET
            status = $2,
            updated_at = now()
        WHERE id = $1
        RETURNING
            id, room_id, days, people_num,
            user_name, user_phone, user_email,
            status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(STATUS_DELETED)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

/// Attach each order's room record, one query for all of them
pub async fn populate_rooms(pool: &PgPool, orders: Vec<Order>) -> Result<Vec<OrderDetail>> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<Uuid> = orders.iter().map(|o| o.room_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let rooms: HashMap<Uuid, Room> = get_rooms_by_ids(pool, &ids)
        .await?
        .into_iter()
        .map(|room| (room.id, room))
        .collect();

    let details = orders
        .into_iter()
        .map(|order| {
            let room = rooms.get(&order.room_id).cloned();
            order.with_room(room)
        })
        .collect();

    Ok(details)
}

/// Attach the room record of a single order
pub async fn populate_room(pool: &PgPool, order: Order) -> Result<OrderDetail> {
    let mut details = populate_rooms(pool, vec![order]).await?;
    details
        .pop()
        .ok_or_else(|| AppError::Internal("order vanished while populating".to_string()))
}
