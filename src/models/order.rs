//! Order records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::Result;
use crate::pricing::parse_reservation_dates;

use super::{require_at_least, require_text, Room};

/// Guest contact details attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl UserInfo {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("phone", &self.phone)?;
        require_text("email", &self.email)?;
        Ok(())
    }
}

/// Order from the orders table
#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub room_id: Uuid,
    pub days: Vec<NaiveDate>,
    pub people_num: i32,
    pub user_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            name: self.user_name.clone(),
            phone: self.user_phone.clone(),
            email: self.user_email.clone(),
        }
    }

    /// Attach the room record the order points at (`None` if it is gone).
    pub fn with_room(self, room: Option<Room>) -> OrderDetail {
        OrderDetail {
            user_info: self.user_info(),
            id: self.id,
            room_id: room,
            days: self.days,
            people_num: self.people_num,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Order as returned by the API, with `roomId` populated
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub room_id: Option<Room>,
    pub days: Vec<NaiveDate>,
    pub people_num: i32,
    pub user_info: UserInfo,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to place an order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub room_id: Uuid,
    pub people_num: i32,
    pub user_info: UserInfo,
    pub days: Vec<String>,
}

/// Validated order, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub room_id: Uuid,
    pub days: Vec<NaiveDate>,
    pub people_num: i32,
    pub user_info: UserInfo,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> Result<NewOrder> {
        require_at_least("peopleNum", self.people_num, 1)?;
        self.user_info.validate()?;
        let days = parse_reservation_dates(&self.days)?;

        Ok(NewOrder {
            room_id: self.room_id,
            days,
            people_num: self.people_num,
            user_info: self.user_info,
        })
    }
}

/// Request to update an order; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub room_id: Option<Uuid>,
    pub days: Option<Vec<String>>,
    pub people_num: Option<i32>,
    pub user_info: Option<UserInfo>,
}

/// Validated partial update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderChanges {
    pub room_id: Option<Uuid>,
    pub days: Option<Vec<NaiveDate>>,
    pub people_num: Option<i32>,
    pub user_info: Option<UserInfo>,
}

impl UpdateOrderRequest {
    pub fn into_changes(self) -> Result<OrderChanges> {
        if let Some(people_num) = self.people_num {
            require_at_least("peopleNum", people_num, 1)?;
        }
        if let Some(user_info) = &self.user_info {
            user_info.validate()?;
        }
        let days = self
            .days
            .as_deref()
            .map(parse_reservation_dates)
            .transpose()?;

        Ok(OrderChanges {
            room_id: self.room_id,
            days,
            people_num: self.people_num,
            user_info: self.user_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn user() -> UserInfo {
        UserInfo {
            name: "Lin Mei".to_string(),
            phone: "0912345678".to_string(),
            email: "mei@example.com".to_string(),
        }
    }

    fn create_request(days: &[&str]) -> CreateOrderRequest {
        CreateOrderRequest {
            room_id: Uuid::new_v4(),
            people_num: 2,
            user_info: user(),
            days: days.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_into_new_order_parses_days_in_order() {
        let order = create_request(&["2024-01-05", "2024-01-04"])
            .into_new_order()
            .unwrap();
        assert_eq!(
            order.days,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            ]
        );
    }

    #[test]
    fn test_into_new_order_requires_days() {
        let err = create_request(&[]).into_new_order().unwrap_err();
        assert!(matches!(err, AppError::Pricing(_)));
    }

    #[test]
    fn test_into_new_order_rejects_bad_day() {
        assert!(create_request(&["2024-13-01"]).into_new_order().is_err());
    }

    #[test]
    fn test_into_new_order_requires_people_and_contact() {
        let mut req = create_request(&["2024-01-05"]);
        req.people_num = 0;
        assert!(matches!(req.into_new_order(), Err(AppError::Validation(_))));

        let mut req = create_request(&["2024-01-05"]);
        req.user_info.email = String::new();
        let err = req.into_new_order().unwrap_err();
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let room_id = Uuid::new_v4();
        let req: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "roomId": room_id,
            "peopleNum": 2,
            "userInfo": { "name": "Lin Mei", "phone": "0912345678", "email": "mei@example.com" },
            "days": ["2024-01-05"]
        }))
        .unwrap();
        assert_eq!(req.room_id, room_id);
        assert_eq!(req.user_info, user());
    }

    #[test]
    fn test_into_changes_only_checks_present_fields() {
        let changes = UpdateOrderRequest::default().into_changes().unwrap();
        assert_eq!(changes, OrderChanges::default());

        let bad_days = UpdateOrderRequest {
            days: Some(vec![]),
            ..Default::default()
        };
        assert!(bad_days.into_changes().is_err());

        let good = UpdateOrderRequest {
            people_num: Some(3),
            days: Some(vec!["2024-02-29".to_string()]),
            ..Default::default()
        };
        let changes = good.into_changes().unwrap();
        assert_eq!(changes.people_num, Some(3));
        assert_eq!(changes.days.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_order_detail_serializes_populated_room_slot() {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            days: vec![NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()],
            people_num: 2,
            user_name: "Lin Mei".to_string(),
            user_phone: "0912345678".to_string(),
            user_email: "mei@example.com".to_string(),
            status: 1,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(order.with_room(None)).unwrap();
        assert!(value["roomId"].is_null());
        assert_eq!(value["days"][0], "2024-01-05");
        assert_eq!(value["userInfo"]["name"], "Lin Mei");
        assert_eq!(value["peopleNum"], 2);
    }
}
