//! Room records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pricing::RoomRates;

use super::{require_at_least, require_text, validate_image_urls};

/// Facility entry shown on the room page (e.g. "Wi-Fi", provided or not)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityItem {
    pub title: String,
    #[serde(default = "default_provided")]
    pub is_provide: bool,
}

fn default_provided() -> bool {
    true
}

/// Room from the rooms table
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url_list: Vec<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub area_info: Decimal,
    pub bed_info: String,
    pub max_people: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub check_in: String,
    pub check_out: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekday_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekend_price: Decimal,
    pub status: i16,
    #[sqlx(json)]
    pub facility_info: Vec<FacilityItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Rate profile used to price stays in this room
    pub fn rates(&self) -> RoomRates {
        RoomRates::new(self.weekday_price, self.weekend_price)
    }

    /// Listing entry: id, name and the first image (or an empty string)
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url_list.first().cloned().unwrap_or_default(),
        }
    }
}

/// Room listing entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
}

/// Request to create a room
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url_list: Vec<String>,
    pub area_info: Decimal,
    pub bed_info: String,
    pub max_people: i32,
    pub price: Decimal,
    pub check_in: String,
    pub check_out: String,
    pub weekday_price: Decimal,
    pub weekend_price: Decimal,
    #[serde(default)]
    pub facility_info: Vec<FacilityItem>,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)?;
        require_text("bedInfo", &self.bed_info)?;
        require_text("checkIn", &self.check_in)?;
        require_text("checkOut", &self.check_out)?;
        require_at_least("maxPeople", self.max_people, 1)?;
        validate_image_urls(&self.image_url_list)?;
        RoomRates::new(self.weekday_price, self.weekend_price).validate()?;
        Ok(())
    }
}

/// Request to update a room; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url_list: Option<Vec<String>>,
    pub area_info: Option<Decimal>,
    pub bed_info: Option<String>,
    pub max_people: Option<i32>,
    pub price: Option<Decimal>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub weekday_price: Option<Decimal>,
    pub weekend_price: Option<Decimal>,
    pub facility_info: Option<Vec<FacilityItem>>,
}

impl UpdateRoomRequest {
    pub fn validate(&self) -> Result<()> {
        let texts = [
            ("name", &self.name),
            ("description", &self.description),
            ("bedInfo", &self.bed_info),
            ("checkIn", &self.check_in),
            ("checkOut", &self.check_out),
        ];
        for (field, value) in texts {
            if let Some(value) = value {
                require_text(field, value)?;
            }
        }

        if let Some(max_people) = self.max_people {
            require_at_least("maxPeople", max_people, 1)?;
        }
        if let Some(urls) = &self.image_url_list {
            validate_image_urls(urls)?;
        }

        for (field, price) in [
            ("weekdayPrice", self.weekday_price),
            ("weekendPrice", self.weekend_price),
        ] {
            if matches!(price, Some(p) if p <= Decimal::ZERO) {
                return Err(AppError::Validation(format!("{} must be positive", field)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATUS_ACTIVE;
    use rust_decimal_macros::dec;

    fn create_request() -> CreateRoomRequest {
        CreateRoomRequest {
            name: "Deluxe Twin".to_string(),
            description: "Two single beds facing the garden".to_string(),
            image_url_list: vec!["https://images.example.com/deluxe-twin.png".to_string()],
            area_info: dec!(24.5),
            bed_info: "2 single beds".to_string(),
            max_people: 2,
            price: dec!(2800),
            check_in: "15:00".to_string(),
            check_out: "12:00".to_string(),
            weekday_price: dec!(2800),
            weekend_price: dec!(3400),
            facility_info: vec![],
        }
    }

    fn room() -> Room {
        let now = Utc::now();
        Room {
            id: Uuid::new_v4(),
            name: "Deluxe Twin".to_string(),
            description: "Two single beds facing the garden".to_string(),
            image_url_list: vec![
                "https://images.example.com/a.png".to_string(),
                "https://images.example.com/b.png".to_string(),
            ],
            area_info: dec!(24.5),
            bed_info: "2 single beds".to_string(),
            max_people: 2,
            price: dec!(2800),
            check_in: "15:00".to_string(),
            check_out: "12:00".to_string(),
            weekday_price: dec!(2800),
            weekend_price: dec!(3400),
            status: STATUS_ACTIVE,
            facility_info: vec![FacilityItem {
                title: "Wi-Fi".to_string(),
                is_provide: true,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_missing_name() {
        let mut req = create_request();
        req.name = " ".to_string();
        assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
    }

    #[test]
    fn test_create_request_rejects_zero_capacity_and_rates() {
        let mut req = create_request();
        req.max_people = 0;
        assert!(req.validate().is_err());

        let mut req = create_request();
        req.weekend_price = dec!(0);
        assert!(matches!(req.validate(), Err(AppError::Pricing(_))));
    }

    #[test]
    fn test_create_request_rejects_http_images() {
        let mut req = create_request();
        req.image_url_list = vec!["http://images.example.com/a.png".to_string()];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let req: CreateRoomRequest = serde_json::from_value(serde_json::json!({
            "name": "Deluxe Twin",
            "description": "Garden view",
            "imageUrlList": ["https://images.example.com/a.png"],
            "areaInfo": 24,
            "bedInfo": "2 single beds",
            "maxPeople": 2,
            "price": 2800,
            "checkIn": "15:00",
            "checkOut": "12:00",
            "weekdayPrice": "2800",
            "weekendPrice": 3400,
            "facilityInfo": [{ "title": "Wi-Fi" }]
        }))
        .unwrap();

        assert_eq!(req.weekday_price, dec!(2800));
        assert_eq!(req.weekend_price, dec!(3400));
        assert!(req.facility_info[0].is_provide);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        assert!(UpdateRoomRequest::default().validate().is_ok());

        let update = UpdateRoomRequest {
            weekday_price: Some(dec!(-5)),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateRoomRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_room_summary_uses_first_image() {
        let mut room = room();
        assert_eq!(room.summary().image_url, "https://images.example.com/a.png");

        room.image_url_list.clear();
        assert_eq!(room.summary().image_url, "");
    }

    #[test]
    fn test_room_serializes_with_underscore_id() {
        let room = room();
        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["_id"], room.id.to_string());
        assert_eq!(value["weekdayPrice"], "2800");
        assert_eq!(value["facilityInfo"][0]["isProvide"], true);
    }
}
