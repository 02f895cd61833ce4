use crate::domain::Cafe;
use serde::{Deserialize, Serialize};

// nullable columns stay Option here, defaults are applied on the way into `Cafe`
#[derive(sqlx::FromRow, PartialEq, Clone, Debug)]
pub struct DbCafe {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub open_hours: Option<String>,
    pub available_tables: Option<i64>,
    pub distance: Option<String>,
}

/// Wire shape for both `GET /api/cafes` and `GET /api/cafes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonCafe {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub rating: f64,
    pub image_url: Option<String>,
    pub open_hours: Option<String>,
    pub available_tables: i64,
    pub distance: Option<String>,
}

impl From<DbCafe> for Cafe {
    fn from(db_cafe: DbCafe) -> Self {
        Cafe {
            id: db_cafe.id,
            name: db_cafe.name,
            address: db_cafe.address,
            description: db_cafe.description,
            rating: db_cafe.rating.unwrap_or(0.0),
            image_url: db_cafe.image_url,
            open_hours: db_cafe.open_hours,
            available_tables: db_cafe.available_tables.unwrap_or(0),
            distance: db_cafe.distance,
        }
    }
}

impl From<&Cafe> for JsonCafe {
    fn from(cafe: &Cafe) -> Self {
        JsonCafe {
            id: cafe.id,
            name: cafe.name.to_owned(),
            address: cafe.address.to_owned(),
            description: cafe.description.to_owned(),
            rating: cafe.rating,
            image_url: cafe.image_url.to_owned(),
            open_hours: cafe.open_hours.to_owned(),
            available_tables: cafe.available_tables,
            distance: cafe.distance.to_owned(),
        }
    }
}
