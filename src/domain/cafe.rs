/// A venue that can be reserved. `distance` and `open_hours` are display
/// strings and are never computed or parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cafe {
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

#[derive(Debug, Clone, PartialEq)]
pub struct NewCafe {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub rating: f64,
    pub image_url: Option<String>,
    pub open_hours: Option<String>,
    pub available_tables: i64,
    pub distance: Option<String>,
}
