use crate::AppState;
use crate::config::{CafeConfig, DEFAULT_ALLOWED_ORIGINS};
use crate::database::{CafeRepository, ReservationRepository};
use crate::domain::{Cafe, DEFAULT_RESERVATION_STATUS, NewReservation, Reservation};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// --- Manual Mock: CafeRepository + ReservationRepository ---
// keeps the rows in plain vectors so router tests don't need sqlite.
// flip `failing` to make every call return an error, like a broken database would
#[derive(Clone)]
pub struct MockRepository {
    pub cafes: Arc<Mutex<Vec<Cafe>>>,
    pub reservations: Arc<Mutex<Vec<Reservation>>>,
    pub failing: bool,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            cafes: Arc::new(Mutex::new(Vec::new())),
            reservations: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            anyhow::bail!("mock database is unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl CafeRepository for MockRepository {
    async fn get_all_cafes(&self) -> Result<Vec<Cafe>> {
        self.check()?;
        Ok(self.cafes.lock().unwrap().clone())
    }

    async fn get_cafe_by_id(&self, id: i64) -> Result<Option<Cafe>> {
        self.check()?;
        let cafes = self.cafes.lock().unwrap();
        Ok(cafes.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl ReservationRepository for MockRepository {
    async fn get_all_reservations(&self) -> Result<Vec<Reservation>> {
        self.check()?;
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn create_reservation(&self, reservation: &NewReservation) -> Result<i64> {
        self.check()?;
        let mut reservations = self.reservations.lock().unwrap();
        let id = reservations.len() as i64 + 1;
        reservations.push(Reservation {
            id,
            user_id: reservation.user_id,
            cafe_id: reservation.cafe_id,
            date_time: reservation.date_time,
            number_of_guests: reservation.number_of_guests,
            status: DEFAULT_RESERVATION_STATUS.to_string(),
        });
        Ok(id)
    }
}

pub fn test_config(debug: bool) -> Arc<CafeConfig> {
    Arc::new(CafeConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        host: "127.0.0.1".into(),
        port: 5000,
        debug,
        seed_on_startup: true,
        allowed_origins: DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect(),
    })
}

pub fn mock_state(repo: MockRepository, debug: bool) -> AppState {
    let repo = Arc::new(repo);
    AppState {
        cafes: repo.clone(),
        reservations: repo,
        config: test_config(debug),
    }
}

pub fn mock_cafe(id: i64, name: &str) -> Cafe {
    Cafe {
        id,
        name: name.to_string(),
        address: "1 Test St".to_string(),
        description: None,
        rating: 4.0,
        image_url: None,
        open_hours: Some("8:00 AM - 5:00 PM".to_string()),
        available_tables: 2,
        distance: Some("0.1 km".to_string()),
    }
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
