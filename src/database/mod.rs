use crate::domain::{Cafe, NewReservation, NewUser, Reservation, User};
use anyhow::Result;
use async_trait::async_trait;

pub mod schema;
pub mod sqlite;

// repositories are shared between request handlers behind an Arc, sqlx::Pool is thread safe.
// handlers only ever see these traits; the sqlite specifics live in "sqlite.rs"
#[async_trait]
pub trait CafeRepository: Send + Sync {
    // storage order, no sorting
    async fn get_all_cafes(&self) -> Result<Vec<Cafe>>;
    async fn get_cafe_by_id(&self, id: i64) -> Result<Option<Cafe>>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn get_all_reservations(&self) -> Result<Vec<Reservation>>;

    // write operations
    // inserts with the default status, returns the new id
    async fn create_reservation(&self, reservation: &NewReservation) -> Result<i64>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    // write operations
    async fn create_user(&self, user: &NewUser) -> Result<i64>;
}
