use crate::database::schema::{CREATE_TABLES, DROP_TABLES};
use crate::database::{CafeRepository, ReservationRepository, UserRepository};
use crate::domain::{
    Cafe, DEFAULT_RESERVATION_STATUS, NewCafe, NewReservation, NewUser, Reservation, User,
};
use crate::features::cafes::model::DbCafe;
use crate::features::reservations::model::DbReservation;
use crate::features::users::model::DbUser;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

const SELECT_CAFES: &str = r#"
    SELECT id, name, address, description, rating, image_url, open_hours, available_tables, distance
    FROM cafe
"#;

const SELECT_RESERVATIONS: &str = r#"
    SELECT id, user_id, cafe_id, date_time, number_of_guests, status
    FROM reservation
"#;

const INSERT_CAFE: &str = r#"
    INSERT INTO cafe (
        name, address, description, rating, image_url, open_hours, available_tables, distance
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Opens a pool on `database_url`.
///
/// Foreign key enforcement is switched off for every connection: reservations
/// may reference users or cafes that do not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to create pool on {}", database_url))
}

#[derive(Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Drops every table and creates them again, empty.
    pub async fn reset_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for statement in DROP_TABLES.iter().chain(CREATE_TABLES.iter()) {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .context("Failed to reset schema")?;
        }

        tx.commit().await.context("Failed to commit schema reset")?;
        Ok(())
    }

    /// Creates any missing table, keeps existing rows.
    pub async fn ensure_schema(&self) -> Result<()> {
        for statement in CREATE_TABLES {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to create schema")?;
        }

        Ok(())
    }

    // all or nothing
    pub async fn insert_cafes(&self, cafes: &[NewCafe]) -> Result<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(cafes.len());

        for cafe in cafes {
            let id = bind_cafe(sqlx::query(INSERT_CAFE), cafe)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Failed to insert cafe {}", cafe.name))?
                .last_insert_rowid();
            ids.push(id);
        }

        tx.commit().await.context("Failed to commit cafe inserts")?;
        Ok(ids)
    }
}

fn bind_cafe<'q>(
    query: sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    cafe: &'q NewCafe,
) -> sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(&cafe.name)
        .bind(&cafe.address)
        .bind(&cafe.description)
        .bind(cafe.rating)
        .bind(&cafe.image_url)
        .bind(&cafe.open_hours)
        .bind(cafe.available_tables)
        .bind(&cafe.distance)
}

#[async_trait]
impl CafeRepository for SqliteRepository {
    async fn get_all_cafes(&self) -> Result<Vec<Cafe>> {
        let db_cafes = sqlx::query_as::<_, DbCafe>(SELECT_CAFES)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load cafes")?;

        Ok(db_cafes.into_iter().map(Cafe::from).collect())
    }

    async fn get_cafe_by_id(&self, id: i64) -> Result<Option<Cafe>> {
        let db_cafe_opt = sqlx::query_as::<_, DbCafe>(&format!("{} WHERE id = ?", SELECT_CAFES))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load cafe {}", id))?;

        Ok(db_cafe_opt.map(Cafe::from))
    }
}

#[async_trait]
impl ReservationRepository for SqliteRepository {
    async fn get_all_reservations(&self) -> Result<Vec<Reservation>> {
        let db_reservations = sqlx::query_as::<_, DbReservation>(SELECT_RESERVATIONS)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load reservations")?;

        Ok(db_reservations.into_iter().map(Reservation::from).collect())
    }

    async fn create_reservation(&self, reservation: &NewReservation) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservation (user_id, cafe_id, date_time, number_of_guests, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(reservation.user_id)
        .bind(reservation.cafe_id)
        .bind(reservation.date_time)
        .bind(reservation.number_of_guests)
        .bind(DEFAULT_RESERVATION_STATUS)
        .execute(&self.pool)
        .await
        .with_context(|| {
            format!(
                "Failed to create reservation for user {} at cafe {}",
                reservation.user_id, reservation.cafe_id
            )
        })?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let db_user_opt = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, email, password, name, created_at FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load user {}", id))?;

        match db_user_opt {
            Some(db_user) => Ok(Some(db_user.try_into()?)),
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        let result = sqlx::query(r#"INSERT INTO "user" (email, password, name) VALUES (?, ?, ?)"#)
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to create user {}", user.email))?;

        Ok(result.last_insert_rowid())
    }
}
