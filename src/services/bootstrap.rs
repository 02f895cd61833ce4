use crate::database::sqlite::SqliteRepository;
use crate::domain::NewCafe;
use anyhow::{Context, Result};

/// Prepares the store for serving.
///
/// With `reseed` the whole schema is dropped and rebuilt, then the sample
/// cafes are inserted, so nothing survives a restart. Without it the tables
/// are only created when missing.
pub async fn bootstrap_store(repo: &SqliteRepository, reseed: bool) -> Result<()> {
    if !reseed {
        repo.ensure_schema().await?;
        tracing::info!("Schema ready, keeping existing rows.");
        return Ok(());
    }

    repo.reset_schema().await?;
    tracing::warn!("Dropped and recreated all tables.");

    let ids = repo
        .insert_cafes(&sample_cafes())
        .await
        .context("Failed to seed sample cafes")?;

    tracing::info!(count = ids.len(), "Seeded sample cafes.");
    Ok(())
}

pub fn sample_cafes() -> Vec<NewCafe> {
    vec![
        NewCafe {
            name: "Fairgrounds Coffee and Tea".to_string(),
            address: "5500 S. University Ave".to_string(),
            description: Some("A cozy cafe with a great selection of coffee and tea".to_string()),
            rating: 4.7,
            image_url: Some(
                "https://images.unsplash.com/photo-1445116572660-236099ec97a0?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80"
                    .to_string(),
            ),
            open_hours: Some("7:00 AM - 7:00 PM".to_string()),
            available_tables: 4,
            distance: Some("0.5 km".to_string()),
        },
        NewCafe {
            name: "Hallowed Grounds".to_string(),
            address: "1234 W. 57th St".to_string(),
            description: Some("A popular spot for students and locals".to_string()),
            rating: 4.9,
            image_url: Some(
                "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80"
                    .to_string(),
            ),
            open_hours: Some("6:30 AM - 8:30 PM".to_string()),
            available_tables: 6,
            distance: Some("1.2 km".to_string()),
        },
        NewCafe {
            name: "Plein Air Cafe".to_string(),
            address: "5751 S. Ellis Ave".to_string(),
            description: Some("A charming cafe with outdoor seating".to_string()),
            rating: 4.5,
            image_url: Some(
                "https://images.unsplash.com/photo-1511920170033-f8396924c348?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80"
                    .to_string(),
            ),
            open_hours: Some("6:00 AM - 9:00 PM".to_string()),
            available_tables: 3,
            distance: Some("0.8 km".to_string()),
        },
    ]
}
