use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::hierarchy::dataset::Dataset;

/// Replace the hierarchy tables with the dataset content.
///
/// Runs in one transaction. Sequences are restarted so ids follow dataset
/// order, matching the in-memory store.
pub async fn seed_database(pool: &PgPool, dataset: &Dataset) -> Result<()> {
    let mut tx = pool.begin().await.map_err(|e| {
        tracing::error!("Failed to open seed transaction: {:?}", e);
        AppError::Database(e)
    })?;

    sqlx::query("TRUNCATE TABLE communes, departements, regions RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    for region in &dataset.regions {
        let region_id: i64 =
            sqlx::query_scalar("INSERT INTO regions (name, code) VALUES ($1, $2) RETURNING id")
                .bind(&region.name)
                .bind(&region.code)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert region '{}': {:?}", region.name, e);
                    AppError::Database(e)
                })?;

        for departement in &region.departements {
            let departement_id: i64 = sqlx::query_scalar(
                "INSERT INTO departements (name, region_id) VALUES ($1, $2) RETURNING id",
            )
            .bind(&departement.name)
            .bind(region_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert departement '{}': {:?}", departement.name, e);
                AppError::Database(e)
            })?;

            for commune in &departement.communes {
                sqlx::query(
                    r#"
                    INSERT INTO communes (name, departement_id, lat, lon, elevation)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(&commune.name)
                .bind(departement_id)
                .bind(commune.lat)
                .bind(commune.lon)
                .bind(commune.elevation)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert commune '{}': {:?}", commune.name, e);
                    AppError::Database(e)
                })?;
            }
        }
    }

    tx.commit().await?;

    tracing::info!(
        "Seeded {} regions, {} departements, {} communes",
        dataset.regions.len(),
        dataset.departement_count(),
        dataset.commune_count()
    );

    Ok(())
}
