use crate::domain::models::room::NewRoom;
use crate::domain::ports::SchemaRepository;
use crate::error::AppError;
use tracing::info;

/// Brings the database to the expected shape. Safe to run on every start.
pub async fn initialize_schema(repo: &dyn SchemaRepository, seed_rooms: &[NewRoom]) -> Result<(), AppError> {
    repo.ensure_tables().await?;
    info!("Bookings and rooms tables are in place");

    if repo.has_column("bookings", "unique_code").await? {
        info!("unique_code column already exists");
    } else {
        repo.add_unique_code_column().await?;
        info!("unique_code column added successfully");
    }

    let existing = repo.count_rooms().await?;
    if existing > 0 {
        info!("Rooms table already holds {} rows, skipping seed", existing);
        return Ok(());
    }

    let inserted = repo.insert_rooms(seed_rooms).await?;
    info!("Seeded rooms table with {} rows", inserted);
    Ok(())
}
