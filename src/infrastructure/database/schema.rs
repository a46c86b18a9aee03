//! Schema bootstrap
//!
//! Creates the billing tables from the entity definitions when they are
//! absent. Existing tables are left untouched; there is no versioning.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::{debug, info};

use super::entities::{bill, consumer, payment};

/// Create `consumers`, `bills` and `payments` if they do not exist yet.
///
/// Parents are created before children so foreign keys resolve.
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, consumer::Entity).await?;
    create_table(db, &schema, bill::Entity).await?;
    create_table(db, &schema, payment::Entity).await?;

    info!("Database schema ready");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_string();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(db.get_database_backend().build(&stmt)).await?;
    debug!(table = %table, "Table ensured");
    Ok(())
}
