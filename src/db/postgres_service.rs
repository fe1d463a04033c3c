use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self {
            database_connection,
        })
    }
}
