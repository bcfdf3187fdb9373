// src/db.rs
use crate::{config::Config, error::AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration; // Usar std::time::Duration aqui

pub async fn create_db_pool(config: &Config) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);
    let pool = connect(&config.database_url, config.db_max_connections).await?;

    tracing::info!("Executando migrações da base de dados...");
    migrate(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Abre o pool sem executar migrações.
pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Executa os ficheiros SQL de ./migrations (embutidos no binário)
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    // Base em memória: uma única conexão, senão cada conexão vê outra base
    let pool = connect("sqlite::memory:", 1)
        .await
        .expect("falha ao abrir sqlite em memória");
    migrate(&pool).await.expect("falha nas migrações");
    pool
}
