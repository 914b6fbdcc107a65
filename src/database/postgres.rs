use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// The five parameters needed to reach the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postgres {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub db: String,
}

impl Postgres {
    pub fn config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .user(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port)
            .dbname(&self.db);
        config
    }

    /// Establishes a database connection.
    ///
    /// Spawns the connection future onto the current runtime and returns an
    /// `Arc<Client>` that is reused for every subsequent operation.
    pub async fn connect(&self) -> anyhow::Result<Arc<Client>> {
        log::info!("connecting to {}", self);
        let tls = tokio_postgres::tls::NoTls;
        let (client, connection) = self
            .config()
            .connect(tls)
            .await
            .with_context(|| format!("connect to {}", self))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("database connection closed: {}", e);
            }
        });
        client
            .batch_execute("SET client_min_messages TO WARNING")
            .await
            .context("set client_min_messages")?;
        Ok(Arc::new(client))
    }
}

/// Connection URL with the password redacted.
impl std::fmt::Display for Postgres {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "postgresql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.db
        )
    }
}
