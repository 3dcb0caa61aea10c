use crate::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;

/// Credentials and database name for [`MySqlServer`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct MySqlConfig {
    #[builder(default = "roster".to_string())]
    database: String,
    #[builder(default = "roster".to_string())]
    username: String,
    #[builder(default = "roster".to_string())]
    password: String,
    #[builder(default = "8.4".to_string())]
    tag: String,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Test fixture for a disposable MySQL server.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
    config: MySqlConfig,
}

impl MySqlServer {
    /// Starts a MySQL container with the default credentials.
    pub async fn start() -> Result<Self> {
        Self::with_config(MySqlConfig::default()).await
    }

    /// Starts a MySQL container suitable for integration tests.
    ///
    /// The log line waited on is printed before the server accepts TCP
    /// clients, so callers should still retry their first connection.
    pub async fn with_config(config: MySqlConfig) -> Result<Self> {
        let container = GenericImage::new("mysql", config.tag.as_str())
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container, config })
    }

    /// Connection string in the form accepted by `sqlx`.
    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            self.config.username, self.config.password, host, port, self.config.database
        ))
    }
}
