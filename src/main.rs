use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use cycle_assessment::adapters::http::api_router;
use cycle_assessment::adapters::{
    HttpAssessmentRepository, HttpPersistenceConfig, InMemoryAssessmentRepository,
    InMemorySessionStore,
};
use cycle_assessment::config::{AppConfig, ConfigError, PersistenceBackend, ValidationError};
use cycle_assessment::domain::assessment::{BoundaryTableError, Classifier, PersistenceError};
use cycle_assessment::ports::AssessmentRepository;
use cycle_assessment::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("failed to load boundary table: {0}")]
    Boundaries(#[from] BoundaryTableError),

    #[error("failed to build persistence client: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(error: ValidationError) -> Self {
        StartupError::Config(ConfigError::ValidationFailed(error))
    }
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.server)?;

    let classifier = Arc::new(Classifier::new(config.classifier.boundary_table()?));
    let store = Arc::new(InMemorySessionStore::with_ttl(config.session.ttl()));

    let repository: Arc<dyn AssessmentRepository> = match config.persistence.backend {
        PersistenceBackend::Memory => Arc::new(InMemoryAssessmentRepository::new()),
        PersistenceBackend::Http => {
            let base_url = config.persistence.base_url.clone().unwrap_or_default();
            let token = config.persistence.api_token.clone().unwrap_or_default();
            let http_config = HttpPersistenceConfig::new(base_url, token)
                .with_timeout(config.persistence.timeout());
            Arc::new(HttpAssessmentRepository::new(http_config, classifier.clone())?)
        }
    };

    let app = api_router(store, repository, classifier);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        environment = ?config.server.environment,
        backend = ?config.persistence.backend,
        session_ttl_secs = config.session.ttl_secs,
        %addr,
        "cycle assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
