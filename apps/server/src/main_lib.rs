use std::sync::Arc;

use crate::config::Config;
use mindgrow_core::{
    goals::{GoalService, GoalServiceTrait},
    journal::{JournalService, JournalServiceTrait},
};
use mindgrow_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    journal::JournalRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub journal_service: Arc<dyn JournalServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository));

    let journal_repository = Arc::new(JournalRepository::new(pool, writer));
    let journal_service = Arc::new(JournalService::new(journal_repository));

    Ok(Arc::new(AppState {
        goal_service,
        journal_service,
    }))
}
