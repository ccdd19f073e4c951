//! Health service

use std::time::Duration;

use atrium_db::PoolStats;
use chrono::Utc;
use tracing::{error, instrument};

use crate::dto::{DatabaseHealth, HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

const PING_TIMEOUT: Duration = Duration::from_secs(1);

/// Open connections above which the database is reported as loaded
const HEAVY_LOAD_CONNECTIONS: u32 = 40;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn ping(&self) -> Result<(), String> {
        match tokio::time::timeout(PING_TIMEOUT, atrium_db::ping(self.ctx.pool())).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err("ping timed out".to_string()),
        }
    }

    /// Ping the database and report pool statistics
    #[instrument(skip(self))]
    pub async fn health(&self) -> HealthResponse {
        let stats = atrium_db::pool_stats(self.ctx.pool());
        let database = match self.ping().await {
            Ok(()) => database_up(stats),
            Err(e) => {
                error!(error = %e, "Database health check failed");
                database_down(stats, &e)
            }
        };

        HealthResponse {
            status: if database.is_up() { "ok" } else { "degraded" }.to_string(),
            timestamp: Utc::now(),
            database,
        }
    }

    /// Whether the service can take traffic
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        ReadinessResponse::ready(self.ping().await.is_ok())
    }
}

fn database_up(stats: PoolStats) -> DatabaseHealth {
    let message = if stats.open_connections > HEAVY_LOAD_CONNECTIONS {
        "The database is experiencing heavy load."
    } else {
        "It's healthy"
    };

    with_stats(
        DatabaseHealth {
            status: "up".to_string(),
            message: Some(message.to_string()),
            error: None,
            open_connections: 0,
            in_use: 0,
            idle: 0,
            max_connections: 0,
        },
        stats,
    )
}

fn database_down(stats: PoolStats, reason: &str) -> DatabaseHealth {
    with_stats(
        DatabaseHealth {
            status: "down".to_string(),
            message: None,
            error: Some(format!("db down: {reason}")),
            open_connections: 0,
            in_use: 0,
            idle: 0,
            max_connections: 0,
        },
        stats,
    )
}

fn with_stats(mut health: DatabaseHealth, stats: PoolStats) -> DatabaseHealth {
    let idle = u32::try_from(stats.idle_connections).unwrap_or(u32::MAX);
    health.open_connections = stats.open_connections;
    health.idle = idle;
    health.in_use = stats.open_connections.saturating_sub(idle);
    health.max_connections = stats.max_connections;
    health
}
