//! Database connection pool management

mod postgres;

pub use postgres::{
    connect_lazy, create_pool, ping, pool_stats, run_migrations, DatabaseConfig, PoolStats,
};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
