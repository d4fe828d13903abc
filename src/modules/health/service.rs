use std::time::Duration;

use sqlx::PgPool;

pub struct HealthService;

impl HealthService {
    /// Pings the database with a hard 2 second bound so a dead or hung
    /// connection yields a prompt unhealthy verdict instead of a stalled
    /// probe.
    pub async fn check(db: &PgPool) -> anyhow::Result<()> {
        let ping = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(db);

        match tokio::time::timeout(Duration::from_secs(2), ping).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(anyhow::anyhow!("database ping timed out")),
        }
    }
}
