use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use models::{employee::Employee, user::User};
use sea_orm::DatabaseConnection;
use service::repo::{MongoRepository, SeaOrmBookRepository, SeaOrmStockRepository};
use tracing::info;

use crate::routes;

/// The independent services this workspace can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Bookstore,
    Stocks,
    Hrms,
    Users,
    StaticSite,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Bookstore => "bookstore",
            ServiceKind::Stocks => "stock-api",
            ServiceKind::Hrms => "hrms",
            ServiceKind::Users => "user-api",
            ServiceKind::StaticSite => "static-site",
        }
    }

    /// Used when neither the config file nor `SERVER_PORT` sets a port.
    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Bookstore => 9010,
            ServiceKind::Stocks => 8080,
            ServiceKind::Hrms => 3000,
            ServiceKind::Users => 9000,
            ServiceKind::StaticSite => 8080,
        }
    }

    fn default_mongo_db(self) -> &'static str {
        match self {
            ServiceKind::Users => "mongo-golang",
            _ => "fiber-hrms",
        }
    }
}

pub fn bind_addr(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let port = cfg.server.port.unwrap_or_else(|| kind.default_port());
    Ok(format!("{}:{}", cfg.server.host, port).parse()?)
}

async fn relational(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.database.validate()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }
    Ok(db)
}

async fn document(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<mongodb::Database> {
    cfg.mongo.validate()?;
    Ok(models::mongo::connect(&cfg.mongo, kind.default_mongo_db()).await?)
}

/// Open the service's store and build its router.
pub async fn build_app(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<Router> {
    let app = match kind {
        ServiceKind::Bookstore => {
            let db = relational(cfg).await?;
            routes::bookstore(Arc::new(SeaOrmBookRepository::new(db)))
        }
        ServiceKind::Stocks => {
            let db = relational(cfg).await?;
            routes::stocks(Arc::new(SeaOrmStockRepository::new(db)))
        }
        ServiceKind::Hrms => {
            let db = document(kind, cfg).await?;
            routes::employees(Arc::new(MongoRepository::<Employee>::new(&db)))
        }
        ServiceKind::Users => {
            let db = document(kind, cfg).await?;
            routes::users(Arc::new(MongoRepository::<User>::new(&db)))
        }
        ServiceKind::StaticSite => {
            common::env::check_static_dir(&cfg.site.static_dir).await;
            routes::static_site(&cfg.site.static_dir)
        }
    };
    Ok(app)
}

/// Build the app, bind, and serve until `shutdown` resolves.
pub async fn run<F>(kind: ServiceKind, cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(kind, &cfg).await?;
    let addr = bind_addr(kind, &cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = kind.name(), %addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
