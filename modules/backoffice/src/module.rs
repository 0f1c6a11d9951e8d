//! Back-office assembly: wires storage, domain services and routes

use crate::config::BackofficeConfig;
use crate::domain::mailer::LogMailer;
use crate::domain::{DirectoryService, IdentityService, InventoryService, OrdersService};
use crate::infra::pdf::PrintpdfRenderer;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmCategorieRepository, SeaOrmClientRepository, SeaOrmFournisseurRepository,
    SeaOrmInvoiceRepository, SeaOrmNotificationRepository, SeaOrmOrderRepository,
    SeaOrmPieceRepository, SeaOrmSaleRepository, SeaOrmStockRepository, SeaOrmUserRepository,
    SeaOrmVehiculeRepository,
};
use motorparts_auth::TokenService;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Back-office service bundle, one per process.
///
/// Handlers receive it as `Extension<Arc<Backoffice>>`.
pub struct Backoffice {
    pub identity: IdentityService,
    pub orders: OrdersService,
    pub inventory: InventoryService,
    pub directory: DirectoryService,
    pub config: BackofficeConfig,
}

impl Backoffice {
    /// Wire every domain service over SeaORM repositories.
    pub fn new(
        db: Arc<DatabaseConnection>,
        tokens: TokenService,
        config: BackofficeConfig,
    ) -> Self {
        // Repositories
        let users = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let orders = Arc::new(SeaOrmOrderRepository::new(db.clone()));
        let invoices = Arc::new(SeaOrmInvoiceRepository::new(db.clone()));
        let stocks = Arc::new(SeaOrmStockRepository::new(db.clone()));
        let sales = Arc::new(SeaOrmSaleRepository::new(db.clone()));
        let clients = Arc::new(SeaOrmClientRepository::new(db.clone()));
        let fournisseurs = Arc::new(SeaOrmFournisseurRepository::new(db.clone()));
        let vehicules = Arc::new(SeaOrmVehiculeRepository::new(db.clone()));
        let categories = Arc::new(SeaOrmCategorieRepository::new(db.clone()));
        let pieces = Arc::new(SeaOrmPieceRepository::new(db.clone()));
        let notifications = Arc::new(SeaOrmNotificationRepository::new(db));

        // Domain services
        let identity = IdentityService::new(
            users,
            Arc::new(tokens),
            Arc::new(LogMailer),
            config.frontend_url.clone(),
        );
        let orders = OrdersService::new(orders, invoices, Arc::new(PrintpdfRenderer::new()));
        let inventory = InventoryService::new(stocks, sales);
        let directory = DirectoryService::new(
            clients,
            fournisseurs,
            vehicules,
            categories,
            pieces,
            notifications,
        );

        Self {
            identity,
            orders,
            inventory,
            directory,
            config,
        }
    }

    /// Build the REST router with this bundle as shared state.
    pub fn router(self: Arc<Self>) -> axum::Router {
        crate::api::rest::routes::router(self)
    }

    /// Run pending schema migrations.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
        Migrator::up(db, None).await?;
        tracing::info!("back-office migrations completed");
        Ok(())
    }
}
