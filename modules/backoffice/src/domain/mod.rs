//! Domain layer - business logic and services

pub mod directory;
pub mod identity;
pub mod inventory;
pub mod invoice_doc;
pub mod mailer;
pub mod orders;
pub mod repository;
pub mod validation;

pub use directory::DirectoryService;
pub use identity::IdentityService;
pub use inventory::InventoryService;
pub use invoice_doc::{build_document, InvoiceDocument, InvoiceRenderer, RenderedInvoice};
pub use mailer::{LogMailer, Mailer};
pub use orders::OrdersService;
pub use repository::{
    CategorieRepository, ClientRepository, DetailRecord, FournisseurRepository, InvoiceRepository,
    NotificationRepository, OrderRepository, PieceRepository, SaleRepository, StockRepository,
    UserRecord, UserRepository, VehiculeRepository, VenteRecord,
};
