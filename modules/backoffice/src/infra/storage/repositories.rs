//! SeaORM repository implementations
//!
//! Write paths inspect [`DbErr::sql_err`] so unique and foreign-key
//! violations come back as typed domain errors instead of 500s. The
//! order-line and sale methods wrap their statements in a transaction;
//! see the trait docs in `domain::repository` for the contracts.

use crate::contract::{
    Categorie, Client, Commande, DetailCommande, DetailView, DomainError, Facture, Fournisseur,
    Notification, OrderSearch, OrderStatus, OrderView, Piece, PieceView, SaleStatus, Stock,
    StockView, User, Vehicule, Vente, VenteView,
};
use crate::domain::repository::{
    CategorieRepository, ClientRepository, DetailRecord, FournisseurRepository, InvoiceRepository,
    NotificationRepository, OrderRepository, PieceRepository, SaleRepository, StockRepository,
    UserRecord, UserRepository, VehiculeRepository, VenteRecord,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, Condition,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, IntoActiveModel,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, SqlErr,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;

use super::entity;
use super::mapper::corrupt;

fn internal(err: DbErr) -> DomainError {
    error!(error = %err, "database error");
    DomainError::Internal
}

/// Maps a write failure whose only expected conflict is a foreign key.
fn fk_err(err: DbErr, relation: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::ForeignKey {
            constraint: relation.to_string(),
        },
        _ => internal(err),
    }
}

/// Maps a write failure that can hit a unique index.
fn unique_err(err: DbErr, field: &str, value: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Duplicate {
            field: field.to_string(),
            value: value.to_string(),
        },
        _ => internal(err),
    }
}

/// Maps a write failure that can hit a unique index or a foreign key.
fn unique_or_fk_err(err: DbErr, field: &str, value: &str, relation: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Duplicate {
            field: field.to_string(),
            value: value.to_string(),
        },
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::ForeignKey {
            constraint: relation.to_string(),
        },
        _ => internal(err),
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: &UserRecord) -> Result<User, DomainError> {
        let active = entity::users::ActiveModel {
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_string()),
            avatar: Set(None),
            reset_token_hash: Set(None),
            reset_expires_at: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| unique_err(e, "email", &user.email))?
            .try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        entity::users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        entity::users::Entity::find()
            .filter(entity::users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let active: entity::users::ActiveModel = user.into();

        entity::users::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("user", user.id),
                e => unique_err(e, "email", &user.email),
            })?
            .try_into()
    }

    async fn find_by_valid_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError> {
        entity::users::Entity::find()
            .filter(entity::users::Column::ResetTokenHash.eq(token_hash))
            .filter(entity::users::Column::ResetExpiresAt.gt(now))
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }
}

// ===== Order Repository =====

pub struct SeaOrmOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct OrderViewRow {
    id: i32,
    client_id: i32,
    user_id: i32,
    statut: String,
    montant: Decimal,
    created_at: DateTime<Utc>,
    client_nom: String,
    user_first_name: String,
    user_last_name: String,
}

impl TryFrom<OrderViewRow> for OrderView {
    type Error = DomainError;

    fn try_from(row: OrderViewRow) -> Result<Self, Self::Error> {
        let statut = OrderStatus::parse(&row.statut)
            .ok_or_else(|| corrupt("commandes", row.id, "statut", &row.statut))?;

        Ok(Self {
            id: row.id,
            client_id: row.client_id,
            client_nom: row.client_nom,
            user_id: row.user_id,
            user_nom: format!("{} {}", row.user_first_name, row.user_last_name),
            statut,
            montant: row.montant,
            created_at: row.created_at,
        })
    }
}

/// Base select for order views: order columns plus the client name and
/// the recording user's name, newest first.
fn order_view_select() -> Select<entity::commandes::Entity> {
    entity::commandes::Entity::find()
        .column_as(entity::clients::Column::Nom, "client_nom")
        .column_as(entity::users::Column::FirstName, "user_first_name")
        .column_as(entity::users::Column::LastName, "user_last_name")
        .join(JoinType::InnerJoin, entity::commandes::Relation::Client.def())
        .join(JoinType::InnerJoin, entity::commandes::Relation::User.def())
        .order_by_desc(entity::commandes::Column::CreatedAt)
}

#[derive(FromQueryResult)]
struct DetailViewRow {
    id: i32,
    commande_id: i32,
    piece_id: i32,
    quantity: i32,
    price: Decimal,
    piece_nom: String,
}

impl From<DetailViewRow> for DetailView {
    fn from(row: DetailViewRow) -> Self {
        Self {
            id: row.id,
            commande_id: row.commande_id,
            piece_id: row.piece_id,
            piece_nom: row.piece_nom,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Locks the parent order row for the duration of the transaction.
/// Concurrent line mutations on the same order serialize here.
async fn lock_order(
    txn: &DatabaseTransaction,
    commande_id: i32,
) -> Result<entity::commandes::Model, DomainError> {
    entity::commandes::Entity::find_by_id(commande_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(internal)?
        .ok_or_else(|| DomainError::not_found("commande", commande_id))
}

/// Recomputes the order total as the full sum over its current lines
/// and writes it back. Never applies a delta.
async fn recompute_total(
    txn: &DatabaseTransaction,
    commande_id: i32,
) -> Result<Decimal, DomainError> {
    let lines = entity::details_commande::Entity::find()
        .filter(entity::details_commande::Column::CommandeId.eq(commande_id))
        .all(txn)
        .await
        .map_err(internal)?;

    let total: Decimal = lines
        .iter()
        .map(|line| Decimal::from(line.quantity) * line.price)
        .sum();
    let total = total.round_dp(2);

    entity::commandes::Entity::update_many()
        .col_expr(entity::commandes::Column::Montant, Expr::value(total))
        .filter(entity::commandes::Column::Id.eq(commande_id))
        .exec(txn)
        .await
        .map_err(internal)?;

    Ok(total)
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, client_id: i32, user_id: i32) -> Result<Commande, DomainError> {
        let active = entity::commandes::ActiveModel {
            client_id: Set(client_id),
            user_id: Set(user_id),
            statut: Set(OrderStatus::EnAttente.as_str().to_string()),
            montant: Set(Decimal::ZERO),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| fk_err(e, "commandes.client_id / commandes.user_id"))?
            .try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Commande>, DomainError> {
        entity::commandes::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }

    async fn find_view(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        order_view_select()
            .filter(entity::commandes::Column::Id.eq(id))
            .into_model::<OrderViewRow>()
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|row| row.try_into())
            .transpose()
    }

    async fn list_views(&self) -> Result<Vec<OrderView>, DomainError> {
        order_view_select()
            .into_model::<OrderViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|row| row.try_into())
            .collect()
    }

    async fn search(&self, filter: &OrderSearch) -> Result<Vec<OrderView>, DomainError> {
        let mut query = order_view_select();

        if let Some(q) = &filter.query {
            query = query.filter(entity::clients::Column::Nom.contains(q));
        }
        if let Some(statut) = filter.statut {
            query = query.filter(entity::commandes::Column::Statut.eq(statut.as_str()));
        }
        if let Some(debut) = filter.date_debut {
            let start = debut.and_time(NaiveTime::MIN).and_utc();
            query = query.filter(entity::commandes::Column::CreatedAt.gte(start));
        }
        if let Some(end) = filter.date_fin.and_then(|d| d.succ_opt()) {
            // Inclusive upper bound: strictly before the next day's start
            let end = end.and_time(NaiveTime::MIN).and_utc();
            query = query.filter(entity::commandes::Column::CreatedAt.lt(end));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::commandes::Column::ClientId.eq(client_id));
        }

        query
            .into_model::<OrderViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|row| row.try_into())
            .collect()
    }

    async fn update(&self, order: &Commande) -> Result<Commande, DomainError> {
        let active = entity::commandes::ActiveModel {
            id: Set(order.id),
            client_id: Set(order.client_id),
            user_id: Set(order.user_id),
            statut: Set(order.statut.as_str().to_string()),
            montant: Set(order.montant),
            created_at: Set(order.created_at),
        };

        entity::commandes::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("commande", order.id),
                e => fk_err(e, "commandes.client_id / commandes.user_id"),
            })?
            .try_into()
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::commandes::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| fk_err(e, "factures.commande_id"))?;

        Ok(res.rows_affected > 0)
    }

    async fn list_lines(&self, commande_id: i32) -> Result<Vec<DetailView>, DomainError> {
        let rows = entity::details_commande::Entity::find()
            .column_as(entity::pieces::Column::Nom, "piece_nom")
            .join(
                JoinType::InnerJoin,
                entity::details_commande::Relation::Piece.def(),
            )
            .filter(entity::details_commande::Column::CommandeId.eq(commande_id))
            .order_by_asc(entity::details_commande::Column::Id)
            .into_model::<DetailViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    async fn find_line(&self, line_id: i32) -> Result<Option<DetailCommande>, DomainError> {
        let row = entity::details_commande::Entity::find_by_id(line_id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn add_line(
        &self,
        line: &DetailRecord,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        let txn = self.db.begin().await.map_err(internal)?;

        lock_order(&txn, line.commande_id).await?;

        let active = entity::details_commande::ActiveModel {
            commande_id: Set(line.commande_id),
            piece_id: Set(line.piece_id),
            quantity: Set(line.quantity),
            price: Set(line.price),
            ..Default::default()
        };
        let created = active
            .insert(&txn)
            .await
            .map_err(|e| fk_err(e, "details_commande.piece_id"))?;

        let total = recompute_total(&txn, line.commande_id).await?;
        txn.commit().await.map_err(internal)?;

        Ok((created.into(), total))
    }

    async fn update_line(
        &self,
        line_id: i32,
        piece_id: i32,
        quantity: i32,
        price: Decimal,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        let txn = self.db.begin().await.map_err(internal)?;

        let existing = entity::details_commande::Entity::find_by_id(line_id)
            .one(&txn)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::not_found("detail", line_id))?;
        let commande_id = existing.commande_id;

        lock_order(&txn, commande_id).await?;

        let mut active = existing.into_active_model();
        active.piece_id = Set(piece_id);
        active.quantity = Set(quantity);
        active.price = Set(price);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| fk_err(e, "details_commande.piece_id"))?;

        let total = recompute_total(&txn, commande_id).await?;
        txn.commit().await.map_err(internal)?;

        Ok((updated.into(), total))
    }

    async fn delete_line(&self, line_id: i32) -> Result<Decimal, DomainError> {
        let txn = self.db.begin().await.map_err(internal)?;

        // Capture the parent id before the row disappears
        let existing = entity::details_commande::Entity::find_by_id(line_id)
            .one(&txn)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::not_found("detail", line_id))?;
        let commande_id = existing.commande_id;

        lock_order(&txn, commande_id).await?;

        entity::details_commande::Entity::delete_by_id(line_id)
            .exec(&txn)
            .await
            .map_err(internal)?;

        let total = recompute_total(&txn, commande_id).await?;
        txn.commit().await.map_err(internal)?;

        Ok(total)
    }
}

// ===== Invoice Repository =====

pub struct SeaOrmInvoiceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn create(&self, commande_id: i32, total: Decimal) -> Result<Facture, DomainError> {
        let active = entity::factures::ActiveModel {
            commande_id: Set(commande_id),
            total: Set(total),
            date_facture: Set(Utc::now()),
            ..Default::default()
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| fk_err(e, "factures.commande_id"))?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Facture>, DomainError> {
        let row = entity::factures::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list(&self) -> Result<Vec<Facture>, DomainError> {
        let rows = entity::factures::Entity::find()
            .order_by_desc(entity::factures::Column::DateFacture)
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::factures::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Stock Repository =====

pub struct SeaOrmStockRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStockRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct StockViewRow {
    id: i32,
    piece_id: i32,
    quantity: i32,
    piece_nom: String,
}

#[async_trait]
impl StockRepository for SeaOrmStockRepository {
    async fn create(&self, piece_id: i32, quantity: i32) -> Result<Stock, DomainError> {
        let active = entity::stocks::ActiveModel {
            piece_id: Set(piece_id),
            quantity: Set(quantity),
            ..Default::default()
        };

        let model = active.insert(&*self.db).await.map_err(|e| {
            unique_or_fk_err(e, "piece_id", &piece_id.to_string(), "stocks.piece_id")
        })?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Stock>, DomainError> {
        let row = entity::stocks::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn find_by_piece(&self, piece_id: i32) -> Result<Option<Stock>, DomainError> {
        let row = entity::stocks::Entity::find()
            .filter(entity::stocks::Column::PieceId.eq(piece_id))
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list(&self) -> Result<Vec<StockView>, DomainError> {
        let rows = entity::stocks::Entity::find()
            .column_as(entity::pieces::Column::Nom, "piece_nom")
            .join(JoinType::InnerJoin, entity::stocks::Relation::Piece.def())
            .order_by_asc(entity::stocks::Column::Id)
            .into_model::<StockViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows
            .into_iter()
            .map(|row| StockView {
                id: row.id,
                piece_id: row.piece_id,
                piece_nom: row.piece_nom,
                quantity: row.quantity,
            })
            .collect())
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> Result<Option<Stock>, DomainError> {
        let Some(existing) = entity::stocks::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.quantity = Set(quantity);
        let updated = active.update(&*self.db).await.map_err(internal)?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::stocks::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Sale Repository =====

pub struct SeaOrmSaleRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSaleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct VenteViewRow {
    id: i32,
    piece_id: i32,
    client_id: i32,
    quantity: i32,
    unit_price: Decimal,
    discount: Decimal,
    total: Decimal,
    statut: String,
    notes: Option<String>,
    date_vente: DateTime<Utc>,
    piece_nom: String,
    client_nom: String,
}

impl TryFrom<VenteViewRow> for VenteView {
    type Error = DomainError;

    fn try_from(row: VenteViewRow) -> Result<Self, Self::Error> {
        let statut = SaleStatus::parse(&row.statut)
            .ok_or_else(|| corrupt("ventes", row.id, "statut", &row.statut))?;

        Ok(Self {
            id: row.id,
            piece_id: row.piece_id,
            piece_nom: row.piece_nom,
            client_id: row.client_id,
            client_nom: row.client_nom,
            quantity: row.quantity,
            unit_price: row.unit_price,
            discount: row.discount,
            total: row.total,
            statut,
            notes: row.notes,
            date_vente: row.date_vente,
        })
    }
}

#[async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn create_with_stock_decrement(
        &self,
        sale: &VenteRecord,
    ) -> Result<Vente, DomainError> {
        let txn = self.db.begin().await.map_err(internal)?;

        let active = entity::ventes::ActiveModel {
            piece_id: Set(sale.piece_id),
            client_id: Set(sale.client_id),
            quantity: Set(sale.quantity),
            unit_price: Set(sale.unit_price),
            discount: Set(sale.discount),
            total: Set(sale.total),
            statut: Set(SaleStatus::Completed.as_str().to_string()),
            notes: Set(sale.notes.clone()),
            date_vente: Set(Utc::now()),
            ..Default::default()
        };
        let created = active
            .insert(&txn)
            .await
            .map_err(|e| fk_err(e, "ventes.piece_id / ventes.client_id"))?;

        // The availability check lives in the UPDATE predicate; zero
        // affected rows means the stock row is missing or too low.
        let res = entity::stocks::Entity::update_many()
            .col_expr(
                entity::stocks::Column::Quantity,
                Expr::col(entity::stocks::Column::Quantity).sub(sale.quantity),
            )
            .filter(entity::stocks::Column::PieceId.eq(sale.piece_id))
            .filter(entity::stocks::Column::Quantity.gte(sale.quantity))
            .exec(&txn)
            .await
            .map_err(internal)?;

        if res.rows_affected == 0 {
            txn.rollback().await.map_err(internal)?;

            let available = entity::stocks::Entity::find()
                .filter(entity::stocks::Column::PieceId.eq(sale.piece_id))
                .one(&*self.db)
                .await
                .map_err(internal)?
                .map(|s| s.quantity)
                .unwrap_or(0);

            return Err(DomainError::InsufficientStock {
                piece_id: sale.piece_id,
                requested: sale.quantity,
                available,
            });
        }

        txn.commit().await.map_err(internal)?;

        created.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vente>, DomainError> {
        entity::ventes::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }

    async fn list(&self) -> Result<Vec<VenteView>, DomainError> {
        entity::ventes::Entity::find()
            .column_as(entity::pieces::Column::Nom, "piece_nom")
            .column_as(entity::clients::Column::Nom, "client_nom")
            .join(JoinType::InnerJoin, entity::ventes::Relation::Piece.def())
            .join(JoinType::InnerJoin, entity::ventes::Relation::Client.def())
            .order_by_desc(entity::ventes::Column::DateVente)
            .into_model::<VenteViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|row| row.try_into())
            .collect()
    }

    async fn update(&self, sale: &Vente) -> Result<Vente, DomainError> {
        let active = entity::ventes::ActiveModel {
            id: Set(sale.id),
            piece_id: Set(sale.piece_id),
            client_id: Set(sale.client_id),
            quantity: Set(sale.quantity),
            unit_price: Set(sale.unit_price),
            discount: Set(sale.discount),
            total: Set(sale.total),
            statut: Set(sale.statut.as_str().to_string()),
            notes: Set(sale.notes.clone()),
            date_vente: Set(sale.date_vente),
        };

        entity::ventes::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("vente", sale.id),
                e => fk_err(e, "ventes.piece_id / ventes.client_id"),
            })?
            .try_into()
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::ventes::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        entity::ventes::Entity::find()
            .count(&*self.db)
            .await
            .map_err(internal)
    }
}

// ===== Client Repository =====

pub struct SeaOrmClientRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmClientRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn create(&self, client: &Client) -> Result<Client, DomainError> {
        let mut active: entity::clients::ActiveModel = client.into();
        active.id = NotSet;

        active.insert(&*self.db).await.map_err(internal)?.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DomainError> {
        entity::clients::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
            .map(|e| e.try_into())
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        entity::clients::Entity::find()
            .order_by_asc(entity::clients::Column::Id)
            .all(&*self.db)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|e| e.try_into())
            .collect()
    }

    async fn update(&self, client: &Client) -> Result<Client, DomainError> {
        let active: entity::clients::ActiveModel = client.into();

        entity::clients::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("client", client.id),
                e => internal(e),
            })?
            .try_into()
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::clients::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| fk_err(e, "clients.id"))?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Fournisseur Repository =====

pub struct SeaOrmFournisseurRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFournisseurRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FournisseurRepository for SeaOrmFournisseurRepository {
    async fn create(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError> {
        let mut active: entity::fournisseurs::ActiveModel = fournisseur.into();
        active.id = NotSet;

        let model = active.insert(&*self.db).await.map_err(internal)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Fournisseur>, DomainError> {
        let row = entity::fournisseurs::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list(&self) -> Result<Vec<Fournisseur>, DomainError> {
        let rows = entity::fournisseurs::Entity::find()
            .order_by_asc(entity::fournisseurs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError> {
        let active: entity::fournisseurs::ActiveModel = fournisseur.into();

        let model = entity::fournisseurs::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("fournisseur", fournisseur.id),
                e => internal(e),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::fournisseurs::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Vehicule Repository =====

pub struct SeaOrmVehiculeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVehiculeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehiculeRepository for SeaOrmVehiculeRepository {
    async fn create(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError> {
        let mut active: entity::vehicules::ActiveModel = vehicule.into();
        active.id = NotSet;

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| unique_err(e, "plaque", &vehicule.plaque))?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicule>, DomainError> {
        let row = entity::vehicules::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list(&self) -> Result<Vec<Vehicule>, DomainError> {
        let rows = entity::vehicules::Entity::find()
            .order_by_asc(entity::vehicules::Column::Id)
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError> {
        let active: entity::vehicules::ActiveModel = vehicule.into();

        let model = entity::vehicules::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("vehicule", vehicule.id),
                e => unique_err(e, "plaque", &vehicule.plaque),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::vehicules::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Categorie Repository =====

pub struct SeaOrmCategorieRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategorieRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategorieRepository for SeaOrmCategorieRepository {
    async fn create(&self, categorie: &Categorie) -> Result<Categorie, DomainError> {
        let mut active: entity::categories::ActiveModel = categorie.into();
        active.id = NotSet;

        let model = active.insert(&*self.db).await.map_err(internal)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Categorie>, DomainError> {
        let row = entity::categories::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list(&self) -> Result<Vec<Categorie>, DomainError> {
        let rows = entity::categories::Entity::find()
            .order_by_asc(entity::categories::Column::Nom)
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, categorie: &Categorie) -> Result<Categorie, DomainError> {
        let active: entity::categories::ActiveModel = categorie.into();

        let model = entity::categories::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("categorie", categorie.id),
                e => internal(e),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::categories::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Piece Repository =====

pub struct SeaOrmPieceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPieceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct PieceViewRow {
    id: i32,
    nom: String,
    description: Option<String>,
    prix: Decimal,
    image: Option<String>,
    categorie_id: Option<i32>,
    fournisseur_id: Option<i32>,
    categorie_nom: Option<String>,
    fournisseur_nom: Option<String>,
}

#[async_trait]
impl PieceRepository for SeaOrmPieceRepository {
    async fn create(&self, piece: &Piece) -> Result<Piece, DomainError> {
        let mut active: entity::pieces::ActiveModel = piece.into();
        active.id = NotSet;

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| fk_err(e, "pieces.categorie_id / pieces.fournisseur_id"))?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Piece>, DomainError> {
        let row = entity::pieces::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(|e| e.into()))
    }

    async fn list_views(&self) -> Result<Vec<PieceView>, DomainError> {
        let rows = entity::pieces::Entity::find()
            .column_as(entity::categories::Column::Nom, "categorie_nom")
            .column_as(entity::fournisseurs::Column::Nom, "fournisseur_nom")
            .join(JoinType::LeftJoin, entity::pieces::Relation::Categorie.def())
            .join(
                JoinType::LeftJoin,
                entity::pieces::Relation::Fournisseur.def(),
            )
            .order_by_asc(entity::pieces::Column::Id)
            .into_model::<PieceViewRow>()
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows
            .into_iter()
            .map(|row| PieceView {
                id: row.id,
                nom: row.nom,
                description: row.description,
                prix: row.prix,
                image: row.image,
                categorie_id: row.categorie_id,
                categorie_nom: row.categorie_nom,
                fournisseur_id: row.fournisseur_id,
                fournisseur_nom: row.fournisseur_nom,
            })
            .collect())
    }

    async fn update(&self, piece: &Piece) -> Result<Piece, DomainError> {
        let active: entity::pieces::ActiveModel = piece.into();

        let model = entity::pieces::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("piece", piece.id),
                e => fk_err(e, "pieces.categorie_id / pieces.fournisseur_id"),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::pieces::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| fk_err(e, "pieces.id"))?;

        Ok(res.rows_affected > 0)
    }
}

// ===== Notification Repository =====

pub struct SeaOrmNotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmNotificationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for SeaOrmNotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<Notification, DomainError> {
        let mut active: entity::notifications::ActiveModel = notification.into();
        active.id = NotSet;

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| fk_err(e, "notifications.user_id"))?;

        Ok(model.into())
    }

    async fn list(&self, user_id: Option<i32>) -> Result<Vec<Notification>, DomainError> {
        let mut query = entity::notifications::Entity::find();

        if let Some(uid) = user_id {
            // Targeted rows plus broadcasts
            query = query.filter(
                Condition::any()
                    .add(entity::notifications::Column::UserId.eq(uid))
                    .add(entity::notifications::Column::UserId.is_null()),
            );
        }

        let rows = query
            .order_by_desc(entity::notifications::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(|e| e.into()).collect())
    }

    async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DomainError> {
        let Some(existing) = entity::notifications::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(internal)?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.is_read = Set(true);
        let updated = active.update(&*self.db).await.map_err(internal)?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let res = entity::notifications::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(internal)?;

        Ok(res.rows_affected > 0)
    }
}
