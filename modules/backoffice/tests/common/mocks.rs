//! In-memory repository mocks
//!
//! Each mock is a `Clone` handle over shared state, so a test can keep
//! one handle for seeding and inspection while the service owns another.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use backoffice::contract::{
    Categorie, Client, Commande, DetailCommande, DetailView, DomainError, Facture, Fournisseur,
    Notification, OrderSearch, OrderStatus, OrderView, Piece, PieceView, SaleStatus, Stock,
    StockView, User, Vehicule, Vente, VenteView,
};
use backoffice::domain::repository::{
    CategorieRepository, ClientRepository, DetailRecord, FournisseurRepository, InvoiceRepository,
    NotificationRepository, OrderRepository, PieceRepository, SaleRepository, StockRepository,
    UserRecord, UserRepository, VehiculeRepository, VenteRecord,
};
use backoffice::domain::Mailer;
use chrono::{DateTime, NaiveTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;

fn alloc(counter: &AtomicI32) -> i32 {
    counter.fetch_add(1, Ordering::Relaxed) + 1
}

// ===== Users =====

#[derive(Clone, Default)]
pub struct MockUserRepo {
    rows: Arc<RwLock<HashMap<i32, User>>>,
    next_id: Arc<AtomicI32>,
}

impl MockUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.rows.read().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn create(&self, user: &UserRecord) -> Result<User, DomainError> {
        let mut rows = self.rows.write();
        if rows.values().any(|u| u.email == user.email) {
            return Err(DomainError::Duplicate {
                field: "email".to_string(),
                value: user.email.clone(),
            });
        }
        let created = User {
            id: alloc(&self.next_id),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            avatar: None,
            reset_token_hash: None,
            reset_expires_at: None,
            created_at: Utc::now(),
        };
        rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.rows.read().values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&user.id) {
            return Err(DomainError::not_found("user", user.id));
        }
        if rows
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::Duplicate {
                field: "email".to_string(),
                value: user.email.clone(),
            });
        }
        rows.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_valid_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|u| {
                u.reset_token_hash.as_deref() == Some(token_hash)
                    && u.reset_expires_at.is_some_and(|e| e > now)
            })
            .cloned())
    }
}

// ===== Mailer =====

/// Records every reset mail instead of sending it.
#[derive(Clone, Default)]
pub struct CapturingMailer {
    sent: Arc<RwLock<Vec<(String, String)>>>,
}

impl CapturingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().len()
    }

    pub fn last_link(&self) -> Option<String> {
        self.sent.read().last().map(|(_, link)| link.clone())
    }

    /// Token segment of the most recent reset link.
    pub fn last_token(&self) -> Option<String> {
        self.last_link()
            .and_then(|link| link.rsplit('/').next().map(str::to_string))
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send_password_reset(&self, to: &str, link: &str) -> Result<(), DomainError> {
        self.sent.write().push((to.to_string(), link.to_string()));
        Ok(())
    }
}

// ===== Orders and lines =====

#[derive(Clone, Default)]
pub struct MockOrderRepo {
    orders: Arc<RwLock<HashMap<i32, Commande>>>,
    lines: Arc<RwLock<HashMap<i32, DetailCommande>>>,
    client_names: Arc<RwLock<HashMap<i32, String>>>,
    piece_names: Arc<RwLock<HashMap<i32, String>>>,
    /// When set, writes referencing a client outside this set fail the
    /// way the store's foreign key does.
    known_clients: Arc<RwLock<Option<HashSet<i32>>>>,
    next_order_id: Arc<AtomicI32>,
    next_line_id: Arc<AtomicI32>,
}

impl MockOrderRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_client_name(&self, client_id: i32, nom: &str) {
        self.client_names.write().insert(client_id, nom.to_string());
    }

    pub fn enforce_known_clients(&self, ids: &[i32]) {
        *self.known_clients.write() = Some(ids.iter().copied().collect());
    }

    fn check_client_fk(&self, client_id: i32) -> Result<(), DomainError> {
        if let Some(known) = self.known_clients.read().as_ref() {
            if !known.contains(&client_id) {
                return Err(DomainError::ForeignKey {
                    constraint: "commandes.client_id".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn set_piece_name(&self, piece_id: i32, nom: &str) {
        self.piece_names.write().insert(piece_id, nom.to_string());
    }

    /// Insert an order directly, bypassing the service, with an explicit
    /// creation date for search tests.
    pub fn seed_order(
        &self,
        client_id: i32,
        user_id: i32,
        statut: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Commande {
        let order = Commande {
            id: alloc(&self.next_order_id),
            client_id,
            user_id,
            statut,
            montant: Decimal::ZERO,
            created_at,
        };
        self.orders.write().insert(order.id, order.clone());
        order
    }

    pub fn stored_order(&self, id: i32) -> Option<Commande> {
        self.orders.read().get(&id).cloned()
    }

    fn client_name(&self, client_id: i32) -> String {
        self.client_names
            .read()
            .get(&client_id)
            .cloned()
            .unwrap_or_else(|| format!("Client {}", client_id))
    }

    fn piece_name(&self, piece_id: i32) -> String {
        self.piece_names
            .read()
            .get(&piece_id)
            .cloned()
            .unwrap_or_else(|| format!("Pièce {}", piece_id))
    }

    fn view(&self, order: &Commande) -> OrderView {
        OrderView {
            id: order.id,
            client_id: order.client_id,
            client_nom: self.client_name(order.client_id),
            user_id: order.user_id,
            user_nom: format!("User {}", order.user_id),
            statut: order.statut,
            montant: order.montant,
            created_at: order.created_at,
        }
    }

    /// Full sum over the order's current lines, written back to the order.
    fn recompute_total(&self, commande_id: i32) -> Decimal {
        let total: Decimal = self
            .lines
            .read()
            .values()
            .filter(|l| l.commande_id == commande_id)
            .map(|l| Decimal::from(l.quantity) * l.price)
            .sum();
        let total = total.round_dp(2);
        if let Some(order) = self.orders.write().get_mut(&commande_id) {
            order.montant = total;
        }
        total
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepo {
    async fn create(&self, client_id: i32, user_id: i32) -> Result<Commande, DomainError> {
        self.check_client_fk(client_id)?;
        let order = Commande {
            id: alloc(&self.next_order_id),
            client_id,
            user_id,
            statut: OrderStatus::EnAttente,
            montant: Decimal::ZERO,
            created_at: Utc::now(),
        };
        self.orders.write().insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Commande>, DomainError> {
        Ok(self.orders.read().get(&id).cloned())
    }

    async fn find_view(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        Ok(self.orders.read().get(&id).map(|o| self.view(o)))
    }

    async fn list_views(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut views: Vec<OrderView> =
            self.orders.read().values().map(|o| self.view(o)).collect();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(views)
    }

    async fn search(&self, filter: &OrderSearch) -> Result<Vec<OrderView>, DomainError> {
        let mut views: Vec<OrderView> = self
            .orders
            .read()
            .values()
            .filter(|o| {
                if let Some(q) = &filter.query {
                    if !self.client_name(o.client_id).contains(q.as_str()) {
                        return false;
                    }
                }
                if let Some(statut) = filter.statut {
                    if o.statut != statut {
                        return false;
                    }
                }
                if let Some(debut) = filter.date_debut {
                    let start = debut.and_time(NaiveTime::MIN).and_utc();
                    if o.created_at < start {
                        return false;
                    }
                }
                if let Some(end) = filter.date_fin.and_then(|d| d.succ_opt()) {
                    // Inclusive upper bound: strictly before the next day
                    let end = end.and_time(NaiveTime::MIN).and_utc();
                    if o.created_at >= end {
                        return false;
                    }
                }
                if let Some(client_id) = filter.client_id {
                    if o.client_id != client_id {
                        return false;
                    }
                }
                true
            })
            .map(|o| self.view(o))
            .collect();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(views)
    }

    async fn update(&self, order: &Commande) -> Result<Commande, DomainError> {
        self.check_client_fk(order.client_id)?;
        let mut orders = self.orders.write();
        if !orders.contains_key(&order.id) {
            return Err(DomainError::not_found("commande", order.id));
        }
        orders.insert(order.id, order.clone());
        Ok(order.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let removed = self.orders.write().remove(&id).is_some();
        if removed {
            // Lines cascade with their order
            self.lines.write().retain(|_, l| l.commande_id != id);
        }
        Ok(removed)
    }

    async fn list_lines(&self, commande_id: i32) -> Result<Vec<DetailView>, DomainError> {
        let mut lines: Vec<DetailCommande> = self
            .lines
            .read()
            .values()
            .filter(|l| l.commande_id == commande_id)
            .cloned()
            .collect();
        lines.sort_by_key(|l| l.id);
        Ok(lines
            .into_iter()
            .map(|l| DetailView {
                id: l.id,
                commande_id: l.commande_id,
                piece_id: l.piece_id,
                piece_nom: self.piece_name(l.piece_id),
                quantity: l.quantity,
                price: l.price,
            })
            .collect())
    }

    async fn find_line(&self, line_id: i32) -> Result<Option<DetailCommande>, DomainError> {
        Ok(self.lines.read().get(&line_id).cloned())
    }

    async fn add_line(
        &self,
        line: &DetailRecord,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        if !self.orders.read().contains_key(&line.commande_id) {
            return Err(DomainError::not_found("commande", line.commande_id));
        }
        let created = DetailCommande {
            id: alloc(&self.next_line_id),
            commande_id: line.commande_id,
            piece_id: line.piece_id,
            quantity: line.quantity,
            price: line.price,
        };
        self.lines.write().insert(created.id, created.clone());
        let total = self.recompute_total(line.commande_id);
        Ok((created, total))
    }

    async fn update_line(
        &self,
        line_id: i32,
        piece_id: i32,
        quantity: i32,
        price: Decimal,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        let updated = {
            let mut lines = self.lines.write();
            let line = lines
                .get_mut(&line_id)
                .ok_or_else(|| DomainError::not_found("detail", line_id))?;
            line.piece_id = piece_id;
            line.quantity = quantity;
            line.price = price;
            line.clone()
        };
        let total = self.recompute_total(updated.commande_id);
        Ok((updated, total))
    }

    async fn delete_line(&self, line_id: i32) -> Result<Decimal, DomainError> {
        let removed = self
            .lines
            .write()
            .remove(&line_id)
            .ok_or_else(|| DomainError::not_found("detail", line_id))?;
        Ok(self.recompute_total(removed.commande_id))
    }
}

// ===== Invoices =====

#[derive(Clone, Default)]
pub struct MockInvoiceRepo {
    rows: Arc<RwLock<HashMap<i32, Facture>>>,
    next_id: Arc<AtomicI32>,
}

impl MockInvoiceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceRepository for MockInvoiceRepo {
    async fn create(&self, commande_id: i32, total: Decimal) -> Result<Facture, DomainError> {
        let facture = Facture {
            id: alloc(&self.next_id),
            commande_id,
            total,
            date_facture: Utc::now(),
        };
        self.rows.write().insert(facture.id, facture.clone());
        Ok(facture)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Facture>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Facture>, DomainError> {
        let mut rows: Vec<Facture> = self.rows.read().values().cloned().collect();
        rows.sort_by(|a, b| b.date_facture.cmp(&a.date_facture));
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Stock =====

#[derive(Clone, Default)]
pub struct MockStockRepo {
    rows: Arc<RwLock<HashMap<i32, Stock>>>,
    next_id: Arc<AtomicI32>,
}

impl MockStockRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity_for(&self, piece_id: i32) -> Option<i32> {
        self.rows
            .read()
            .values()
            .find(|s| s.piece_id == piece_id)
            .map(|s| s.quantity)
    }

    /// Decrement behind the availability check. Err carries the quantity
    /// actually available (0 when there is no row at all).
    fn decrement_if_available(&self, piece_id: i32, quantity: i32) -> Result<(), i32> {
        let mut rows = self.rows.write();
        match rows.values_mut().find(|s| s.piece_id == piece_id) {
            Some(stock) if stock.quantity >= quantity => {
                stock.quantity -= quantity;
                Ok(())
            }
            Some(stock) => Err(stock.quantity),
            None => Err(0),
        }
    }
}

#[async_trait]
impl StockRepository for MockStockRepo {
    async fn create(&self, piece_id: i32, quantity: i32) -> Result<Stock, DomainError> {
        let mut rows = self.rows.write();
        if rows.values().any(|s| s.piece_id == piece_id) {
            return Err(DomainError::Duplicate {
                field: "piece_id".to_string(),
                value: piece_id.to_string(),
            });
        }
        let stock = Stock {
            id: alloc(&self.next_id),
            piece_id,
            quantity,
        };
        rows.insert(stock.id, stock.clone());
        Ok(stock)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Stock>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_by_piece(&self, piece_id: i32) -> Result<Option<Stock>, DomainError> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|s| s.piece_id == piece_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<StockView>, DomainError> {
        let mut rows: Vec<Stock> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|s| s.id);
        Ok(rows
            .into_iter()
            .map(|s| StockView {
                id: s.id,
                piece_id: s.piece_id,
                piece_nom: format!("Pièce {}", s.piece_id),
                quantity: s.quantity,
            })
            .collect())
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> Result<Option<Stock>, DomainError> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id) {
            Some(stock) => {
                stock.quantity = quantity;
                Ok(Some(stock.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Sales =====

#[derive(Clone)]
pub struct MockSaleRepo {
    rows: Arc<RwLock<HashMap<i32, Vente>>>,
    next_id: Arc<AtomicI32>,
    stocks: MockStockRepo,
}

impl MockSaleRepo {
    /// Shares stock state with the given repo, the way the real
    /// implementation shares one database.
    pub fn new(stocks: MockStockRepo) -> Self {
        Self {
            rows: Arc::default(),
            next_id: Arc::default(),
            stocks,
        }
    }
}

#[async_trait]
impl SaleRepository for MockSaleRepo {
    async fn create_with_stock_decrement(
        &self,
        sale: &VenteRecord,
    ) -> Result<Vente, DomainError> {
        // A failed decrement keeps nothing, like the rolled-back insert.
        if let Err(available) = self.stocks.decrement_if_available(sale.piece_id, sale.quantity)
        {
            return Err(DomainError::InsufficientStock {
                piece_id: sale.piece_id,
                requested: sale.quantity,
                available,
            });
        }
        let created = Vente {
            id: alloc(&self.next_id),
            piece_id: sale.piece_id,
            client_id: sale.client_id,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            discount: sale.discount,
            total: sale.total,
            statut: SaleStatus::Completed,
            notes: sale.notes.clone(),
            date_vente: Utc::now(),
        };
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vente>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<VenteView>, DomainError> {
        let mut rows: Vec<Vente> = self.rows.read().values().cloned().collect();
        rows.sort_by(|a, b| b.date_vente.cmp(&a.date_vente));
        Ok(rows
            .into_iter()
            .map(|v| VenteView {
                id: v.id,
                piece_id: v.piece_id,
                piece_nom: format!("Pièce {}", v.piece_id),
                client_id: v.client_id,
                client_nom: format!("Client {}", v.client_id),
                quantity: v.quantity,
                unit_price: v.unit_price,
                discount: v.discount,
                total: v.total,
                statut: v.statut,
                notes: v.notes,
                date_vente: v.date_vente,
            })
            .collect())
    }

    async fn update(&self, sale: &Vente) -> Result<Vente, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&sale.id) {
            return Err(DomainError::not_found("vente", sale.id));
        }
        rows.insert(sale.id, sale.clone());
        Ok(sale.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.rows.read().len() as u64)
    }
}

// ===== Clients =====

#[derive(Clone, Default)]
pub struct MockClientRepo {
    rows: Arc<RwLock<HashMap<i32, Client>>>,
    next_id: Arc<AtomicI32>,
}

impl MockClientRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepo {
    async fn create(&self, client: &Client) -> Result<Client, DomainError> {
        let mut created = client.clone();
        created.id = alloc(&self.next_id);
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        let mut rows: Vec<Client> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|c| c.id);
        Ok(rows)
    }

    async fn update(&self, client: &Client) -> Result<Client, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&client.id) {
            return Err(DomainError::not_found("client", client.id));
        }
        rows.insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Fournisseurs =====

#[derive(Clone, Default)]
pub struct MockFournisseurRepo {
    rows: Arc<RwLock<HashMap<i32, Fournisseur>>>,
    next_id: Arc<AtomicI32>,
}

impl MockFournisseurRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FournisseurRepository for MockFournisseurRepo {
    async fn create(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError> {
        let mut created = fournisseur.clone();
        created.id = alloc(&self.next_id);
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Fournisseur>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Fournisseur>, DomainError> {
        let mut rows: Vec<Fournisseur> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|f| f.id);
        Ok(rows)
    }

    async fn update(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&fournisseur.id) {
            return Err(DomainError::not_found("fournisseur", fournisseur.id));
        }
        rows.insert(fournisseur.id, fournisseur.clone());
        Ok(fournisseur.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Vehicules =====

#[derive(Clone, Default)]
pub struct MockVehiculeRepo {
    rows: Arc<RwLock<HashMap<i32, Vehicule>>>,
    next_id: Arc<AtomicI32>,
}

impl MockVehiculeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate_plate(rows: &HashMap<i32, Vehicule>, id: i32, plaque: &str) -> bool {
        rows.values().any(|v| v.id != id && v.plaque == plaque)
    }
}

#[async_trait]
impl VehiculeRepository for MockVehiculeRepo {
    async fn create(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError> {
        let mut rows = self.rows.write();
        if Self::duplicate_plate(&rows, 0, &vehicule.plaque) {
            return Err(DomainError::Duplicate {
                field: "plaque".to_string(),
                value: vehicule.plaque.clone(),
            });
        }
        let mut created = vehicule.clone();
        created.id = alloc(&self.next_id);
        rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicule>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Vehicule>, DomainError> {
        let mut rows: Vec<Vehicule> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|v| v.id);
        Ok(rows)
    }

    async fn update(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&vehicule.id) {
            return Err(DomainError::not_found("vehicule", vehicule.id));
        }
        if Self::duplicate_plate(&rows, vehicule.id, &vehicule.plaque) {
            return Err(DomainError::Duplicate {
                field: "plaque".to_string(),
                value: vehicule.plaque.clone(),
            });
        }
        rows.insert(vehicule.id, vehicule.clone());
        Ok(vehicule.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Categories =====

#[derive(Clone, Default)]
pub struct MockCategorieRepo {
    rows: Arc<RwLock<HashMap<i32, Categorie>>>,
    next_id: Arc<AtomicI32>,
}

impl MockCategorieRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategorieRepository for MockCategorieRepo {
    async fn create(&self, categorie: &Categorie) -> Result<Categorie, DomainError> {
        let mut created = categorie.clone();
        created.id = alloc(&self.next_id);
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Categorie>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Categorie>, DomainError> {
        let mut rows: Vec<Categorie> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|c| c.id);
        Ok(rows)
    }

    async fn update(&self, categorie: &Categorie) -> Result<Categorie, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&categorie.id) {
            return Err(DomainError::not_found("categorie", categorie.id));
        }
        rows.insert(categorie.id, categorie.clone());
        Ok(categorie.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Pieces =====

#[derive(Clone, Default)]
pub struct MockPieceRepo {
    rows: Arc<RwLock<HashMap<i32, Piece>>>,
    next_id: Arc<AtomicI32>,
}

impl MockPieceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PieceRepository for MockPieceRepo {
    async fn create(&self, piece: &Piece) -> Result<Piece, DomainError> {
        let mut created = piece.clone();
        created.id = alloc(&self.next_id);
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Piece>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list_views(&self) -> Result<Vec<PieceView>, DomainError> {
        let mut rows: Vec<Piece> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows
            .into_iter()
            .map(|p| PieceView {
                id: p.id,
                nom: p.nom,
                description: p.description,
                prix: p.prix,
                image: p.image,
                categorie_id: p.categorie_id,
                categorie_nom: p.categorie_id.map(|id| format!("Catégorie {}", id)),
                fournisseur_id: p.fournisseur_id,
                fournisseur_nom: p.fournisseur_id.map(|id| format!("Fournisseur {}", id)),
            })
            .collect())
    }

    async fn update(&self, piece: &Piece) -> Result<Piece, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&piece.id) {
            return Err(DomainError::not_found("piece", piece.id));
        }
        rows.insert(piece.id, piece.clone());
        Ok(piece.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}

// ===== Notifications =====

#[derive(Clone, Default)]
pub struct MockNotificationRepo {
    rows: Arc<RwLock<HashMap<i32, Notification>>>,
    next_id: Arc<AtomicI32>,
}

impl MockNotificationRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepo {
    async fn create(&self, notification: &Notification) -> Result<Notification, DomainError> {
        let mut created = notification.clone();
        created.id = alloc(&self.next_id);
        self.rows.write().insert(created.id, created.clone());
        Ok(created)
    }

    async fn list(&self, user_id: Option<i32>) -> Result<Vec<Notification>, DomainError> {
        let mut rows: Vec<Notification> = self
            .rows
            .read()
            .values()
            .filter(|n| match user_id {
                // Targeted rows plus broadcasts
                Some(uid) => n.user_id == Some(uid) || n.user_id.is_none(),
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DomainError> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id) {
            Some(notification) => {
                notification.is_read = true;
                Ok(Some(notification.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.write().remove(&id).is_some())
    }
}
