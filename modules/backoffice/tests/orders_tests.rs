//! Order, order-line and invoice workflow tests
//!
//! The core property under test: an order's `montant` always equals the
//! sum of `quantity * price` over its lines, after any line mutation.

mod common;

use std::sync::Arc;

use backoffice::contract::{
    DomainError, NewDetail, NewFacture, NewOrder, OrderPatch, OrderSearch, OrderStatus,
};
use chrono::{NaiveDate, TimeZone, Utc};
use common::{create_orders_service, create_orders_service_with_repos, dec};
use rust_decimal::Decimal;

fn line(commande_id: i32, piece_id: i32, quantity: i32, price: &str) -> NewDetail {
    NewDetail {
        commande_id: Some(commande_id),
        piece_id: Some(piece_id),
        quantity: Some(quantity),
        price: Some(dec(price)),
    }
}

// ===== Orders =====

#[tokio::test]
async fn new_order_starts_pending_with_zero_total() {
    let service = create_orders_service();

    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    assert_eq!(order.statut, OrderStatus::EnAttente);
    assert_eq!(order.montant, Decimal::ZERO);
    assert_eq!(order.client_id, 1);
    assert_eq!(order.user_id, 2);
}

#[tokio::test]
async fn create_order_enumerates_missing_fields() {
    let service = create_orders_service();

    let err = service
        .create_order(&NewOrder {
            client_id: None,
            user_id: Some(2),
        })
        .await
        .unwrap_err();

    match err {
        DomainError::MissingFields { fields } => assert_eq!(fields, ["client_id"]),
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn order_total_follows_line_mutations() {
    let (service, _orders, _invoices) = create_orders_service_with_repos();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    // 3 x 9.50
    let (first, montant) = service
        .add_order_line(&line(order.id, 5, 3, "9.5"))
        .await
        .unwrap();
    assert_eq!(montant, dec("28.5"));

    // + 1 x 4.00
    let (_, montant) = service
        .add_order_line(&line(order.id, 6, 1, "4.0"))
        .await
        .unwrap();
    assert_eq!(montant, dec("32.5"));

    // Dropping the first line leaves only the second
    let montant = service.delete_order_line(first.id).await.unwrap();
    assert_eq!(montant, dec("4.0"));

    // The stored order carries the same total
    let view = service.get_order(order.id).await.unwrap();
    assert_eq!(view.montant, dec("4.0"));
}

#[tokio::test]
async fn updating_a_line_recomputes_the_total_from_scratch() {
    let service = create_orders_service();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    let (first, _) = service
        .add_order_line(&line(order.id, 5, 3, "9.5"))
        .await
        .unwrap();
    service
        .add_order_line(&line(order.id, 6, 2, "4.0"))
        .await
        .unwrap();

    let (updated, montant) = service
        .update_order_line(
            first.id,
            &NewDetail {
                commande_id: None,
                piece_id: Some(5),
                quantity: Some(1),
                price: Some(dec("9.5")),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 1);
    // 1 x 9.50 + 2 x 4.00
    assert_eq!(montant, dec("17.5"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_line_inserts_never_lose_an_update() {
    let (service, _orders, _invoices) = create_orders_service_with_repos();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    let service = Arc::new(service);
    let mut handles = Vec::new();
    for piece_id in 1..=10 {
        let service = service.clone();
        let order_id = order.id;
        handles.push(tokio::spawn(async move {
            service
                .add_order_line(&line(order_id, piece_id, 1, "2.0"))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Full recomputation makes the interleaving irrelevant
    let view = service.get_order(order.id).await.unwrap();
    assert_eq!(view.montant, dec("20.0"));
}

#[tokio::test]
async fn line_for_a_missing_order_is_not_found() {
    let service = create_orders_service();

    let err = service.add_order_line(&line(999, 5, 1, "9.5")).await.unwrap_err();

    match err {
        DomainError::NotFound { resource, id } => {
            assert_eq!(resource, "commande");
            assert_eq!(id, "999");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn add_line_enumerates_every_missing_field() {
    let service = create_orders_service();

    let err = service
        .add_order_line(&NewDetail {
            commande_id: Some(1),
            piece_id: None,
            quantity: Some(3),
            price: None,
        })
        .await
        .unwrap_err();

    match err {
        DomainError::MissingFields { fields } => assert_eq!(fields, ["piece_id", "price"]),
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn zero_quantity_lines_are_rejected() {
    let service = create_orders_service();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    let err = service
        .add_order_line(&line(order.id, 5, 0, "9.5"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let err = service
        .add_order_line(&line(order.id, 5, 1, "-1.0"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn deleting_an_unknown_line_is_not_found() {
    let service = create_orders_service();

    let err = service.delete_order_line(404).await.unwrap_err();

    match err {
        DomainError::NotFound { resource, .. } => assert_eq!(resource, "detail"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn listing_lines_of_a_missing_order_is_not_found() {
    let service = create_orders_service();

    let err = service.list_order_lines(77).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn order_update_patches_only_provided_fields() {
    let service = create_orders_service();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    let updated = service
        .update_order(
            order.id,
            &OrderPatch {
                statut: Some(OrderStatus::Validee),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.statut, OrderStatus::Validee);
    assert_eq!(updated.client_id, 1);
}

#[tokio::test]
async fn order_update_with_unknown_client_is_a_fk_conflict() {
    let (service, orders, _invoices) = create_orders_service_with_repos();
    orders.enforce_known_clients(&[1]);
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();

    let err = service
        .update_order(
            order.id,
            &OrderPatch {
                client_id: Some(999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ForeignKey { .. }));
    // The stored row keeps its original client
    assert_eq!(orders.stored_order(order.id).unwrap().client_id, 1);
}

#[tokio::test]
async fn order_update_rejects_zero_ids() {
    let service = create_orders_service();

    let err = service
        .update_order(
            1,
            &OrderPatch {
                client_id: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn deleting_an_order_cascades_its_lines() {
    let (service, orders, _invoices) = create_orders_service_with_repos();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();
    service
        .add_order_line(&line(order.id, 5, 3, "9.5"))
        .await
        .unwrap();

    service.delete_order(order.id).await.unwrap();

    assert!(orders.stored_order(order.id).is_none());
    let err = service.get_order(order.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// ===== Search =====

#[tokio::test]
async fn search_filters_combine_with_and() {
    let (service, orders, _invoices) = create_orders_service_with_repos();
    orders.set_client_name(1, "Garage Martin");
    orders.set_client_name(2, "Atelier Bernard");

    let d1 = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
    let d2 = Utc.with_ymd_and_hms(2026, 3, 15, 9, 0, 0).unwrap();
    let a = orders.seed_order(1, 1, OrderStatus::EnAttente, d1);
    let b = orders.seed_order(2, 1, OrderStatus::Validee, d2);
    orders.seed_order(1, 1, OrderStatus::Validee, d2);

    // Name substring
    let hits = service
        .search_orders(&OrderSearch {
            query: Some("Bernard".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, b.id);

    // Status AND client
    let hits = service
        .search_orders(&OrderSearch {
            statut: Some(OrderStatus::Validee),
            client_id: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].client_id, 1);

    // Date bounds are inclusive on both ends
    let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let hits = service
        .search_orders(&OrderSearch {
            date_debut: Some(day),
            date_fin: Some(day),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, a.id);
}

#[tokio::test]
async fn empty_search_lists_everything() {
    let (service, orders, _invoices) = create_orders_service_with_repos();
    let now = Utc::now();
    orders.seed_order(1, 1, OrderStatus::EnAttente, now);
    orders.seed_order(2, 1, OrderStatus::Validee, now);

    let hits = service.search_orders(&OrderSearch::default()).await.unwrap();
    assert_eq!(hits.len(), 2);
}

// ===== Invoices =====

#[tokio::test]
async fn invoice_total_is_a_snapshot() {
    let service = create_orders_service();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();
    service
        .add_order_line(&line(order.id, 5, 3, "9.5"))
        .await
        .unwrap();

    let facture = service
        .create_invoice(&NewFacture {
            commande_id: Some(order.id),
            total: Some(dec("28.5")),
        })
        .await
        .unwrap();
    assert_eq!(facture.total, dec("28.5"));

    // Later line mutations do not touch the stored invoice
    service
        .add_order_line(&line(order.id, 6, 1, "4.0"))
        .await
        .unwrap();
    let reloaded = service.get_invoice(facture.id).await.unwrap();
    assert_eq!(reloaded.total, dec("28.5"));
}

#[tokio::test]
async fn create_invoice_enumerates_missing_fields() {
    let service = create_orders_service();

    let err = service.create_invoice(&NewFacture::default()).await.unwrap_err();

    match err {
        DomainError::MissingFields { fields } => {
            assert_eq!(fields, ["commande_id", "total"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn deleting_an_unknown_invoice_is_not_found() {
    let service = create_orders_service();

    let err = service.delete_invoice(9).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// ===== PDF rendering =====

#[tokio::test]
async fn rendering_resolves_the_invoice_before_anything_else() {
    let service = create_orders_service();

    let err = service.render_invoice_pdf(42).await.unwrap_err();

    match err {
        DomainError::NotFound { resource, id } => {
            assert_eq!(resource, "facture");
            assert_eq!(id, "42");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn rendered_invoice_is_a_pdf_named_after_its_number() {
    let (service, orders, _invoices) = create_orders_service_with_repos();
    orders.set_client_name(1, "Garage Martin");
    orders.set_piece_name(5, "Filtre à huile");

    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();
    service
        .add_order_line(&line(order.id, 5, 3, "9.5"))
        .await
        .unwrap();
    let facture = service
        .create_invoice(&NewFacture {
            commande_id: Some(order.id),
            total: Some(dec("28.5")),
        })
        .await
        .unwrap();

    let rendered = service.render_invoice_pdf(facture.id).await.unwrap();

    assert_eq!(rendered.file_name, format!("FAC-{:06}.pdf", facture.id));
    assert!(rendered.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn line_less_orders_still_render() {
    let service = create_orders_service();
    let order = service
        .create_order(&NewOrder {
            client_id: Some(1),
            user_id: Some(2),
        })
        .await
        .unwrap();
    let facture = service
        .create_invoice(&NewFacture {
            commande_id: Some(order.id),
            total: Some(dec("150.0")),
        })
        .await
        .unwrap();

    // Falls back to a single synthetic row priced at the invoice total
    let rendered = service.render_invoice_pdf(facture.id).await.unwrap();
    assert!(rendered.bytes.starts_with(b"%PDF"));
}
