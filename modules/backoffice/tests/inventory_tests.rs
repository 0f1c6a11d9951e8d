//! Stock and sales workflow tests
//!
//! Sale creation is the only path that decrements stock, and it either
//! commits the sale together with the decrement or keeps nothing.

mod common;

use backoffice::contract::{DomainError, NewStock, NewVente, SaleStatus, VentePatch};
use common::{create_inventory_service_with_repos, dec};

fn sale(piece_id: i32, client_id: i32, quantity: i32, unit_price: &str) -> NewVente {
    NewVente {
        piece_id: Some(piece_id),
        client_id: Some(client_id),
        quantity: Some(quantity),
        unit_price: Some(dec(unit_price)),
        discount: None,
        notes: None,
    }
}

// ===== Stock =====

#[tokio::test]
async fn zero_is_a_valid_opening_stock_level() {
    let (service, _, _) = create_inventory_service_with_repos();

    let stock = service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(0),
        })
        .await
        .unwrap();

    assert_eq!(stock.quantity, 0);
}

#[tokio::test]
async fn negative_stock_levels_are_rejected() {
    let (service, _, _) = create_inventory_service_with_repos();

    let err = service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(-1),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn create_stock_enumerates_missing_fields() {
    let (service, _, _) = create_inventory_service_with_repos();

    let err = service.create_stock(&NewStock::default()).await.unwrap_err();

    match err {
        DomainError::MissingFields { fields } => {
            assert_eq!(fields, ["piece_id", "quantity"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn one_stock_row_per_piece() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();

    let err = service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(3),
        })
        .await
        .unwrap_err();

    match err {
        DomainError::Duplicate { field, .. } => assert_eq!(field, "piece_id"),
        other => panic!("expected Duplicate, got {:?}", other),
    }
}

#[tokio::test]
async fn stock_lookup_by_piece() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(4),
        })
        .await
        .unwrap();

    let stock = service.get_stock_by_piece(5).await.unwrap();
    assert_eq!(stock.quantity, 4);

    let err = service.get_stock_by_piece(6).await.unwrap_err();
    match err {
        DomainError::NotFound { resource, .. } => assert_eq!(resource, "stock"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn stock_update_requires_a_quantity() {
    let (service, _, _) = create_inventory_service_with_repos();
    let stock = service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(4),
        })
        .await
        .unwrap();

    let err = service.update_stock(stock.id, None).await.unwrap_err();
    match err {
        DomainError::MissingFields { fields } => assert_eq!(fields, ["quantity"]),
        other => panic!("expected MissingFields, got {:?}", other),
    }

    let updated = service.update_stock(stock.id, Some(12)).await.unwrap();
    assert_eq!(updated.quantity, 12);

    let err = service.update_stock(999, Some(1)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

// ===== Sales =====

#[tokio::test]
async fn recording_a_sale_decrements_stock() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();

    let mut input = sale(5, 1, 3, "15.0");
    input.discount = Some(dec("5.0"));
    let vente = service.record_sale(&input).await.unwrap();

    // 3 x 15.00 - 5.00
    assert_eq!(vente.total, dec("40.0"));
    assert_eq!(vente.statut, SaleStatus::Completed);
    assert_eq!(service.get_stock_by_piece(5).await.unwrap().quantity, 7);
}

#[tokio::test]
async fn insufficient_stock_keeps_nothing() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(2),
        })
        .await
        .unwrap();

    let err = service.record_sale(&sale(5, 1, 3, "15.0")).await.unwrap_err();

    match err {
        DomainError::InsufficientStock {
            piece_id,
            requested,
            available,
        } => {
            assert_eq!(piece_id, 5);
            assert_eq!(requested, 3);
            assert_eq!(available, 2);
        }
        other => panic!("expected InsufficientStock, got {:?}", other),
    }

    // No partial write: the stock is untouched and no sale exists
    assert_eq!(service.get_stock_by_piece(5).await.unwrap().quantity, 2);
    assert_eq!(service.count_sales().await.unwrap(), 0);
}

#[tokio::test]
async fn selling_an_unstocked_piece_reports_zero_available() {
    let (service, _, _) = create_inventory_service_with_repos();

    let err = service.record_sale(&sale(9, 1, 1, "15.0")).await.unwrap_err();

    match err {
        DomainError::InsufficientStock { available, .. } => assert_eq!(available, 0),
        other => panic!("expected InsufficientStock, got {:?}", other),
    }
}

#[tokio::test]
async fn sale_totals_are_rounded_to_cents() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();

    let mut input = sale(5, 1, 3, "19.99");
    input.discount = Some(dec("0.97"));
    let vente = service.record_sale(&input).await.unwrap();

    assert_eq!(vente.total, dec("59.0"));
}

#[tokio::test]
async fn discounts_are_bounded_by_the_gross_amount() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();

    let mut input = sale(5, 1, 1, "10.0");
    input.discount = Some(dec("15.0"));
    let err = service.record_sale(&input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    input.discount = Some(dec("-1.0"));
    let err = service.record_sale(&input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn record_sale_enumerates_missing_fields() {
    let (service, _, _) = create_inventory_service_with_repos();

    let err = service.record_sale(&NewVente::default()).await.unwrap_err();

    match err {
        DomainError::MissingFields { fields } => {
            assert_eq!(fields, ["piece_id", "client_id", "quantity", "unit_price"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn cancelling_a_sale_never_restores_stock() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();
    let vente = service.record_sale(&sale(5, 1, 3, "15.0")).await.unwrap();
    assert_eq!(service.get_stock_by_piece(5).await.unwrap().quantity, 7);

    let updated = service
        .update_sale(
            vente.id,
            &VentePatch {
                statut: Some(SaleStatus::Cancelled),
                notes: Some("client absent".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.statut, SaleStatus::Cancelled);
    assert_eq!(updated.notes.as_deref(), Some("client absent"));
    // Amounts and the stock movement stay as recorded
    assert_eq!(updated.total, dec("45.0"));
    assert_eq!(service.get_stock_by_piece(5).await.unwrap().quantity, 7);
}

#[tokio::test]
async fn sale_count_tracks_creations_and_deletions() {
    let (service, _, _) = create_inventory_service_with_repos();
    service
        .create_stock(&NewStock {
            piece_id: Some(5),
            quantity: Some(10),
        })
        .await
        .unwrap();

    let first = service.record_sale(&sale(5, 1, 2, "15.0")).await.unwrap();
    service.record_sale(&sale(5, 2, 1, "15.0")).await.unwrap();
    assert_eq!(service.count_sales().await.unwrap(), 2);

    service.delete_sale(first.id).await.unwrap();
    assert_eq!(service.count_sales().await.unwrap(), 1);

    let err = service.delete_sale(first.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
