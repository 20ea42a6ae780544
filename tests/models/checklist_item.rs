//! ChecklistItem model tests: the pending <-> completed state machine

use sqlx::PgPool;

use cart_core::models::checklist_item::{ChecklistItem, NewChecklistItem};
use cart_core::models::order_checklist::OrderChecklist;
use cart_core::models::product::{ProductRef, ProductType};

use crate::common;

async fn setup_checklist_with_item(pool: &PgPool) -> (OrderChecklist, ChecklistItem) {
    let package = common::create_package(pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);
    let order = common::create_order_with_items(pool, &[product]).await;

    let checklist = OrderChecklist::try_create(pool, order.order_id)
        .await
        .expect("checklist insert")
        .expect("first creation wins");

    let item = ChecklistItem::create(
        pool,
        checklist.checklist_id,
        NewChecklistItem {
            template_item_id: None,
            description: "Review order details".to_string(),
            order_index: 0,
            is_optional: false,
        },
    )
    .await
    .expect("item insert");

    (checklist, item)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_complete_stamps_time_and_staff(pool: PgPool) -> sqlx::Result<()> {
    let (_, item) = setup_checklist_with_item(&pool).await;
    assert!(!item.completed);
    assert!(item.completed_at.is_none());

    let completed = ChecklistItem::complete(&pool, item.checklist_item_id, 42).await?;
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.completed_by, Some(42));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_redundant_complete_keeps_original_stamp(pool: PgPool) -> sqlx::Result<()> {
    let (_, item) = setup_checklist_with_item(&pool).await;

    let first = ChecklistItem::complete(&pool, item.checklist_item_id, 42).await?;
    let second = ChecklistItem::complete(&pool, item.checklist_item_id, 77).await?;

    // Only the false -> true edge writes the stamp
    assert_eq!(second.completed_at, first.completed_at);
    assert_eq!(second.completed_by, Some(42));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reopen_clears_stamp(pool: PgPool) -> sqlx::Result<()> {
    let (_, item) = setup_checklist_with_item(&pool).await;

    ChecklistItem::complete(&pool, item.checklist_item_id, 42).await?;
    let reopened = ChecklistItem::reopen(&pool, item.checklist_item_id).await?;

    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
    assert!(reopened.completed_by.is_none());

    // Completing again stamps fresh
    let completed = ChecklistItem::complete(&pool, item.checklist_item_id, 77).await?;
    assert_eq!(completed.completed_by, Some(77));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_in_checklist_rejects_foreign_items(pool: PgPool) -> sqlx::Result<()> {
    let (checklist, item) = setup_checklist_with_item(&pool).await;
    let (other_checklist, _) = setup_checklist_with_item(&pool).await;

    let found =
        ChecklistItem::find_in_checklist(&pool, checklist.checklist_id, item.checklist_item_id)
            .await?;
    assert!(found.is_some());

    let foreign = ChecklistItem::find_in_checklist(
        &pool,
        other_checklist.checklist_id,
        item.checklist_item_id,
    )
    .await?;
    assert!(foreign.is_none());

    Ok(())
}
