//! Order model tests

use sqlx::PgPool;

use cart_core::constants::OrderStatus;
use cart_core::models::order::Order;
use cart_core::models::order_item::OrderItem;
use cart_core::models::product::{ProductRef, ProductType};

use crate::common;

#[sqlx::test(migrations = "./migrations")]
async fn test_order_lifecycle(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);
    let order = common::create_order_with_items(&pool, &[product]).await;

    assert_eq!(order.order_status(), Some(OrderStatus::PendingPayment));
    assert!(order.order_number.starts_with("EC-"));
    assert!(order.assigned_to.is_none());

    let found = Order::find_by_order_number(&pool, &order.order_number)
        .await?
        .expect("order not found by number");
    assert_eq!(found.order_id, order.order_id);

    let paid = Order::mark_payment_completed(&pool, order.order_id).await?;
    assert_eq!(paid.order_status(), Some(OrderStatus::PendingResources));
    assert!(paid.payment_completed_at.is_some());

    let ready = Order::update_status(&pool, order.order_id, OrderStatus::ReadyForProcessing).await?;
    assert_eq!(ready.order_status(), Some(OrderStatus::ReadyForProcessing));

    let assigned = Order::assign_to(&pool, order.order_id, 42).await?;
    assert_eq!(assigned.order_status(), Some(OrderStatus::Assigned));
    assert_eq!(assigned.assigned_to, Some(42));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resource_upload_progress(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let campaign = common::create_campaign(&pool, "Door-to-door").await;
    let order = common::create_order_with_items(
        &pool,
        &[
            ProductRef::new(ProductType::Package, package.package_id),
            ProductRef::new(ProductType::Campaign, campaign.campaign_id),
            ProductRef::new(ProductType::Package, package.package_id),
        ],
    )
    .await;

    assert_eq!(order.total_line_items(&pool).await?, 3);
    assert!(!order.all_resources_uploaded(&pool).await?);
    assert_eq!(order.resource_upload_progress(&pool).await?, 0);

    let items = OrderItem::list_for_order(&pool, order.order_id).await?;
    OrderItem::mark_resources_uploaded(&pool, items[0].order_item_id).await?;

    // 1 of 3 uploaded: truncating division, not rounding
    assert_eq!(order.resource_upload_progress(&pool).await?, 33);
    assert_eq!(order.pending_resource_items(&pool).await?.len(), 2);

    OrderItem::mark_resources_uploaded(&pool, items[1].order_item_id).await?;
    OrderItem::mark_resources_uploaded(&pool, items[2].order_item_id).await?;

    assert!(order.all_resources_uploaded(&pool).await?);
    assert_eq!(order.resource_upload_progress(&pool).await?, 100);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resource_progress_with_no_items_is_complete(pool: PgPool) -> sqlx::Result<()> {
    let order = common::create_order_with_items(&pool, &[]).await;

    assert_eq!(order.total_line_items(&pool).await?, 0);
    assert_eq!(order.resource_upload_progress(&pool).await?, 100);
    assert!(order.all_resources_uploaded(&pool).await?);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_for_user(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);
    let first = common::create_order_with_items(&pool, &[product]).await;
    let second = common::create_order_with_items(&pool, &[product]).await;

    let orders = Order::list_for_user(&pool, 1).await?;
    let ids: Vec<i64> = orders.iter().map(|order| order.order_id).collect();
    assert!(ids.contains(&first.order_id));
    assert!(ids.contains(&second.order_id));

    assert!(Order::list_for_user(&pool, 999).await?.is_empty());

    Ok(())
}
