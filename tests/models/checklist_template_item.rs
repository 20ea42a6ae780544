//! ChecklistTemplateItem model tests

use sqlx::PgPool;

use cart_core::error::CartCoreError;
use cart_core::models::checklist_item::{ChecklistItem, NewChecklistItem};
use cart_core::models::checklist_template_item::ChecklistTemplateItem;
use cart_core::models::order_checklist::OrderChecklist;
use cart_core::models::product::{ChecklistTemplated, ProductRef, ProductType};

use crate::common;

#[sqlx::test(migrations = "./migrations")]
async fn test_template_item_crud(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);

    let created =
        common::create_template_item(&pool, product, "Review order details", 0, false).await;
    assert_eq!(created.name, "Review order details");
    assert_eq!(created.position, 0);
    assert!(!created.is_optional);

    let found = ChecklistTemplateItem::find_by_id(&pool, created.template_item_id)
        .await?
        .expect("template item not found");
    assert_eq!(found.template_item_id, created.template_item_id);

    let updated = ChecklistTemplateItem::update(
        &pool,
        created.template_item_id,
        "Review order details carefully",
        "Check every line item",
        3,
        true,
    )
    .await?;
    assert_eq!(updated.name, "Review order details carefully");
    assert_eq!(updated.position, 3);
    assert!(updated.is_optional);

    ChecklistTemplateItem::delete(&pool, created.template_item_id)
        .await
        .expect("unreferenced template item should delete");
    assert!(
        ChecklistTemplateItem::find_by_id(&pool, created.template_item_id)
            .await?
            .is_none()
    );

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_template_ordering_with_tie_break(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);

    // Same position: creation order decides
    let second = common::create_template_item(&pool, product, "Second", 1, false).await;
    let third = common::create_template_item(&pool, product, "Third", 1, false).await;
    let first = common::create_template_item(&pool, product, "First", 0, false).await;

    let items = ChecklistTemplateItem::list_for_product(&pool, product).await?;
    let ids: Vec<i64> = items.iter().map(|item| item.template_item_id).collect();
    assert_eq!(
        ids,
        vec![
            first.template_item_id,
            second.template_item_id,
            third.template_item_id
        ]
    );

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_templates_are_scoped_per_product(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let campaign = common::create_campaign(&pool, "Door-to-door").await;

    common::create_template_item(
        &pool,
        ProductRef::new(ProductType::Package, package.package_id),
        "Package step",
        0,
        false,
    )
    .await;

    let campaign_items = campaign.checklist_template_items(&pool).await?;
    assert!(campaign_items.is_empty());

    let package_items = package.checklist_template_items(&pool).await?;
    assert_eq!(package_items.len(), 1);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_blocked_while_referenced(pool: PgPool) -> sqlx::Result<()> {
    let package = common::create_package(&pool, "Starter Pack").await;
    let product = ProductRef::new(ProductType::Package, package.package_id);
    let template_item =
        common::create_template_item(&pool, product, "Prepare materials", 0, false).await;

    let order = common::create_order_with_items(&pool, &[product]).await;
    let checklist = OrderChecklist::try_create(&pool, order.order_id)
        .await?
        .expect("first creation wins");
    ChecklistItem::create(
        &pool,
        checklist.checklist_id,
        NewChecklistItem {
            template_item_id: Some(template_item.template_item_id),
            description: template_item.name.clone(),
            order_index: 0,
            is_optional: false,
        },
    )
    .await?;

    let result = ChecklistTemplateItem::delete(&pool, template_item.template_item_id).await;
    assert!(matches!(
        result,
        Err(CartCoreError::TemplateItemInUse { template_item_id })
            if template_item_id == template_item.template_item_id
    ));

    // Still present after the refused delete
    assert!(
        ChecklistTemplateItem::find_by_id(&pool, template_item.template_item_id)
            .await?
            .is_some()
    );

    Ok(())
}
