use super::*;

/// Tests all-or-nothing semantics across both repositories: when one staged
/// change fails, nothing from the batch is applied.
///
/// Expected: Err from save, neither the category nor the item persisted
#[tokio::test]
async fn failed_save_rolls_back_every_staged_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db);
    uow.categories.add(entity::category::ActiveModel {
        name: ActiveValue::Set("Electronics".to_string()),
        ..Default::default()
    });
    // References a category id that does not exist
    uow.items.add(entity::item::ActiveModel {
        name: ActiveValue::Set("Cable".to_string()),
        description: ActiveValue::Set(None),
        quantity: ActiveValue::Set(1),
        price: ActiveValue::Set(rust_decimal::Decimal::new(100, 2)),
        category_id: ActiveValue::Set(9999),
        ..Default::default()
    });

    let result = uow.save().await;
    assert!(result.is_err());

    let categories = entity::prelude::Category::find().all(db).await?;
    let items = entity::prelude::Item::find().all(db).await?;
    assert!(categories.is_empty());
    assert!(items.is_empty());

    Ok(())
}

/// Tests that a failed batch can be retried cleanly: the staged list is
/// drained by save, so the unit of work holds no leftover state.
///
/// Expected: staged lists empty after the failed save
#[tokio::test]
async fn failed_save_drains_staged_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db);
    uow.items.add(entity::item::ActiveModel {
        name: ActiveValue::Set("Orphan".to_string()),
        description: ActiveValue::Set(None),
        quantity: ActiveValue::Set(1),
        price: ActiveValue::Set(rust_decimal::Decimal::new(100, 2)),
        category_id: ActiveValue::Set(9999),
        ..Default::default()
    });

    let result = uow.save().await;
    assert!(result.is_err());
    assert_eq!(uow.items.staged_len(), 0);

    // A follow-up save has nothing staged and succeeds as a no-op
    let report = uow.save().await.unwrap();
    assert!(report.created_items.is_empty());

    Ok(())
}
