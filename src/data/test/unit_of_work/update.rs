use super::*;

/// Tests that a staged update overwrites every mutable field on save.
///
/// Expected: Ok with all fields replaced by the staged values
#[tokio::test]
async fn update_overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::create_item(db, category.id).await?;

    let mut uow = UnitOfWork::new(db);
    let mut updated = item.clone();
    updated.name = "Braided cable".to_string();
    updated.description = Some("Two meters".to_string());
    updated.quantity = 42;
    updated.price = rust_decimal::Decimal::new(1999, 2);

    uow.items.update(updated);
    uow.save().await.unwrap();

    let stored = uow
        .items
        .get_by_id(item.id, ItemInclude::Bare)
        .await?
        .expect("item should still exist");
    assert_eq!(stored.item.name, "Braided cable");
    assert_eq!(stored.item.description.as_deref(), Some("Two meters"));
    assert_eq!(stored.item.quantity, 42);
    assert_eq!(stored.item.price, rust_decimal::Decimal::new(1999, 2));

    Ok(())
}

/// Tests renaming a category through a staged update.
///
/// Expected: Ok with the new name visible to subsequent reads
#[tokio::test]
async fn update_renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let mut uow = UnitOfWork::new(db);
    let mut renamed = category.clone();
    renamed.name = "Home Electronics".to_string();

    uow.categories.update(renamed);
    uow.save().await.unwrap();

    let stored = uow
        .categories
        .get_by_id(category.id, CategoryInclude::Bare)
        .await?
        .expect("category should still exist");
    assert_eq!(stored.category.name, "Home Electronics");

    Ok(())
}

/// Tests that retargeting an item to a missing category fails at save time
/// and leaves the stored reference unchanged.
///
/// Expected: Err from save, prior category_id still stored
#[tokio::test]
async fn update_to_missing_category_fails_and_keeps_prior_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::create_item(db, category.id).await?;

    let mut uow = UnitOfWork::new(db);
    let mut retargeted = item.clone();
    retargeted.category_id = 9999;

    uow.items.update(retargeted);
    let result = uow.save().await;

    assert!(result.is_err());

    let stored = uow
        .items
        .get_by_id(item.id, ItemInclude::Bare)
        .await?
        .expect("item should still exist");
    assert_eq!(stored.item.category_id, category.id);

    Ok(())
}
