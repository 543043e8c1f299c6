use super::*;

/// Tests deleting an item through a staged delete.
///
/// Expected: Ok, row gone after save
#[tokio::test]
async fn delete_removes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::create_item(db, category.id).await?;

    let mut uow = UnitOfWork::new(db);
    uow.items.remove(item.clone());
    uow.save().await.unwrap();

    let stored = uow.items.get_by_id(item.id, ItemInclude::Bare).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a category that owns no items.
///
/// Expected: Ok, row gone after save
#[tokio::test]
async fn delete_removes_empty_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let mut uow = UnitOfWork::new(db);
    uow.categories.remove(category.clone());
    uow.save().await.unwrap();

    let stored = uow
        .categories
        .get_by_id(category.id, CategoryInclude::Bare)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests the restrict-on-delete policy: a category with items cannot be
/// deleted, and the failed save leaves both rows intact.
///
/// Expected: Err from save, category and item still stored
#[tokio::test]
async fn delete_referenced_category_is_restricted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::create_item(db, category.id).await?;

    let mut uow = UnitOfWork::new(db);
    uow.categories.remove(category.clone());
    let result = uow.save().await;

    assert!(result.is_err());

    let stored_category = uow
        .categories
        .get_by_id(category.id, CategoryInclude::Items)
        .await?
        .expect("category should survive the rejected delete");
    assert_eq!(stored_category.items.len(), 1);
    assert_eq!(stored_category.items[0].id, item.id);

    Ok(())
}
