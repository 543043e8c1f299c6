use super::*;

/// Tests getting a category by ID with its items eager-loaded.
///
/// Expected: Ok(Some) with the owned items present
#[tokio::test]
async fn gets_category_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::create_item(db, category.id).await?;

    let repo = CategoryRepository::new(db.clone());
    let result = repo.get_by_id(category.id, CategoryInclude::Items).await?;

    let found = result.expect("category should exist");
    assert_eq!(found.category.id, category.id);
    assert_eq!(found.category.name, category.name);
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].id, item.id);

    Ok(())
}

/// Tests the absent case: an unknown id is not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db.clone());
    let result = repo.get_by_id(4242, CategoryInclude::Items).await?;

    assert!(result.is_none());

    Ok(())
}
