use super::*;

/// Tests getting all categories with their items eager-loaded.
///
/// Expected: Ok with every category and its owned items
#[tokio::test]
async fn gets_all_categories_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let electronics = factory::create_category(db).await?;
    let furniture = factory::create_category(db).await?;
    factory::create_item(db, electronics.id).await?;
    factory::create_item(db, electronics.id).await?;

    let repo = CategoryRepository::new(db.clone());
    let mut result = repo.get_all(CategoryInclude::Items).await?;

    assert_eq!(result.len(), 2);
    result.sort_by_key(|c| c.category.id);

    assert_eq!(result[0].category.id, electronics.id);
    assert_eq!(result[0].items.len(), 2);
    assert_eq!(result[1].category.id, furniture.id);
    assert!(result[1].items.is_empty());

    Ok(())
}

/// Tests that the bare include skips the item join.
///
/// Expected: Ok with empty item collections
#[tokio::test]
async fn bare_include_leaves_items_unloaded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_item(db, category.id).await?;

    let repo = CategoryRepository::new(db.clone());
    let result = repo.get_all(CategoryInclude::Bare).await?;

    assert_eq!(result.len(), 1);
    assert!(result[0].items.is_empty());

    Ok(())
}

/// Tests getting all categories from an empty store.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db.clone());
    let result = repo.get_all(CategoryInclude::Items).await?;

    assert!(result.is_empty());

    Ok(())
}
