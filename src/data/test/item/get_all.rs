use super::*;

/// Tests getting all items with their category eager-loaded in one query.
///
/// Expected: Ok with every item carrying its category row
#[tokio::test]
async fn gets_all_items_with_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_item(db, category.id).await?;
    factory::create_item(db, category.id).await?;

    let repo = ItemRepository::new(db.clone());
    let result = repo.get_all(ItemInclude::Category).await?;

    assert_eq!(result.len(), 2);
    for item in &result {
        let joined = item.category.as_ref().expect("category should be loaded");
        assert_eq!(joined.id, category.id);
        assert_eq!(joined.name, category.name);
    }

    Ok(())
}

/// Tests that the bare include skips the category join.
///
/// Expected: Ok with no category rows attached
#[tokio::test]
async fn bare_include_leaves_category_unloaded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_item(db, category.id).await?;

    let repo = ItemRepository::new(db.clone());
    let result = repo.get_all(ItemInclude::Bare).await?;

    assert_eq!(result.len(), 1);
    assert!(result[0].category.is_none());

    Ok(())
}
