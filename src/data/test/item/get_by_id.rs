use super::*;

/// Tests getting an item by ID with its category joined.
///
/// Expected: Ok(Some) with all stored fields and the category row
#[tokio::test]
async fn gets_item_with_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let item = factory::item::ItemFactory::new(db, category.id)
        .name("Cable")
        .description("Two meters, braided")
        .quantity(10)
        .build()
        .await?;

    let repo = ItemRepository::new(db.clone());
    let result = repo.get_by_id(item.id, ItemInclude::Category).await?;

    let found = result.expect("item should exist");
    assert_eq!(found.item.name, "Cable");
    assert_eq!(found.item.description.as_deref(), Some("Two meters, braided"));
    assert_eq!(found.item.quantity, 10);
    assert_eq!(found.category.unwrap().id, category.id);

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

    let repo = ItemRepository::new(db.clone());
    let result = repo.get_by_id(4242, ItemInclude::Category).await?;

    assert!(result.is_none());

    Ok(())
}
