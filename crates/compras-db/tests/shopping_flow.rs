use compras_core::{Product, ShoppingList};
use compras_db::{Database, DbConfig};

async fn open_store() -> Database {
    Database::open(DbConfig::in_memory())
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn groceries_walkthrough() {
    let db = open_store().await;

    let list_id = db.shopping_lists().insert("Groceries").await.unwrap();
    assert_eq!(list_id, 1);

    let milk_id = db.products().insert("Milk", 2).await.unwrap();
    assert_eq!(milk_id, 1);

    let milk = db.products().get_by_id(milk_id).await.unwrap().unwrap();
    assert!(!milk.is_completed);

    db.products().toggle_completed(&milk).await.unwrap();

    assert_eq!(
        db.products().fetch_all().await.unwrap(),
        vec![Product {
            id: 1,
            name: "Milk".to_string(),
            quantity: 2,
            is_completed: true,
            shopping_list_id: None,
        }]
    );
}

#[tokio::test]
async fn deleting_a_list_orphans_its_products() {
    let db = open_store().await;

    let list_id = db.shopping_lists().insert("Party").await.unwrap();
    let chips = db.products().insert_in_list("Chips", 3, list_id).await.unwrap();
    let soda = db.products().insert_in_list("Soda", 6, list_id).await.unwrap();

    db.shopping_lists().delete(list_id).await.unwrap();

    assert!(db.shopping_lists().get_by_id(list_id).await.unwrap().is_none());

    let orphans = db.products().fetch_by_list(list_id).await.unwrap();
    let mut ids: Vec<i64> = orphans.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![chips, soda]);
    assert!(orphans.iter().all(|p| p.shopping_list_id == Some(list_id)));
}

#[tokio::test]
async fn list_ids_survive_deletion_of_the_newest() {
    let db = open_store().await;
    let lists = db.shopping_lists();

    let first = lists.insert("Groceries").await.unwrap();
    lists.delete(first).await.unwrap();
    let second = lists.insert("Groceries again").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(
        lists.fetch_all().await.unwrap(),
        vec![ShoppingList {
            id: second,
            name: "Groceries again".to_string(),
            is_favorite: false,
        }]
    );
}

#[tokio::test]
async fn products_and_lists_are_independent() {
    let db = open_store().await;

    db.products().insert("Milk", 1).await.unwrap();
    db.shopping_lists().insert("Groceries").await.unwrap();
    db.shopping_lists().insert("Hardware").await.unwrap();

    assert_eq!(db.products().count().await.unwrap(), 1);
    assert_eq!(db.shopping_lists().count().await.unwrap(), 2);

    // A reference to a list that never existed is stored as-is
    let stray = db.products().insert_in_list("Nails", 50, 999).await.unwrap();
    assert_eq!(
        db.products()
            .get_by_id(stray)
            .await
            .unwrap()
            .unwrap()
            .shopping_list_id,
        Some(999)
    );
}
