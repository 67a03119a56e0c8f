use super::*;

/// Tests that the repository executes the select it is given.
///
/// Verifies that filters and ordering on the select are respected.
///
/// Expected: Ok(Vec) with only the matching server
#[tokio::test]
async fn runs_shaped_select() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let keep = factory::server::ServerFactory::new(db)
        .name("Keep")
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("Drop")
        .build()
        .await?;

    let select = Server::find()
        .filter(entity::server::Column::Name.eq("Keep"))
        .order_by_asc(entity::server::Column::Id);
    let servers = ServerRepository::new(db).find(select).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, keep.id);

    Ok(())
}

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let servers = ServerRepository::new(db).find(Server::find()).await?;

    assert!(servers.is_empty());

    Ok(())
}
