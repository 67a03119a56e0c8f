use super::*;

fn first(quantity: &str) -> ServerListParams {
    ServerListParams {
        quantity: Some(quantity.to_string()),
        ..Default::default()
    }
}

/// Tests truncation to the first N servers in natural order.
///
/// Expected: Ok(Vec) with the two lowest ids
#[tokio::test]
async fn keeps_first_servers_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_server(db).await?;
    let b = factory::create_server(db).await?;
    factory::create_server(db).await?;

    let servers = ServerService::new(db).list(&first("2")).await?;

    assert_eq!(ids(&servers), vec![a.id, b.id]);

    Ok(())
}

/// Tests truncation beyond the set size and to zero.
///
/// Expected: Ok(Vec) with all servers, then Ok(empty Vec)
#[tokio::test]
async fn handles_large_and_zero_quantities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;
    factory::create_server(db).await?;

    let service = ServerService::new(db);
    assert_eq!(service.list(&first("50")).await?.len(), 2);
    assert!(service.list(&first("0")).await?.is_empty());

    Ok(())
}

/// Tests quantities too large for a SQLite LIMIT.
///
/// Verifies that `u64::MAX` and `i64::MAX + 1` behave like any quantity larger
/// than the set.
///
/// Expected: Ok(Vec) with all servers for both quantities
#[tokio::test]
async fn quantity_beyond_signed_range_keeps_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_server(db).await?;
    let b = factory::create_server(db).await?;

    let service = ServerService::new(db);
    assert_eq!(
        ids(&service.list(&first("18446744073709551615")).await?),
        vec![a.id, b.id]
    );
    assert_eq!(
        ids(&service.list(&first("9223372036854775808")).await?),
        vec![a.id, b.id]
    );

    Ok(())
}

/// Tests that truncation applies after the category filter.
///
/// Expected: Ok(Vec) with the first matching server, not the first overall
#[tokio::test]
async fn truncates_after_category_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_in_category(db, "Music", 0).await?;
    let (gaming, first_gaming, _) =
        factory::helpers::create_server_in_category(db, "Gaming", 0).await?;
    factory::server::ServerFactory::new(db)
        .category(gaming.id)
        .build()
        .await?;

    let params = ServerListParams {
        category: Some("gaming".to_string()),
        quantity: Some("1".to_string()),
        ..Default::default()
    };
    let servers = ServerService::new(db).list(&params).await?;

    assert_eq!(ids(&servers), vec![first_gaming.id]);

    Ok(())
}

/// Tests malformed quantities.
///
/// Expected: Err(FilterError::InvalidQuantity) for text and negative input
#[tokio::test]
async fn rejects_malformed_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerService::new(db);
    for raw in ["many", "-1"] {
        let result = service.list(&first(raw)).await;
        assert!(matches!(
            result,
            Err(AppError::FilterErr(FilterError::InvalidQuantity(_)))
        ));
    }

    Ok(())
}
