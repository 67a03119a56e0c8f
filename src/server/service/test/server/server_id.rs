use super::*;

fn with_id(id: &str) -> ServerListParams {
    ServerListParams {
        by_server_id: Some(id.to_string()),
        ..Default::default()
    }
}

/// Tests selecting a single server by id.
///
/// Expected: Ok(Vec) with exactly that server
#[tokio::test]
async fn selects_exact_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;
    let target = factory::create_server(db).await?;

    let servers = ServerService::new(db)
        .list(&with_id(&target.id.to_string()))
        .await?;

    assert_eq!(ids(&servers), vec![target.id]);

    Ok(())
}

/// Tests an id that matches nothing.
///
/// Expected: Err(FilterError::ServerNotFound) with the requested id in the message
#[tokio::test]
async fn missing_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;

    let result = ServerService::new(db).list(&with_id("777")).await;

    match result {
        Err(AppError::FilterErr(err @ FilterError::ServerNotFound(777))) => {
            assert_eq!(err.to_string(), "server with id 777 not found");
        }
        other => panic!("Expected ServerNotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests that the id filter is evaluated against the truncated set.
///
/// Verifies that an existing server outside the first N is reported as not
/// found, while one inside the window is returned.
///
/// Expected: Err(ServerNotFound) for the third server, Ok for the first
#[tokio::test]
async fn id_outside_truncated_window_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    factory::create_server(db).await?;
    let third = factory::create_server(db).await?;

    let service = ServerService::new(db);

    let outside = ServerListParams {
        quantity: Some("2".to_string()),
        by_server_id: Some(third.id.to_string()),
        ..Default::default()
    };
    assert!(matches!(
        service.list(&outside).await,
        Err(AppError::FilterErr(FilterError::ServerNotFound(_)))
    ));

    let inside = ServerListParams {
        quantity: Some("2".to_string()),
        by_server_id: Some(first.id.to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&service.list(&inside).await?), vec![first.id]);

    Ok(())
}

/// Tests that an id excluded by the category filter is not found.
///
/// Expected: Err(ServerNotFound)
#[tokio::test]
async fn id_excluded_by_category_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_in_category(db, "Gaming", 0).await?;
    let (_, music, _) = factory::helpers::create_server_in_category(db, "Music", 0).await?;

    let params = ServerListParams {
        category: Some("gaming".to_string()),
        by_server_id: Some(music.id.to_string()),
        ..Default::default()
    };
    let result = ServerService::new(db).list(&params).await;

    assert!(matches!(
        result,
        Err(AppError::FilterErr(FilterError::ServerNotFound(_)))
    ));

    Ok(())
}

/// Tests a non-numeric id.
///
/// Expected: Err(FilterError::InvalidServerId)
#[tokio::test]
async fn rejects_non_numeric_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServerService::new(db).list(&with_id("abc")).await;

    assert!(matches!(
        result,
        Err(AppError::FilterErr(FilterError::InvalidServerId(_)))
    ));

    Ok(())
}
