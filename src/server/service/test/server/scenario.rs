use super::*;

/// Tests the two-server directory: A in "Gaming" with 3 members, B in "Music"
/// with 1 member.
///
/// Verifies that `category=gam&with_num_members=true` returns only A with a
/// count of 3.
///
/// Expected: Ok(Vec) with A and Some(3)
#[tokio::test]
async fn category_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, a, _) = factory::helpers::create_server_in_category(db, "Gaming", 3).await?;
    factory::helpers::create_server_in_category(db, "Music", 1).await?;

    let params = ServerListParams {
        category: Some("gam".to_string()),
        with_num_members: true,
        ..Default::default()
    };
    let servers = ServerService::new(db).list(&params).await?;

    assert_eq!(ids(&servers), vec![a.id]);
    assert_eq!(servers[0].num_members, Some(3));

    Ok(())
}

/// Tests `quantity=1` on the same directory.
///
/// Expected: Ok(Vec) with exactly A
#[tokio::test]
async fn quantity_one_returns_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, a, _) = factory::helpers::create_server_in_category(db, "Gaming", 3).await?;
    factory::helpers::create_server_in_category(db, "Music", 1).await?;

    let params = ServerListParams {
        quantity: Some("1".to_string()),
        ..Default::default()
    };
    let servers = ServerService::new(db).list(&params).await?;

    assert_eq!(ids(&servers), vec![a.id]);
    assert_eq!(servers[0].num_members, None);

    Ok(())
}
