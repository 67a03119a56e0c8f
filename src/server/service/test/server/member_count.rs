use super::*;

/// Tests that requested counts equal the true member counts.
///
/// Expected: Ok(Vec) with 2 and 0
#[tokio::test]
async fn attaches_true_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = factory::helpers::create_users(db, 2).await?;
    let member_ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    factory::server::ServerFactory::new(db)
        .members(&member_ids)
        .build()
        .await?;
    factory::create_server(db).await?;

    let params = ServerListParams {
        with_num_members: true,
        ..Default::default()
    };
    let servers = ServerService::new(db).list(&params).await?;

    let counts: Vec<Option<u64>> = servers.iter().map(|s| s.num_members).collect();
    assert_eq!(counts, vec![Some(2), Some(0)]);

    Ok(())
}

/// Tests that counts are not narrowed by the membership filter.
///
/// Verifies that filtering by the caller's membership still counts every
/// member of the remaining servers.
///
/// Expected: Ok(Vec) with the full count of 3
#[tokio::test]
async fn membership_filter_keeps_full_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = factory::helpers::create_users(db, 3).await?;
    let member_ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    factory::server::ServerFactory::new(db)
        .members(&member_ids)
        .build()
        .await?;

    let params = ServerListParams {
        by_user: true,
        with_num_members: true,
        caller_id: Some(users[0].id),
        ..Default::default()
    };
    let servers = ServerService::new(db).list(&params).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].num_members, Some(3));

    Ok(())
}

/// Tests that counts are left unset when not requested.
///
/// Expected: Ok(Vec) with num_members None
#[tokio::test]
async fn counts_absent_when_not_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::server::ServerFactory::new(db)
        .members(&[user.id])
        .build()
        .await?;

    let servers = ServerService::new(db)
        .list(&ServerListParams::default())
        .await?;

    assert_eq!(servers[0].num_members, None);

    Ok(())
}
