use super::*;

/// Tests listing without parameters.
///
/// Verifies that every server is returned in ascending id order without member
/// counts.
///
/// Expected: Ok(Vec) with all servers, num_members unset
#[tokio::test]
async fn lists_all_servers_without_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let third = factory::create_server(db).await?;

    let servers = ServerService::new(db)
        .list(&ServerListParams::default())
        .await?;

    assert_eq!(ids(&servers), vec![first.id, second.id, third.id]);
    assert!(servers.iter().all(|s| s.num_members.is_none()));

    Ok(())
}

/// Tests listing an empty directory.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_directory_lists_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let servers = ServerService::new(db)
        .list(&ServerListParams::default())
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests that channels are attached to their servers.
///
/// Expected: Ok(Vec) where each server carries only its own channels
#[tokio::test]
async fn attaches_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let with_channel = factory::create_server(db).await?;
    let without_channel = factory::create_server(db).await?;
    let channel = factory::channel::ChannelFactory::new(db, with_channel.id, with_channel.owner_id)
        .name("General")
        .build()
        .await?;

    let servers = ServerService::new(db)
        .list(&ServerListParams::default())
        .await?;

    assert_eq!(servers[0].id, with_channel.id);
    assert_eq!(servers[0].channels.len(), 1);
    assert_eq!(servers[0].channels[0].id, channel.id);
    assert_eq!(servers[0].channels[0].name, "general");
    assert_eq!(servers[1].id, without_channel.id);
    assert!(servers[1].channels.is_empty());

    Ok(())
}
