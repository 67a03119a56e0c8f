use super::*;

/// Tests grouping channels of several servers.
///
/// Verifies that each server id maps to its own channels in id order and that
/// servers without channels are absent from the map.
///
/// Expected: Ok(HashMap) with two entries
#[tokio::test]
async fn groups_channels_by_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let empty = factory::create_server(db).await?;

    let a = factory::create_channel(db, &first).await?;
    let b = factory::create_channel(db, &first).await?;
    let c = factory::create_channel(db, &second).await?;

    let channels = ChannelRepository::new(db)
        .get_by_server_ids(&[first.id, second.id, empty.id])
        .await?;

    assert_eq!(channels.len(), 2);
    let first_ids: Vec<i32> = channels[&first.id].iter().map(|c| c.id).collect();
    assert_eq!(first_ids, vec![a.id, b.id]);
    assert_eq!(channels[&second.id][0].id, c.id);
    assert!(!channels.contains_key(&empty.id));

    Ok(())
}

/// Tests that an empty id list does not query.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn empty_ids_return_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channels = ChannelRepository::new(db).get_by_server_ids(&[]).await?;

    assert!(channels.is_empty());

    Ok(())
}
