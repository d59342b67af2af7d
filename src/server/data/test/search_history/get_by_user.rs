use super::*;

/// Tests reading history newest first with a cap.
///
/// Expected: the two most recent rows in descending order
#[tokio::test]
async fn returns_newest_rows_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (keyword, hours_ago) in [("first", 3), ("second", 2), ("third", 1)] {
        factory::search_history::SearchHistoryFactory::new(db, user.id)
            .keyword(keyword)
            .created_at(Utc::now() - Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let repo = SearchHistoryRepository::new(db);
    let limited = repo.get_by_user(user.id, Some(2)).await?;
    let all = repo.get_by_user(user.id, None).await?;

    let names: Vec<_> = limited.iter().map(|e| e.keyword.as_str()).collect();
    assert_eq!(names, vec!["third", "second"]);
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that another user's history is not returned.
///
/// Expected: empty list for a user with no searches
#[tokio::test]
async fn scopes_history_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    factory::create_search_history(db, searcher.id).await?;

    let history = SearchHistoryRepository::new(db)
        .get_by_user(bystander.id, None)
        .await?;

    assert!(history.is_empty());

    Ok(())
}
