use super::*;

/// Tests recording an analysis in the search history.
///
/// Expected: Ok with the sentiment label stored and parsed back
#[tokio::test]
async fn records_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SearchHistoryRepository::new(db);
    let entry = repo
        .create(CreateSearchHistoryParam {
            user_id: user.id,
            keyword: "rust".to_string(),
            sentiment: Sentiment::Positive,
            volume: 150,
            top_subreddit: "fosstodon.org".to_string(),
        })
        .await?;

    assert_eq!(entry.keyword, "rust");
    assert_eq!(entry.sentiment, Sentiment::Positive);
    assert_eq!(entry.volume, 150);

    Ok(())
}
