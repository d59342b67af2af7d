use super::*;

/// Tests adding a keyword and counting it.
///
/// Expected: Ok with the keyword stored and count 1
#[tokio::test]
async fn creates_keyword_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = KeywordRepository::new(db);
    let keyword = repo
        .create(CreateKeywordParam {
            user_id: user.id,
            keyword: "electric vehicles".to_string(),
        })
        .await?;

    assert_eq!(keyword.keyword, "electric vehicles");
    assert_eq!(keyword.user_id, user.id);
    assert_eq!(repo.count_by_user(user.id).await?, 1);

    Ok(())
}
