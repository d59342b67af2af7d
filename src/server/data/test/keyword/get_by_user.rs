use super::*;

/// Tests listing keywords newest first and scoped to the owner.
///
/// Expected: only the owner's keywords, most recent first
#[tokio::test]
async fn lists_owner_keywords_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::keyword::KeywordFactory::new(db, owner.id)
        .keyword("old")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    factory::keyword::KeywordFactory::new(db, owner.id)
        .keyword("new")
        .created_at(Utc::now())
        .build()
        .await?;
    factory::create_keyword(db, other.id).await?;

    let keywords = KeywordRepository::new(db).get_by_user(owner.id).await?;

    let names: Vec<_> = keywords.iter().map(|k| k.keyword.as_str()).collect();
    assert_eq!(names, vec!["new", "old"]);

    Ok(())
}
