use super::*;

/// Tests deleting an owned keyword.
///
/// Expected: Ok(true) and the keyword is gone
#[tokio::test]
async fn deletes_owned_keyword() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let keyword = factory::create_keyword(db, user.id).await?;

    let repo = KeywordRepository::new(db);
    assert!(repo.delete(user.id, keyword.id).await?);
    assert_eq!(repo.count_by_user(user.id).await?, 0);

    Ok(())
}

/// Tests that users cannot delete each other's keywords.
///
/// Expected: Ok(false) and the keyword survives
#[tokio::test]
async fn ignores_foreign_keyword() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let keyword = factory::create_keyword(db, owner.id).await?;

    let repo = KeywordRepository::new(db);
    assert!(!repo.delete(intruder.id, keyword.id).await?);
    assert_eq!(repo.count_by_user(owner.id).await?, 1);

    Ok(())
}
