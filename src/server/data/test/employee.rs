use super::*;
use crate::server::data::employee::EmployeeRepository;

/// Tests creating an employee.
///
/// Verifies that new employees are enabled and store the given hash as is.
///
/// Expected: Ok with enabled employee
#[tokio::test]
async fn creates_enabled_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(
            "Alice".to_string(),
            "alice".to_string(),
            "hash".to_string(),
        )
        .await?;

    assert_eq!(employee.username, "alice");
    assert_eq!(employee.password, "hash");
    assert_eq!(employee.status, 1);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err when inserting a duplicate username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::EmployeeFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let result = repo
        .create(
            "Other Alice".to_string(),
            "alice".to_string(),
            "hash".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests finding an employee by username.
///
/// Expected: Some for a known username, None otherwise
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::EmployeeFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);

    let found = repo.find_by_username("bob").await?;
    assert_eq!(found.map(|e| e.id), Some(employee.id));

    let missing = repo.find_by_username("nobody").await?;
    assert!(missing.is_none());

    Ok(())
}
