use sea_orm::Database;
use uuid::Uuid;

use ledger::{Ledger, LedgerError};
use migration::MigratorTrait;

async fn ledger() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::builder().database(db).build().await.unwrap()
}

#[tokio::test]
async fn new_account_starts_active_with_zero_balances() {
    let ledger = ledger().await;

    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();

    assert_eq!(account.cash_minor, 0);
    assert_eq!(account.credit_minor, 0);
    assert!(account.is_active);

    let fetched = ledger.account(account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.full_name, "Ada");
    assert_eq!(fetched.family_name, "Lovelace");
    assert_eq!(fetched.id_number, "P100");
}

#[tokio::test]
async fn create_trims_and_rejects_blank_fields() {
    let ledger = ledger().await;

    let account = ledger
        .create_account(" Ada ", "Lovelace", "P100")
        .await
        .unwrap();
    assert_eq!(account.full_name, "Ada");

    let err = ledger
        .create_account("  ", "Lovelace", "P200")
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::MissingField(_)));

    let err = ledger.create_account("Ada", "Lovelace", "").await.unwrap_err();
    assert!(matches!(err, LedgerError::MissingField(_)));
}

#[tokio::test]
async fn duplicate_id_number_is_rejected() {
    let ledger = ledger().await;

    ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();
    let err = ledger
        .create_account("Grace", "Hopper", "P100")
        .await
        .unwrap_err();

    assert_eq!(err, LedgerError::ExistingKey("P100".to_string()));
}

#[tokio::test]
async fn deposit_moves_cash_in_both_directions() {
    let ledger = ledger().await;
    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();

    let account_after = ledger.deposit_cash(account.id, 1500).await.unwrap();
    assert_eq!(account_after.cash_minor, 1500);

    // Negative amounts withdraw; sign is unrestricted by policy.
    let account_after = ledger.deposit_cash(account.id, -2000).await.unwrap();
    assert_eq!(account_after.cash_minor, -500);

    let err = ledger.deposit_cash(account.id, 0).await.unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[tokio::test]
async fn update_credit_adjusts_the_line() {
    let ledger = ledger().await;
    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();

    let account_after = ledger.update_credit(account.id, 2000).await.unwrap();
    assert_eq!(account_after.credit_minor, 2000);

    let account_after = ledger.update_credit(account.id, -500).await.unwrap();
    assert_eq!(account_after.credit_minor, 1500);

    let err = ledger.update_credit(account.id, 0).await.unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[tokio::test]
async fn operations_on_missing_account_fail() {
    let ledger = ledger().await;
    let ghost = Uuid::new_v4();

    assert!(matches!(
        ledger.account(ghost).await.unwrap_err(),
        LedgerError::KeyNotFound(_)
    ));
    assert!(matches!(
        ledger.deposit_cash(ghost, 100).await.unwrap_err(),
        LedgerError::KeyNotFound(_)
    ));
    assert!(matches!(
        ledger.delete_account(ghost).await.unwrap_err(),
        LedgerError::KeyNotFound(_)
    ));
}

#[tokio::test]
async fn inactive_account_rejects_deposit_and_credit() {
    let ledger = ledger().await;
    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();
    ledger.set_active(account.id, false).await.unwrap();

    let err = ledger.deposit_cash(account.id, 100).await.unwrap_err();
    assert!(matches!(err, LedgerError::InactiveAccount(_)));

    let err = ledger.update_credit(account.id, 100).await.unwrap_err();
    assert!(matches!(err, LedgerError::InactiveAccount(_)));
}

#[tokio::test]
async fn set_active_is_idempotent() {
    let ledger = ledger().await;
    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();

    // Setting the current value twice succeeds and changes nothing.
    let first = ledger.set_active(account.id, true).await.unwrap();
    let second = ledger.set_active(account.id, true).await.unwrap();
    assert!(first.is_active);
    assert_eq!(first, second);

    let deactivated = ledger.set_active(account.id, false).await.unwrap();
    assert!(!deactivated.is_active);
    let again = ledger.set_active(account.id, false).await.unwrap();
    assert_eq!(again, deactivated);
}

#[tokio::test]
async fn delete_requires_an_inactive_account() {
    let ledger = ledger().await;
    let account = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();

    let err = ledger.delete_account(account.id).await.unwrap_err();
    assert!(matches!(err, LedgerError::PreconditionFailed(_)));

    ledger.set_active(account.id, false).await.unwrap();
    ledger.delete_account(account.id).await.unwrap();

    let err = ledger.account(account.id).await.unwrap_err();
    assert!(matches!(err, LedgerError::KeyNotFound(_)));
}

#[tokio::test]
async fn accounts_lists_in_creation_order() {
    let ledger = ledger().await;
    let first = ledger
        .create_account("Ada", "Lovelace", "P100")
        .await
        .unwrap();
    let second = ledger
        .create_account("Grace", "Hopper", "P200")
        .await
        .unwrap();

    let all = ledger.accounts().await.unwrap();
    let ids: Vec<_> = all.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn cash_filter_covers_all_four_operators() {
    let ledger = ledger().await;
    for (i, cash) in [10_i64, 20, 20, 30].iter().enumerate() {
        let account = ledger
            .create_account("Ada", "Lovelace", &format!("P{i}"))
            .await
            .unwrap();
        ledger.deposit_cash(account.id, *cash).await.unwrap();
    }

    let gte = ledger.accounts_by_cash(20, true, true).await.unwrap();
    assert_eq!(gte.len(), 3);

    let gt = ledger.accounts_by_cash(20, true, false).await.unwrap();
    assert_eq!(gt.len(), 1);
    assert_eq!(gt[0].cash_minor, 30);

    let lte = ledger.accounts_by_cash(20, false, true).await.unwrap();
    assert_eq!(lte.len(), 3);

    let lt = ledger.accounts_by_cash(20, false, false).await.unwrap();
    assert_eq!(lt.len(), 1);
    assert_eq!(lt[0].cash_minor, 10);
}
