//! Tests for account snapshot models and the snapshot store.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::accounts::{AccountsSnapshot, BankAccountRef, SnapshotStore, UserAccountRef};

    fn account(id: &str, balance: &str, active: bool) -> UserAccountRef {
        UserAccountRef {
            id: id.to_string(),
            name: format!("Account {id}"),
            currency: "USD".to_string(),
            cash_balance: balance.parse().unwrap(),
            is_active: active,
            ..UserAccountRef::default()
        }
    }

    fn bank_account(id: &str, verified: bool) -> BankAccountRef {
        BankAccountRef {
            id: id.to_string(),
            bank_name: "First National".to_string(),
            label: format!("Checking {id}"),
            is_verified: verified,
            ..BankAccountRef::default()
        }
    }

    #[test]
    fn test_find_account_and_is_internal() {
        let snapshot = AccountsSnapshot::new(
            vec![account("a1", "100", true), account("a2", "0", false)],
            vec![],
        );
        assert!(snapshot.is_internal("a1"));
        assert!(snapshot.is_internal("a2"));
        assert!(!snapshot.is_internal("someone-else"));
        assert_eq!(snapshot.find_account("a2").unwrap().id, "a2");
    }

    #[test]
    fn test_dropdown_filters() {
        let snapshot = AccountsSnapshot::new(
            vec![account("a1", "100", true), account("a2", "50", false)],
            vec![bank_account("b1", true), bank_account("b2", false)],
        );
        let sources: Vec<_> = snapshot.active_accounts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(sources, ["a1"]);
        let banks: Vec<_> = snapshot
            .verified_bank_accounts()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(banks, ["b1"]);
    }

    #[test]
    fn test_total_cash_balance() {
        let snapshot = AccountsSnapshot::new(
            vec![account("a1", "100.25", true), account("a2", "49.75", false)],
            vec![],
        );
        assert_eq!(snapshot.total_cash_balance(), dec!(150.00));
    }

    #[test]
    fn test_account_ref_deserializes_camel_case() {
        let account: UserAccountRef = serde_json::from_str(
            r#"{"id":"a1","name":"Main","currency":"USD","cashBalance":12.5,"isActive":true}"#,
        )
        .unwrap();
        assert_eq!(account.cash_balance, dec!(12.5));
        assert!(account.is_active);
    }

    // ==================== SnapshotStore ====================

    #[test]
    fn test_store_starts_empty() {
        let store = SnapshotStore::new();
        let snapshot = store.load();
        assert!(snapshot.user_accounts.is_empty());
        assert!(snapshot.fetched_at.is_none());
    }

    #[test]
    fn test_replace_swaps_wholesale_and_readers_keep_old_arc() {
        let store = SnapshotStore::new();
        store.replace(AccountsSnapshot::new(vec![account("a1", "1", true)], vec![]));

        let before = store.load();
        store.replace(AccountsSnapshot::new(
            vec![account("a2", "2", true), account("a3", "3", true)],
            vec![],
        ));

        // The reader that loaded before the refresh still sees its own
        // consistent snapshot.
        assert_eq!(before.user_accounts.len(), 1);
        assert_eq!(before.user_accounts[0].id, "a1");

        let after = store.load();
        assert_eq!(after.user_accounts.len(), 2);
        assert!(!after.is_internal("a1"));
    }
}
