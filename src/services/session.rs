/// Source of the account whose balances are tracked.
pub trait SessionProvider: Send + Sync {
    /// Currently signed-in account, if any.
    fn account_id(&self) -> Option<String>;
}

/// Session pinned to one account, e.g. from `ACCOUNT_ID`.
#[derive(Clone, Debug, Default)]
pub struct FixedSession {
    account_id: Option<String>,
}

impl FixedSession {
    pub fn new(account_id: Option<String>) -> Self {
        Self {
            account_id: account_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn signed_in(account_id: impl Into<String>) -> Self {
        Self::new(Some(account_id.into()))
    }
}

impl SessionProvider for FixedSession {
    fn account_id(&self) -> Option<String> {
        self.account_id.clone()
    }
}
