use crate::domain::{Amount, Error};

#[derive(Debug, Clone)]
pub struct Account {
    id: String,       // opaque, fixed at creation
    balance: Amount,  // funds on the account
    status: String,   // label only, never transitioned
}

impl Account {
    pub const STARTING_BALANCE: Amount = Amount(1000);
    pub const ACTIVE: &'static str = "Active";

    /// Opens an account. The id is not validated; empty or repeated ids are accepted.
    pub fn create(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            balance: Self::STARTING_BALANCE,
            status: Self::ACTIVE.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Adds `amount` unconditionally, zero and negative amounts included.
    pub fn deposit(&mut self, amount: Amount) -> String {
        self.balance = self.balance.saturating_add(amount);
        format!("Deposit: {} New Balance: {}", amount, self.balance)
    }

    /// Takes `amount` off the balance if it is covered and returns what remains.
    pub fn try_withdraw(&mut self, amount: Amount) -> Result<Amount, Error> {
        if self.balance < amount {
            return Err(Error::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance = self.balance.saturating_sub(amount);
        Ok(self.balance)
    }

    /// Message form of [`Account::try_withdraw`]. A rejected withdrawal yields
    /// the plain "Insufficient Funds" line and leaves the balance untouched.
    pub fn withdraw(&mut self, amount: Amount) -> String {
        match self.try_withdraw(amount) {
            Ok(remaining) => format!("Withdraw: {} Remaining: {}", amount, remaining),
            Err(e @ Error::InsufficientFunds { requested, balance }) => {
                tracing::warn!(account = %self.id, %requested, %balance, "withdrawal rejected");
                e.to_string()
            }
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_active_with_starting_balance() {
        let account = Account::create("ACC-123");
        assert_eq!(account.id(), "ACC-123");
        assert_eq!(account.balance(), Amount(1000));
        assert_eq!(account.status(), "Active");
    }

    #[test]
    fn empty_id_is_accepted() {
        let account = Account::create("");
        assert_eq!(account.id(), "");
        assert_eq!(account.balance(), Account::STARTING_BALANCE);
    }

    #[test]
    fn deposit_adds_and_reports_new_balance() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.deposit(Amount(500)), "Deposit: 500 New Balance: 1500");
        assert_eq!(account.balance(), Amount(1500));
    }

    #[test]
    fn deposit_of_zero_keeps_balance() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.deposit(Amount(0)), "Deposit: 0 New Balance: 1000");
        assert_eq!(account.balance(), Amount(1000));
    }

    #[test]
    fn negative_deposit_is_applied_as_is() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.deposit(Amount(-300)), "Deposit: -300 New Balance: 700");
        assert_eq!(account.balance(), Amount(700));
    }

    #[test]
    fn deposit_then_withdraw() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.deposit(Amount(500)), "Deposit: 500 New Balance: 1500");
        assert_eq!(account.withdraw(Amount(200)), "Withdraw: 200 Remaining: 1300");
        assert_eq!(account.balance(), Amount(1300));
    }

    #[test]
    fn withdrawing_entire_balance_is_allowed() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.withdraw(Amount(1000)), "Withdraw: 1000 Remaining: 0");
        assert_eq!(account.balance(), Amount(0));
    }

    #[test]
    fn overdraw_is_rejected_and_balance_unchanged() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.withdraw(Amount(5000)), "Insufficient Funds");
        assert_eq!(account.balance(), Amount(1000));
    }

    #[test]
    fn try_withdraw_reports_typed_error() {
        let mut account = Account::create("ACC-123");
        match account.try_withdraw(Amount(1001)) {
            Err(Error::InsufficientFunds { requested, balance }) => {
                assert_eq!(requested, Amount(1001));
                assert_eq!(balance, Amount(1000));
            }
            other => panic!("expected insufficient funds, got {:?}", other),
        }
        assert_eq!(account.try_withdraw(Amount(1)).unwrap(), Amount(999));
    }

    #[test]
    fn negative_withdrawal_passes_the_check_and_adds_funds() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.withdraw(Amount(-50)), "Withdraw: -50 Remaining: 1050");
        assert_eq!(account.balance(), Amount(1050));
    }

    #[test]
    fn overdrawn_balance_rejects_withdrawal_below_it() {
        let mut account = Account::create("ACC-123");
        assert_eq!(account.deposit(Amount(-5000)), "Deposit: -5000 New Balance: -3950");

        assert_eq!(account.withdraw(Amount(-10)), "Insufficient Funds");
        assert_eq!(account.balance(), Amount(-3950));

        assert_eq!(account.withdraw(Amount(-6000)), "Withdraw: -6000 Remaining: 2050");
        assert_eq!(account.balance(), Amount(2050));
    }

    #[test]
    fn deposit_saturates_at_max_balance() {
        let mut account = Account::create("ACC-123");
        assert_eq!(
            account.deposit(Amount(i64::MAX)),
            format!("Deposit: {} New Balance: {}", i64::MAX, i64::MAX)
        );
        assert_eq!(account.balance(), Amount(i64::MAX));

        account.deposit(Amount(1));
        assert_eq!(account.balance(), Amount(i64::MAX));
    }

    #[test]
    fn withdrawing_min_amount_saturates_at_max_balance() {
        let mut account = Account::create("ACC-123");
        assert_eq!(
            account.withdraw(Amount(i64::MIN)),
            format!("Withdraw: {} Remaining: {}", i64::MIN, i64::MAX)
        );
        assert_eq!(account.balance(), Amount(i64::MAX));
    }

    #[test]
    fn status_is_never_changed_by_operations() {
        let mut account = Account::create("ACC-123");
        account.deposit(Amount(10));
        account.withdraw(Amount(99_999));
        account.withdraw(Amount(10));
        assert_eq!(account.status(), "Active");
    }
}
