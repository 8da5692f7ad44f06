use crate::domain::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Amount },
    Withdraw { amount: Amount },
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Operation::Withdraw { amount } => write!(f, "withdraw,amount={}", amount),
        }
    }
}
