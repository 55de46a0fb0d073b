//! Form drafts and local validation
//!
//! Drafts hold exactly what the user typed. `validate` turns a draft into
//! request fields or a `PanelError::Validation` carrying the banner text.

use crate::error::{PanelError, PanelResult};
use crate::host::PlanFields;
use crate::i18n::Translator;
use crate::models::{Frequency, Money, RecurringPlan, Transaction};

pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
pub const INVALID_ADJUSTMENT: &str = "Please enter a valid adjustment amount";
pub const NAME_REQUIRED: &str = "Account name is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_DAY: &str = "Day must be a whole number from 1 to 28";
pub const INVALID_MONTH: &str = "Month must be a whole number from 1 to 12";

fn parse_amount(raw: &str, message: &str) -> PanelResult<Money> {
    Money::parse(raw).map_err(|_| PanelError::Validation(message.to_string()))
}

fn parse_in_range(raw: &str, min: u8, max: u8, message: &str) -> PanelResult<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| PanelError::Validation(message.to_string()))
}

/// Add/edit transaction form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub amount: String,
    pub note: String,
}

impl TransactionDraft {
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.plain_string(),
            note: txn.note.clone(),
        }
    }

    pub fn validate(&self) -> PanelResult<(Money, String)> {
        let amount = parse_amount(&self.amount, INVALID_AMOUNT)?;
        Ok((amount, self.note.clone()))
    }
}

/// Add/edit recurring plan form
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    pub title: String,
    pub amount: String,
    pub frequency: Frequency,
    pub day: String,
    /// Only sent for yearly plans
    pub month: String,
    pub active: bool,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            frequency: Frequency::Monthly,
            day: "1".to_string(),
            month: "1".to_string(),
            active: true,
        }
    }
}

impl PlanDraft {
    pub fn from_plan(plan: &RecurringPlan) -> Self {
        Self {
            title: plan.title.clone(),
            amount: plan.amount.plain_string(),
            frequency: plan.frequency,
            day: plan.day.to_string(),
            month: plan.month.to_string(),
            active: plan.active,
        }
    }

    pub fn validate(&self) -> PanelResult<PlanFields> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PanelError::Validation(TITLE_REQUIRED.to_string()));
        }
        let amount = parse_amount(&self.amount, INVALID_AMOUNT)?;
        let day = parse_in_range(&self.day, 1, 28, INVALID_DAY)?;
        let month = match self.frequency {
            Frequency::Yearly => Some(parse_in_range(&self.month, 1, 12, INVALID_MONTH)?),
            _ => None,
        };

        Ok(PlanFields {
            title: title.to_string(),
            amount,
            frequency: self.frequency,
            day,
            month,
            active: self.active,
        })
    }
}

/// Add/rename account form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    /// Ignored when renaming
    pub initial_balance: String,
}

impl AccountDraft {
    pub fn for_rename(name: &str) -> Self {
        Self {
            name: name.to_string(),
            initial_balance: String::new(),
        }
    }

    /// Name and opening balance; an unreadable balance counts as zero
    pub fn validate_new(&self) -> PanelResult<(String, Money)> {
        let name = self.validate_name()?;
        let balance = Money::parse(&self.initial_balance).unwrap_or_default();
        Ok((name, balance))
    }

    pub fn validate_name(&self) -> PanelResult<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PanelError::Validation(NAME_REQUIRED.to_string()));
        }
        Ok(name.to_string())
    }
}

/// Balance adjustment form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentDraft {
    pub amount: String,
    pub reason: String,
}

impl AdjustmentDraft {
    /// Signed non-zero amount and the tagged note `[<Adjustment>] <reason>`
    pub fn validate(&self, translator: &Translator) -> PanelResult<(Money, String)> {
        let amount = parse_amount(&self.amount, INVALID_ADJUSTMENT)?;
        if amount.is_zero() {
            return Err(PanelError::Validation(INVALID_ADJUSTMENT.to_string()));
        }

        let label = translator.t("adjustment");
        let reason = if self.reason.trim().is_empty() {
            label
        } else {
            self.reason.as_str()
        };
        Ok((amount, format!("[{}] {}", label, reason)))
    }

    /// Balance after the adjustment, for the preview line; `None` when the
    /// amount does not parse or the sum overflows
    pub fn preview(&self, current: Money) -> Option<Money> {
        let delta = Money::parse(&self.amount).ok()?;
        current.checked_add(delta)
    }
}

/// Deleting an account needs its exact name typed back
pub fn delete_confirmation_matches(typed: &str, account_name: &str) -> bool {
    typed == account_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_transaction_draft() {
        let draft = TransactionDraft {
            amount: "-12.50".into(),
            note: "lunch".into(),
        };
        let (amount, note) = draft.validate().unwrap();
        assert_eq!(amount.cents(), -1250);
        assert_eq!(note, "lunch");

        let bad = TransactionDraft {
            amount: "twelve".into(),
            note: String::new(),
        };
        assert_eq!(bad.validate().unwrap_err().to_string(), INVALID_AMOUNT);
    }

    #[test]
    fn test_plan_defaults() {
        let draft = PlanDraft::default();
        assert_eq!(draft.frequency, Frequency::Monthly);
        assert_eq!(draft.day, "1");
        assert!(draft.active);
    }

    #[test]
    fn test_plan_validation() {
        let mut draft = PlanDraft {
            title: " Rent ".into(),
            amount: "-800".into(),
            ..PlanDraft::default()
        };
        let fields = draft.validate().unwrap();
        assert_eq!(fields.title, "Rent");
        assert_eq!(fields.month, None);

        draft.day = "29".into();
        assert_eq!(draft.validate().unwrap_err().to_string(), INVALID_DAY);

        draft.day = "15".into();
        draft.frequency = Frequency::Yearly;
        draft.month = "13".into();
        assert_eq!(draft.validate().unwrap_err().to_string(), INVALID_MONTH);

        draft.month = "4".into();
        assert_eq!(draft.validate().unwrap().month, Some(4));

        draft.title = "   ".into();
        assert_eq!(draft.validate().unwrap_err().to_string(), TITLE_REQUIRED);
    }

    #[test]
    fn test_account_draft() {
        let draft = AccountDraft {
            name: "  Savings ".into(),
            initial_balance: "not a number".into(),
        };
        let (name, balance) = draft.validate_new().unwrap();
        assert_eq!(name, "Savings");
        assert!(balance.is_zero());

        let blank = AccountDraft::for_rename("   ");
        assert_eq!(blank.validate_name().unwrap_err().to_string(), NAME_REQUIRED);
    }

    #[test]
    fn test_adjustment_rejects_zero_and_garbage() {
        let t = Translator::default();
        for amount in ["0", "0.00", "", "abc"] {
            let draft = AdjustmentDraft {
                amount: amount.into(),
                reason: "fix".into(),
            };
            let err = draft.validate(&t).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), INVALID_ADJUSTMENT);
        }
    }

    #[test]
    fn test_adjustment_note() {
        let draft = AdjustmentDraft {
            amount: "-5".into(),
            reason: String::new(),
        };
        let (_, note) = draft.validate(&Translator::default()).unwrap();
        assert_eq!(note, "[Adjustment] Adjustment");

        let hant = Translator::new(Language::TraditionalChinese);
        let draft = AdjustmentDraft {
            amount: "3".into(),
            reason: "bank fee".into(),
        };
        let (amount, note) = draft.validate(&hant).unwrap();
        assert_eq!(amount.cents(), 300);
        assert_eq!(note, format!("[{}] bank fee", hant.t("adjustment")));
    }

    #[test]
    fn test_adjustment_preview() {
        let draft = AdjustmentDraft {
            amount: "-20".into(),
            reason: String::new(),
        };
        assert_eq!(draft.preview(Money::from_cents(10000)), Some(Money::from_cents(8000)));
    }

    #[test]
    fn test_adjustment_preview_overflow() {
        let draft = AdjustmentDraft {
            amount: "92233720368547758".into(),
            reason: String::new(),
        };
        assert_eq!(draft.preview(Money::from_cents(100)), None);
    }

    #[test]
    fn test_delete_confirmation_is_exact() {
        assert!(delete_confirmation_matches("Checking", "Checking"));
        assert!(!delete_confirmation_matches("checking", "Checking"));
        assert!(!delete_confirmation_matches("Checking ", "Checking"));
        assert!(!delete_confirmation_matches("", "Checking"));
    }
}
