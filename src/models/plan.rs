//! Recurring plan model
//!
//! A plan is a template the host materialises into transactions on schedule.
//! The panel never computes `next_date`; it only shows what the host sends.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::money::Money;
use super::timestamp::parse_timestamp;

/// How often a plan fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// Wire name, also the translation key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Daily => Self::Weekly,
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Daily,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Daily => Self::Yearly,
            Self::Weekly => Self::Daily,
            Self::Monthly => Self::Weekly,
            Self::Yearly => Self::Monthly,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn default_day() -> u8 {
    1
}

fn default_month() -> u8 {
    1
}

fn default_active() -> bool {
    true
}

/// A recurring payment or income definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringPlan {
    /// Map key in the host's `recurring_plans` object
    #[serde(default, skip_serializing)]
    pub id: String,

    pub title: String,

    pub amount: Money,

    #[serde(default)]
    pub frequency: Frequency,

    /// Day of the period (1-28)
    #[serde(default = "default_day")]
    pub day: u8,

    /// Month for yearly plans (1-12)
    #[serde(default = "default_month")]
    pub month: u8,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default)]
    pub last_executed: Option<String>,

    /// Next occurrence as computed by the host
    #[serde(default)]
    pub next_date: Option<String>,
}

impl RecurringPlan {
    /// Parsed `next_date`, if present and readable
    pub fn next_occurrence(&self) -> Option<DateTime<Utc>> {
        self.next_date.as_deref().and_then(parse_timestamp)
    }
}

/// Deserialize the host's `{plan_id: plan}` object into a list that keeps the
/// object's key order and carries each key as the plan id.
pub(crate) fn deserialize_plans<'de, D>(deserializer: D) -> Result<Vec<RecurringPlan>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlanMapVisitor;

    impl<'de> Visitor<'de> for PlanMapVisitor {
        type Value = Vec<RecurringPlan>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of plan id to recurring plan")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut plans = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, mut plan)) = map.next_entry::<String, RecurringPlan>()? {
                plan.id = id;
                plans.push(plan);
            }
            Ok(plans)
        }
    }

    deserializer.deserialize_any(PlanMapVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_plans")]
        plans: Vec<RecurringPlan>,
    }

    #[test]
    fn test_plans_keep_document_order() {
        let json = r#"{"plans": {
            "plan_zz": {"title": "Rent", "amount": -800, "frequency": "monthly", "day": 1},
            "plan_aa": {"title": "Salary", "amount": 3000, "frequency": "monthly", "day": 25, "active": false}
        }}"#;
        let holder: Holder = serde_json::from_str(json).unwrap();

        assert_eq!(holder.plans.len(), 2);
        assert_eq!(holder.plans[0].id, "plan_zz");
        assert_eq!(holder.plans[1].id, "plan_aa");
        assert!(holder.plans[0].active);
        assert!(!holder.plans[1].active);
    }

    #[test]
    fn test_plan_defaults() {
        let plan: RecurringPlan =
            serde_json::from_str(r#"{"title": "Gym", "amount": -30}"#).unwrap();
        assert_eq!(plan.frequency, Frequency::Monthly);
        assert_eq!(plan.day, 1);
        assert_eq!(plan.month, 1);
        assert!(plan.active);
        assert!(plan.next_occurrence().is_none());
    }

    #[test]
    fn test_null_plans() {
        let holder: Holder = serde_json::from_str(r#"{"plans": null}"#).unwrap();
        assert!(holder.plans.is_empty());
    }

    #[test]
    fn test_frequency_cycle() {
        let mut f = Frequency::Daily;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, Frequency::Daily);
        assert_eq!(Frequency::Daily.prev(), Frequency::Yearly);
    }
}
