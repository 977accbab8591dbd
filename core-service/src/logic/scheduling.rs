//! Autonomous Scheduling
//!
//! Books a service slot when a vehicle's failure probability is above the
//! maintenance threshold. Stateless: the caller supplies the probability.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{get_service_hub, DEFAULT_SERVICE_LEAD_DAYS, MAX_SERVICE_LEAD_DAYS};
use super::config::env_or;
use super::error::{FleetError, FleetResult};
use super::model::MaintenanceStatus;

/// Where and how far ahead services are booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    pub service_hub: String,
    pub lead_days: i64,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            service_hub: crate::constants::DEFAULT_SERVICE_HUB.to_string(),
            lead_days: DEFAULT_SERVICE_LEAD_DAYS,
        }
    }
}

impl SchedulingPolicy {
    /// `SERVICE_HUB` and `SERVICE_LEAD_DAYS` overrides; a lead time that
    /// does not parse or falls outside 0..=365 is rejected.
    pub fn from_env() -> FleetResult<Self> {
        let policy = Self {
            service_hub: get_service_hub(),
            lead_days: env_or("SERVICE_LEAD_DAYS", DEFAULT_SERVICE_LEAD_DAYS)?,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> FleetResult<()> {
        if !(0..=MAX_SERVICE_LEAD_DAYS).contains(&self.lead_days) {
            return Err(FleetError::InvalidConfiguration(format!(
                "service lead time must be 0..={} days, got {}",
                MAX_SERVICE_LEAD_DAYS, self.lead_days
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ServicePlan {
    Scheduled {
        service_hub: String,
        scheduled_for: DateTime<Utc>,
        lead_days: i64,
    },
    NotRequired,
}

impl ServicePlan {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ServicePlan::Scheduled { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            ServicePlan::Scheduled { service_hub, lead_days, .. } => {
                format!("Service automatically scheduled at {} in {} days", service_hub, lead_days)
            }
            ServicePlan::NotRequired => "No service required".to_string(),
        }
    }
}

pub fn plan_service(
    probability: f64,
    now: DateTime<Utc>,
    policy: &SchedulingPolicy,
) -> FleetResult<ServicePlan> {
    if !MaintenanceStatus::from_probability(probability).needs_service() {
        return Ok(ServicePlan::NotRequired);
    }

    let scheduled_for = Duration::try_days(policy.lead_days)
        .and_then(|lead| now.checked_add_signed(lead))
        .ok_or_else(|| {
            FleetError::InvalidConfiguration(format!(
                "service date {} days from {} is out of range",
                policy.lead_days, now
            ))
        })?;

    Ok(ServicePlan::Scheduled {
        service_hub: policy.service_hub.clone(),
        scheduled_for,
        lead_days: policy.lead_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_high_risk_is_scheduled() {
        let plan = plan_service(0.85, now(), &SchedulingPolicy::default()).unwrap();
        match plan {
            ServicePlan::Scheduled { service_hub, scheduled_for, lead_days } => {
                assert_eq!(service_hub, "Hyderabad Service Hub");
                assert_eq!(lead_days, 3);
                assert_eq!(scheduled_for, Utc.with_ymd_and_hms(2026, 10, 22, 10, 0, 0).unwrap());
            }
            ServicePlan::NotRequired => panic!("expected a scheduled service"),
        }
    }

    #[test]
    fn test_threshold_probability_not_scheduled() {
        let plan = plan_service(0.7, now(), &SchedulingPolicy::default()).unwrap();
        assert_eq!(plan, ServicePlan::NotRequired);
        assert_eq!(plan.summary(), "No service required");
    }

    #[test]
    fn test_custom_policy() {
        let policy = SchedulingPolicy {
            service_hub: "Pune Depot".to_string(),
            lead_days: 1,
        };
        let plan = plan_service(0.99, now(), &policy).unwrap();
        assert!(plan.is_scheduled());
        assert!(plan.summary().contains("Pune Depot"));
    }

    #[test]
    fn test_plan_serialization_is_tagged() {
        let json = serde_json::to_value(ServicePlan::NotRequired).unwrap();
        assert_eq!(json["decision"], "not_required");
    }

    #[test]
    fn test_far_future_lead_time_is_an_error() {
        let policy = SchedulingPolicy {
            service_hub: "Hyderabad Service Hub".to_string(),
            lead_days: 100_000_000,
        };
        assert!(matches!(
            plan_service(0.9, now(), &policy),
            Err(FleetError::InvalidConfiguration(_))
        ));
        // Healthy vehicles never touch the calendar
        assert_eq!(plan_service(0.1, now(), &policy), Ok(ServicePlan::NotRequired));
    }

    #[test]
    fn test_lead_time_bounds() {
        let mut policy = SchedulingPolicy::default();
        assert!(policy.validate().is_ok());

        policy.lead_days = MAX_SERVICE_LEAD_DAYS;
        assert!(policy.validate().is_ok());

        policy.lead_days = MAX_SERVICE_LEAD_DAYS + 1;
        assert!(policy.validate().is_err());

        policy.lead_days = -1;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_lead_time_from_env_is_validated() {
        std::env::set_var("SERVICE_LEAD_DAYS", "abc");
        let unparsable = SchedulingPolicy::from_env();

        std::env::set_var("SERVICE_LEAD_DAYS", "100000000");
        let too_far = SchedulingPolicy::from_env();

        std::env::set_var("SERVICE_LEAD_DAYS", "5");
        let custom = SchedulingPolicy::from_env();
        std::env::remove_var("SERVICE_LEAD_DAYS");

        assert!(matches!(unparsable, Err(FleetError::InvalidConfiguration(_))));
        assert!(matches!(too_far, Err(FleetError::InvalidConfiguration(_))));
        assert_eq!(custom.unwrap().lead_days, 5);
    }
}
