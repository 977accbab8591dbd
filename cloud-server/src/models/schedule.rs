//! Scheduling response

use serde::{Deserialize, Serialize};

use autocare_core::logic::scheduling::ServicePlan;
use autocare_core::VehicleAssessment;

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub assessment: VehicleAssessment,
    pub plan: ServicePlan,
    pub summary: String,
}

impl ScheduleResponse {
    pub fn new(assessment: VehicleAssessment, plan: ServicePlan) -> Self {
        Self {
            summary: plan.summary(),
            assessment,
            plan,
        }
    }
}
