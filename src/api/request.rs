//! Request types for the pay slip API.
//!
//! This module defines the JSON request structure for the `/payslip` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::PayrollInputs;

/// Request body for the `/payslip` endpoint.
///
/// The payroll amounts sit at the top level of the JSON object, next to an
/// optional employee identifier echoed back in the response.
///
/// # Example
///
/// ```
/// use payslip_engine::api::PayslipRequest;
///
/// let request: PayslipRequest = serde_json::from_str(
///     r#"{ "employee_id": "emp_001", "base_salary": "1750.00" }"#,
/// )
/// .unwrap();
/// assert_eq!(request.employee_id.as_deref(), Some("emp_001"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Optional identifier of the employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The payroll amounts for the period.
    #[serde(flatten)]
    pub inputs: PayrollInputs,
}
