//! HTTP API of the pay slip engine.
//!
//! A single endpoint, `POST /payslip`, computes one employee's monthly pay
//! slip against the configuration held in [`AppState`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::{ApiError, ErrorCode, PayslipResponse};
pub use state::AppState;
