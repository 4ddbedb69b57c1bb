//! Shared helpers for the bowling backend's integration tests: log setup and
//! problem-details assertions that do not depend on backend types.

pub mod logging;
pub mod problem_details;

pub use problem_details::{
    assert_problem_details_from_parts, assert_problem_details_from_service_response,
    ProblemDetailsLike,
};
