//! End-to-end tests for the step-up bridge.

mod correlation;
mod step_up;
mod storage;
