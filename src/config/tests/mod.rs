//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: `Layer` and `compose` for building a config from merge layers
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token and API URL resolution tests
//! - `timeout_loading`: `request_timeout_seconds` loading tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod operation_mode;
mod timeout_loading;
