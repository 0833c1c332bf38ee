use crate::ApiConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_default_api_config_when_validated_then_ok() {
    let config = ApiConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.timeout(), eq(Duration::from_secs(30)));
}

#[test]
fn given_base_url_without_scheme_when_validated_then_error() {
    let config = ApiConfig {
        base_url: "api.billbharat.example".to_string(),
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("api.base_url"));
}

#[test]
fn given_zero_timeout_when_validated_then_error() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_above_max_when_validated_then_error() {
    let config = ApiConfig {
        timeout_secs: 301,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}
