use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_session_file_when_validated_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_parent_traversal_when_validated_then_error() {
    let config = StorageConfig {
        session_file: "../elsewhere/session.json".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_absolute_path_when_validated_then_error() {
    let config = StorageConfig {
        session_file: "/tmp/session.json".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}
