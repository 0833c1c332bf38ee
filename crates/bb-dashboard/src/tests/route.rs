use crate::Route;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn test_known_paths_resolve() {
    for route in Route::ALL {
        assert_that!(Route::from_path(route.path()), eq(route));
    }
}

#[test]
fn test_unknown_path_lands_on_dashboard() {
    assert_that!(Route::from_path("/no-such-page"), eq(Route::Dashboard));
}

#[test]
fn test_trailing_slash_ignored() {
    assert_that!(Route::from_path("/customers/"), eq(Route::Customers));
}

#[test]
fn test_only_login_and_access_denied_are_public() {
    let public: Vec<Route> = Route::ALL.into_iter().filter(Route::is_public).collect();

    assert_eq!(public, vec![Route::Login, Route::AccessDenied]);
}
