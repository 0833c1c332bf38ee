use crate::ViewState;

use bb_api::ApiError;
use bb_core::Page;

#[test]
fn test_empty_page_is_empty_state() {
    let state = ViewState::<Page<u32>>::from_page(Ok(Page::default()));

    assert_eq!(state, ViewState::Empty);
    assert!(state.rows().is_empty());
}

#[test]
fn test_rows_exposed_only_when_populated() {
    let page = Page {
        data: vec![7, 8],
        total: 2,
        page: 1,
        page_size: 25,
    };

    let state = ViewState::from_page(Ok(page));

    assert_eq!(state.rows(), &[7, 8]);
}

#[test]
fn test_error_carries_banner_text_and_no_data() {
    let state =
        ViewState::<Vec<u32>>::from_rows(Err(ApiError::server(500, None).with_fallback("Failed")));

    assert_eq!(state.error(), Some("Failed"));
    assert!(state.data().is_none());
    assert!(!state.is_loading());
}
