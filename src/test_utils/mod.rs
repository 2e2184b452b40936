#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use form::{assert_form_input, assert_form_select, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::parse_json_body;
pub(crate) use state::{broken_test_state, must_create_test_state, must_insert_expense};
