use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form<'a>(html: &'a Html, id: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("form#{id}")).unwrap();

    html.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No form found with id \"{id}\""))
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, id: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_id = input.value().attr("id").unwrap_or_default();

        if input_id == id {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with id {id} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with id \"{id}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_select(form: &ElementRef<'_>, id: &str, want_options: &[&str]) {
    let selector = Selector::parse(&format!("select#{id}")).unwrap();
    let select = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No select found with id \"{id}\""));

    let got_options: Vec<&str> = select
        .select(&Selector::parse("option").unwrap())
        .filter_map(|option| option.value().attr("value"))
        .collect();

    assert_eq!(
        got_options, want_options,
        "want select {id} with options {want_options:?}, got {got_options:?}"
    );
}
