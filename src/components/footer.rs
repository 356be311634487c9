//! Footer copyright year.

pub const YEAR_ID: &str = "year";

/// Write the current year into `#year`, if the footer has been injected.
pub fn stamp_year() {
    #[cfg(feature = "csr")]
    {
        let Some(el) = crate::util::dom::document().and_then(|d| d.get_element_by_id(YEAR_ID)) else {
            return;
        };
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
