use scraper::{ElementRef, Html, Selector};

use crate::normalize::strip_decoration;
use crate::{Error, Result};

/// Repeated block holding most of the property data on a listing page.
pub const DATA_BODY: &str = "div.property_data-body";

/// Meaning of each `property_data-body` block, by its position on the page.
///
/// The site never labels these blocks, so the order is the only schema there is.
/// If the markup shifts, this is the one place to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    MonthlyFees = 0,
    DepositKeyMoney = 1,
    Insurance = 2,
    OtherFees = 3,
    Madori = 4,
    Surface = 5,
    BukkenType = 7,
    Age = 8,
}

impl PropertyField {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

/// Collects all the text under an element, stripped of markup padding.
#[inline]
pub(crate) fn element_text(element: ElementRef) -> String {
    strip_decoration(&element.text().collect::<String>()).to_string()
}

/// Returns the `index`-th element matching `sel_str`.
pub fn nth_element<'a>(document: &'a Html, sel_str: &str, index: usize) -> Result<ElementRef<'a>> {
    let selector = create_selector(sel_str)?;
    document
        .select(&selector)
        .nth(index)
        .ok_or_else(|| Error::FieldNotFound {
            selector: sel_str.into(),
            index,
        })
}

/// Text of the `index`-th element matching `sel_str`.
pub fn nth_block_text(document: &Html, sel_str: &str, index: usize) -> Result<String> {
    nth_element(document, sel_str, index).map(element_text)
}

/// Text of the first match of the first selector in `sel_strs` that matches anything.
pub fn first_text(document: &Html, sel_strs: &[&str]) -> Result<String> {
    for sel_str in sel_strs {
        let selector = create_selector(sel_str)?;
        if let Some(element) = document.select(&selector).next() {
            return Ok(element_text(element));
        }
    }
    Err(Error::FieldNotFound {
        selector: sel_strs.join(", "),
        index: 0,
    })
}

pub fn field_text(document: &Html, field: PropertyField) -> Result<String> {
    nth_block_text(document, DATA_BODY, field.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_blocks(count: usize) -> Html {
        let blocks = (0..count)
            .map(|i| format!("<div class=\"property_data-body\">\r\n\t\t\t\tblock {i}\t\t</div>"))
            .collect::<String>();
        Html::parse_document(&format!("<html><body>{blocks}</body></html>"))
    }

    #[test]
    fn picks_the_nth_block() {
        let doc = page_with_blocks(9);
        assert_eq!(nth_block_text(&doc, DATA_BODY, 4).unwrap(), "block 4");
        assert_eq!(field_text(&doc, PropertyField::Age).unwrap(), "block 8");
    }

    #[test]
    fn too_few_blocks_is_field_not_found() {
        let doc = page_with_blocks(3);
        match nth_block_text(&doc, DATA_BODY, 4) {
            Err(Error::FieldNotFound { selector, index }) => {
                assert_eq!(selector, DATA_BODY);
                assert_eq!(index, 4);
            }
            other => panic!("expected FieldNotFound, got {other:?}"),
        }
    }

    #[test]
    fn first_text_falls_back_to_later_selectors() {
        let doc = Html::parse_document(
            r#"<html><body><span class="property_view_note-emphasis">8.2万円</span></body></html>"#,
        );
        let text = first_text(
            &doc,
            &["div.property_view_main-emphasis", "span.property_view_note-emphasis"],
        )
        .unwrap();
        assert_eq!(text, "8.2万円");

        assert!(matches!(
            first_text(&doc, &["div.missing"]),
            Err(Error::FieldNotFound { .. })
        ));
    }

    #[test]
    fn bad_selector_is_reported() {
        let doc = page_with_blocks(1);
        assert!(matches!(
            nth_block_text(&doc, "div[", 0),
            Err(Error::InvalidSelector(_))
        ));
    }
}
