//! HTML utility functions for navigating and extracting data from parsed pages.

use scraper::ElementRef;

/// Get the lowercase tag name of an element.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use bookquest_crawler::html::get_tag_name;
///
/// let doc = Html::parse_document("<p>text</p>");
/// assert_eq!(get_tag_name(doc.root_element()), "html");
/// ```
pub fn get_tag_name<'a>(element: ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Iterate over an element and all of its descendant elements, in document order.
pub fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().filter_map(ElementRef::wrap)
}

/// Find the first element (the element itself included) with the given id.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use bookquest_crawler::html::find_by_id;
///
/// let doc = Html::parse_document(r#"<div id="entries"><p id="one"/></div>"#);
/// assert!(find_by_id(doc.root_element(), "one").is_some());
/// assert!(find_by_id(doc.root_element(), "missing").is_none());
/// ```
pub fn find_by_id<'a>(element: ElementRef<'a>, id: &str) -> Option<ElementRef<'a>> {
    descendant_elements(element).find(|e| e.value().id() == Some(id))
}

/// Check whether an element carries the given class.
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Find the first element (the element itself included) carrying the given class.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use bookquest_crawler::html::find_first_by_class;
///
/// let doc = Html::parse_document(r#"<div><a class="x login">a</a><a class="login">b</a></div>"#);
/// let first = find_first_by_class(doc.root_element(), "login").unwrap();
/// assert_eq!(first.text().collect::<String>(), "a");
/// ```
pub fn find_first_by_class<'a>(element: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    descendant_elements(element).find(|e| has_class(*e, class))
}

/// Get all element children of an element (text nodes and comments excluded).
pub fn element_children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Get an attribute value from an element.
pub fn get_attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Concatenated text of an element and all of its descendants, untrimmed.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Short description of an element for error messages, e.g. `<div id="x">`.
pub fn describe(element: ElementRef<'_>) -> String {
    match element.value().id() {
        Some(id) => format!("<{} id=\"{id}\">", get_tag_name(element)),
        None => format!("<{}>", get_tag_name(element)),
    }
}
