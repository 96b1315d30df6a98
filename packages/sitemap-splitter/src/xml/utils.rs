//! Helpers for navigating `roxmltree` DOM trees by local tag name.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// Sitemaps declare the protocol namespace as the default namespace, so
/// every element is namespaced; matching is done on the local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use sitemap_splitter::xml::get_tag_name;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "urlset");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use sitemap_splitter::xml::find_child;
///
/// let xml = r#"<url><loc>https://example.com/</loc></url>"#;
/// let doc = Document::parse(xml).unwrap();
/// let url = doc.root_element();
///
/// assert!(find_child(url, "loc").is_some());
/// assert!(find_child(url, "lastmod").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Get the text content of a node, trimmed.
///
/// Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get the trimmed text of the first child with the given tag name.
///
/// Returns `None` when the child is missing or its text is blank, so that
/// an empty `<lastmod/>` behaves like an absent one.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag)
        .map(get_text)
        .filter(|text| !text.is_empty())
}
