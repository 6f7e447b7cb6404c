use crate::models::Category;

/// Finds the first category whose Thai label appears anywhere in the text.
///
/// Candidates are tried in [`Category::ALL`] order, so a phrase naming both
/// "อาหาร" and "สุขภาพ" classifies as food regardless of which word the
/// speaker said first. No label in the text means no answer, the caller keeps
/// whatever category the form already shows.
pub fn extract_category(text: &str) -> Option<Category> {
    let haystack = text.to_lowercase();

    Category::ALL
        .into_iter()
        .find(|category| haystack.contains(category.label()))
}
