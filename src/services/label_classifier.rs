//! Label classification.
//!
//! Product labels are identified purely by colour. When several labels
//! qualify, the first one in the issue's own label order is used.

use crate::domain::models::{Issue, Label};

/// Colour (hex, no leading `#`) that marks a product label.
pub const PRODUCT_LABEL_COLOR: &str = "006B75";

/// Labels of `issue` whose colour exactly matches [`PRODUCT_LABEL_COLOR`],
/// in the issue's label order.
pub fn product_labels_of(issue: &Issue) -> Vec<&Label> {
    issue
        .labels
        .iter()
        .filter(|label| label.color == PRODUCT_LABEL_COLOR)
        .collect()
}

/// How an issue's labels resolve for product-label sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLabel<'a> {
    /// No product label on the issue.
    Absent,
    /// The first product label has no usable name.
    Unnamed(&'a Label),
    /// The first product label, with its name.
    Named { name: &'a str, label: &'a Label },
}

/// Pick the product label that drives product-label sync.
pub fn classify_product_label(issue: &Issue) -> ProductLabel<'_> {
    match product_labels_of(issue).first().copied() {
        None => ProductLabel::Absent,
        Some(label) => match label.usable_name() {
            Some(name) => ProductLabel::Named { name, label },
            None => ProductLabel::Unnamed(label),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_with(labels: Vec<Label>) -> Issue {
        let mut issue = Issue::new(1, "https://github.com/o/r/issues/1");
        issue.labels = labels;
        issue
    }

    #[test]
    fn test_no_product_labels() {
        let issue = issue_with(vec![Label::new("bug", "d73a4a"), Label::new("docs", "0075ca")]);
        assert!(product_labels_of(&issue).is_empty());
        assert_eq!(classify_product_label(&issue), ProductLabel::Absent);
    }

    #[test]
    fn test_no_labels_at_all() {
        let issue = issue_with(vec![]);
        assert!(product_labels_of(&issue).is_empty());
    }

    #[test]
    fn test_product_labels_keep_issue_order() {
        let issue = issue_with(vec![
            Label::new("search", "006B75"),
            Label::new("bug", "d73a4a"),
            Label::new("maps", "006B75"),
        ]);
        let names: Vec<_> = product_labels_of(&issue)
            .iter()
            .map(|l| l.usable_name())
            .collect();
        assert_eq!(names, vec![Some("search"), Some("maps")]);
    }

    #[test]
    fn test_color_match_is_case_sensitive() {
        let issue = issue_with(vec![
            Label::new("lower", "006b75"),
            Label::new("hashed", "#006B75"),
        ]);
        assert!(product_labels_of(&issue).is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let issue = issue_with(vec![
            Label::new("bug", "d73a4a"),
            Label::new("maps", "006B75"),
            Label::new("search", "006B75"),
        ]);
        match classify_product_label(&issue) {
            ProductLabel::Named { name, label } => {
                assert_eq!(name, "maps");
                assert_eq!(label.color, "006B75");
            }
            other => panic!("expected named label, got {other:?}"),
        }
    }

    #[test]
    fn test_unnamed_first_match_is_not_skipped_over() {
        let issue = issue_with(vec![
            Label {
                name: None,
                color: "006B75".to_string(),
            },
            Label::new("maps", "006B75"),
        ]);
        assert!(matches!(classify_product_label(&issue), ProductLabel::Unnamed(_)));
    }

    #[test]
    fn test_empty_name_is_unnamed() {
        let issue = issue_with(vec![Label::new("", "006B75")]);
        assert!(matches!(classify_product_label(&issue), ProductLabel::Unnamed(_)));
    }
}
