//! Pull request exclusion.
//!
//! The tracker's issue listing also returns pull requests; these never
//! reach a per-issue action.

use crate::domain::models::Issue;

/// Drop every pull request from a page, keeping issue order.
pub fn exclude_pull_requests(page: Vec<Issue>) -> Vec<Issue> {
    page.into_iter()
        .filter(|issue| !issue.is_pull_request)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn issue(number: u64) -> Issue {
        Issue::new(number, format!("https://github.com/o/r/issues/{number}"))
    }

    #[test]
    fn test_removes_pull_requests_and_keeps_order() {
        let page = vec![
            issue(1),
            issue(2).as_pull_request(),
            issue(3),
            issue(4).as_pull_request(),
            issue(5),
        ];
        let numbers: Vec<u64> = exclude_pull_requests(page).iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 3, 5]);
    }

    #[test]
    fn test_all_pull_requests_yields_empty() {
        let page = vec![issue(1).as_pull_request(), issue(2).as_pull_request()];
        assert!(exclude_pull_requests(page).is_empty());
    }

    #[test]
    fn test_empty_page() {
        assert!(exclude_pull_requests(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_keeps_exactly_the_issues_in_order(
            flags in prop::collection::vec(any::<bool>(), 0..64)
        ) {
            let page: Vec<Issue> = flags
                .iter()
                .enumerate()
                .map(|(i, is_pr)| {
                    let it = issue(i as u64);
                    if *is_pr { it.as_pull_request() } else { it }
                })
                .collect();
            let expected: Vec<u64> = flags
                .iter()
                .enumerate()
                .filter(|(_, is_pr)| !**is_pr)
                .map(|(i, _)| i as u64)
                .collect();

            let kept: Vec<u64> = exclude_pull_requests(page).iter().map(|i| i.number).collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
