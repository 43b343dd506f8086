use crate::locale::Labels;
use crate::state::PaginationState;
use std::fmt;

/// What the presentation layer needs to draw the list.
///
/// Navigation labels are only present when the matching action is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListView {
    pub header: &'static str,
    pub usernames: Vec<String>,
    /// The loading indicator is shown
    pub loading: bool,
    pub error: Option<String>,
    pub next_label: Option<&'static str>,
    pub previous_label: Option<&'static str>,
}

impl UserListView {
    pub fn new(state: &PaginationState, labels: &'static Labels) -> Self {
        Self {
            header: labels.users,
            usernames: state
                .data()
                .map(|page| page.usernames().map(str::to_string).collect())
                .unwrap_or_default(),
            loading: state.is_loading(),
            error: state.error().map(ToString::to_string),
            next_label: state.has_next().then_some(labels.next_page),
            previous_label: state.has_previous().then_some(labels.previous_page),
        }
    }

    /// Whether `text` appears anywhere in the rendered view
    pub fn shows(&self, text: &str) -> bool {
        self.to_string().lines().any(|line| line.contains(text))
    }
}

impl fmt::Display for UserListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for username in &self.usernames {
            writeln!(f, "  {username}")?;
        }
        if self.loading {
            writeln!(f, "  ...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }

        let navigation = [self.previous_label, self.next_label]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("  ");
        if !navigation.is_empty() {
            writeln!(f, "{navigation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::models::{Item, Page};

    fn loaded(page: u64, total_pages: u64) -> PaginationState {
        let mut state = PaginationState::new();
        let ticket = state.begin(page);
        state.complete(
            ticket,
            Ok(Page {
                content: vec![Item::new(1, "user1", "user1@mail.com")],
                page,
                size: 1,
                total_pages,
            }),
        );
        state
    }

    #[test]
    fn test_first_page_view() {
        let view = UserListView::new(&loaded(0, 3), Locale::En.labels());
        assert_eq!(view.header, "Users");
        assert_eq!(view.usernames, ["user1"]);
        assert!(!view.loading);
        assert_eq!(view.next_label, Some("next >"));
        assert_eq!(view.previous_label, None);
        assert!(view.shows("next >"));
        assert!(!view.shows("< previous"));
    }

    #[test]
    fn test_middle_page_in_turkish() {
        let view = UserListView::new(&loaded(1, 3), Locale::Tr.labels());
        assert_eq!(view.header, "Kullanıcılar");
        assert_eq!(view.next_label, Some("sonraki >"));
        assert_eq!(view.previous_label, Some("< önceki"));
    }

    #[test]
    fn test_loading_before_first_response() {
        let mut state = PaginationState::new();
        state.reload();
        let view = UserListView::new(&state, Locale::En.labels());
        assert!(view.loading);
        assert!(view.usernames.is_empty());
        assert_eq!(view.next_label, None);
        assert_eq!(view.to_string(), "Users\n  ...\n");
    }

    #[test]
    fn test_render_lists_users_and_navigation() {
        let view = UserListView::new(&loaded(1, 3), Locale::En.labels());
        assert_eq!(view.to_string(), "Users\n  user1\n< previous  next >\n");
    }
}
