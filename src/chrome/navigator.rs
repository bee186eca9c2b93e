use log::debug;

use super::host::{PageHost, ScrollOptions};

/// Moves the viewport to a section anchor. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    options: ScrollOptions,
}

impl Navigator {
    /// Scrolls so the top of element `id` meets the top of the viewport.
    ///
    /// Unknown ids are a no-op. Repeated calls each issue a scroll.
    pub fn scroll_to<H: PageHost + ?Sized>(&self, host: &H, id: &str) -> bool {
        let found = host.scroll_into_view(id, self.options);
        if !found {
            debug!("no element for #{id}, not scrolling");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::{
        host::{BlockAlignment, ScrollBehavior},
        mock::MockHost,
    };

    #[test]
    fn test_scroll_to_existing_section() {
        let host = MockHost::with_all_sections();
        let navigator = Navigator::default();
        assert!(navigator.scroll_to(&host, "projects"));
        assert_eq!(
            host.scroll_calls(),
            vec![(
                "projects".to_string(),
                ScrollOptions {
                    behavior: ScrollBehavior::Smooth,
                    block: BlockAlignment::Start,
                }
            )]
        );
    }

    #[test]
    fn test_scroll_to_missing_is_noop() {
        let host = MockHost::with_all_sections();
        assert!(!Navigator::default().scroll_to(&host, "missing-id"));
        assert!(host.scroll_calls().is_empty());
    }

    #[test]
    fn test_repeat_scroll_not_deduplicated() {
        let host = MockHost::with_all_sections();
        let navigator = Navigator::default();
        navigator.scroll_to(&host, "skills");
        navigator.scroll_to(&host, "skills");
        assert_eq!(host.scroll_calls().len(), 2);
    }
}
