//! Search box and side panel handlers.

use super::MessageHandler;
use crate::error::TransitionError;
use crate::message::LayoutMessage;
use crate::state::Snapshot;

/// Handler for layout messages. Each message touches exactly one field.
pub struct LayoutHandler;

impl MessageHandler<LayoutMessage> for LayoutHandler {
    fn handle(&self, state: &Snapshot, msg: LayoutMessage) -> Result<Snapshot, TransitionError> {
        let mut next = state.clone();
        let layout = &mut next.layout;
        match msg {
            LayoutMessage::ReportSearchChanged(text) => layout.report_search_text = text,
            LayoutMessage::FieldSearchChanged(text) => layout.field_search_text = text,
            LayoutMessage::RelationsSearchChanged(text) => layout.relations_search_text = text,
            LayoutMessage::LeftNavToggled => layout.left_nav_open = !layout.left_nav_open,
            LayoutMessage::RightNavToggled => layout.right_nav_open = !layout.right_nav_open,
            LayoutMessage::Unknown => {}
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_flip_one_panel() {
        let state = Snapshot::new();
        let next = LayoutHandler
            .handle(&state, LayoutMessage::LeftNavToggled)
            .expect("layout never fails");
        assert!(next.left_nav_open());
        assert!(!next.right_nav_open());
        assert!(!state.left_nav_open());

        let back = LayoutHandler
            .handle(&next, LayoutMessage::LeftNavToggled)
            .expect("layout never fails");
        assert_eq!(back, state);
    }

    #[test]
    fn search_texts_are_independent() {
        let state = LayoutHandler
            .handle(
                &Snapshot::new(),
                LayoutMessage::FieldSearchChanged("title".to_string()),
            )
            .expect("layout never fails");
        assert_eq!(state.field_search_text(), "title");
        assert_eq!(state.report_search_text(), "");
        assert_eq!(state.relations_search_text(), "");
    }
}
