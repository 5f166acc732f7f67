/// Search boxes and side panels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub(crate) report_search_text: String,
    pub(crate) field_search_text: String,
    pub(crate) relations_search_text: String,
    pub(crate) left_nav_open: bool,
    pub(crate) right_nav_open: bool,
}
