//! Page-level view state.

/// How the properties page lays out its results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewType {
    #[default]
    List,
    Grid,
}

impl ViewType {
    pub fn label(&self) -> &'static str {
        match self {
            ViewType::List => "List",
            ViewType::Grid => "Grid",
        }
    }

    pub fn variants() -> &'static [ViewType] {
        &[ViewType::List, ViewType::Grid]
    }
}
