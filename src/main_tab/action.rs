use crate::store::Action;

use super::state::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTabAction {
    TabSelected(Tab),
    ShowBarcodeTapped,
}

impl Action for MainTabAction {}
