use crate::store::State;

/// The four fixed tabs of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Main,
    Discounts,
    Markets,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Main, Tab::Discounts, Tab::Markets, Tab::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Main => "Main",
            Tab::Discounts => "Discounts",
            Tab::Markets => "Markets",
            Tab::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MainTabState {
    pub selected_tab: Tab,
    /// Display name on the main screen header, captured at registration.
    pub user_name: String,
    pub is_showing_barcode: bool,
    /// Generated loyalty-card number. No expiry or regeneration policy; it
    /// persists until the app state resets.
    pub barcode_value: Option<String>,
}

impl State for MainTabState {}
