// Building blocks
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;

// Page scaffolding
pub mod empty_state;
pub mod loading;
pub mod navbar;
pub mod page_header;
pub mod search_bar;
pub mod stat_card;

// Data display
pub mod data_table;
pub mod detail_list;

// Overlays
pub mod alert_dialog;

// Re-exports for convenience
pub use alert::*;
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use empty_state::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use loading::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use stat_card::*;
