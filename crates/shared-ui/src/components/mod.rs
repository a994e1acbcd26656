pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod dialog;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod sidebar;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use dialog::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use sidebar::*;
pub use skeleton::*;
