pub mod card;
pub mod error;
pub mod listing_card;
pub mod money;

pub use card::{card, stat_card};
pub use error::{error_page, form_error};
pub use listing_card::{listing_card, SaveAction};
pub use money::{dollars, dollars_f};
