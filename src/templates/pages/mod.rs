pub mod calculator;
pub mod home;
pub mod login;
pub mod properties;
pub mod saved;

pub use calculator::{calculator_page, CalculatorForm, CalculatorVm};
pub use home::{home_page, HomeVm};
pub use login::login_page;
pub use properties::{properties_page, SearchVm};
pub use saved::saved_page;
