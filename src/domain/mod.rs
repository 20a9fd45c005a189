pub mod affordability;
pub mod amortization;
pub mod costs;
pub mod error;
pub mod listing;

pub use affordability::{solve_affordability, AffordabilityResult, FinancialProfile};
pub use costs::{derive_costs, CostBreakdown, CostPolicy};
pub use error::{FinanceError, InvalidInput};
pub use listing::{best_value, Listing, ListingWithCosts};
