pub mod get_portfolio;
pub mod lookup_portfolio;

pub use get_portfolio::get_portfolio_handler;
pub use lookup_portfolio::lookup_portfolio_handler;
