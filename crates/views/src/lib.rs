pub mod filter;
pub mod pages;
pub mod paginate;
pub mod slot;
pub mod state;
pub mod trend;

#[cfg(test)]
mod fake;

pub use filter::{filter_customers, CustomerFilter};
pub use paginate::{paginate, Page};
pub use slot::{Slot, Ticket};
pub use state::{ErrorInfo, FallbackPolicy, Provenance, Status, ViewState};
pub use trend::{series_delta, Delta, Trend};
