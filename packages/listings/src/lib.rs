//! Search, filter, and pagination engine for the property catalog.
//!
//! The catalog is fetched once per page view from the CMS collaborator and
//! held in memory; everything else here is a pure, synchronous computation
//! over that set:
//!
//! - [`ListingRecord`]: one property as displayed in a result list
//! - [`FilterCriteria`]: the visitor's current constraints, ANDed together
//! - [`SearchState`]: criteria plus the current page, mutated through
//!   [`CriteriaUpdate`] messages
//! - query-string synchronization: [`SearchState::from_query_string`] /
//!   [`SearchState::to_query_string`], with the address bar injected as a
//!   [`QueryStringHost`]
//! - [`paginate`]: page clamping and slice boundaries
//! - [`project`]: filter + paginate + slice, producing the visible page
//! - [`ListingSource`]: the async port a CMS adapter implements
//!
//! The store is the single source of truth; the URL is a derived, shareable
//! projection of it. Catalog sizes are hundreds of records, so every change
//! re-filters the full set rather than maintaining an incremental index.

mod filter;
mod pagination;
mod projection;
mod query;
mod record;
mod source;
mod store;

pub use filter::FilterCriteria;
pub use pagination::{paginate, PageItem, PageSlice};
pub use projection::{project, Projection};
pub use query::QueryStringHost;
pub use record::{Agent, Category, ListingRecord, TransactionKind};
pub use source::{FetchError, ListingSource};
pub use store::{CriteriaUpdate, SearchState};
