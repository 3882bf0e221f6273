pub mod session;

pub use session::PortalSession;

use crate::error::Result;
use crate::extract::RawRow;
use async_trait::async_trait;

/// Source of captured table rows.
///
/// The live implementation drives a browser; tests inject fixtures so
/// classification can be exercised without a portal session.
#[async_trait]
pub trait RowSource {
    async fn rows(&self) -> Result<Vec<RawRow>>;
}
