//! Dataset retrieval: HTTP transport, wire types, and the paginating
//! retriever.

mod mock;
mod response;
mod retriever;
mod transport;

pub use mock::{MockTransport, RecordingSleeper};
pub use response::{ConfigInfo, DatasetInfo, RowEntry, RowsPage};
pub use retriever::{RetrievalConfig, Retriever, DEFAULT_API_BASE, ROWS_PER_PAGE};
pub use transport::{HttpResponse, HttpTransport, Sleeper, ThreadSleeper, Transport};
