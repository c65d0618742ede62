pub mod http_executor;
pub mod page_address;

pub use http_executor::HttpExecutor;
pub use page_address::PageAddress;
