pub mod api;
pub mod host;
pub mod shared;
pub mod toggle;
pub mod wizard;
