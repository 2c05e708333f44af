pub mod banner;

pub use banner::{project_banner, BannerView, ErrorBanner};
