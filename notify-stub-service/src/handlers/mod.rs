//! HTTP handlers for notify-stub-service.

pub mod health;
pub mod metrics;
pub mod notify;

pub use health::health_check;
pub use self::metrics::metrics;
pub use notify::notify;
