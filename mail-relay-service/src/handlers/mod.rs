pub mod metrics;
pub mod notificaciones;

pub use self::metrics::metrics;
pub use notificaciones::notificaciones;
