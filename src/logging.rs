//! Inicialización de logs para el binario.
//!
//! Los crates `med-*` escriben con la fachada `log`; el subscriber de
//! `tracing` instala el puente `LogTracer`, así que esos registros también
//! salen por aquí.
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    // Un segundo init (p. ej. en tests) no es un error para la aplicación.
    let _ = fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();
}
