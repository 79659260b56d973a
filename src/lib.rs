//! medverify
//!
//! Este crate actúa como la librería de la aplicación:
//! - Expone `errors` para los fallos de nivel aplicación (config, uso, IO).
//! - Expone `config` y `cli`, que el binario `medverify` compone.
//!
//! La lógica de integridad vive en los crates `med-*` del workspace.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;

#[cfg(test)]
mod tests {
	use super::errors::core_error::CoreError;

	#[test]
	fn core_error_tests() {
		let i = CoreError::Internal("fallo".into()).to_string();
		assert_eq!(i, "Error interno: fallo");
	}

	#[test]
	fn usage_error_tests() {
		let u = CoreError::Usage("falta --id".into()).to_string();
		assert_eq!(u, "Uso incorrecto: falta --id");
	}
}
