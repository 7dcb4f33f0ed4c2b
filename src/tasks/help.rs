//! Static user-facing text.

/// Printed after the last `setup` step.
pub const SETUP_COMPLETE: &str =
    "Setup completado. Ejecuta 'devtask dev' para iniciar el servidor.";

const HELP: &str = "\
Uso: devtask <comando>

Comandos disponibles:
  install    - Instalar dependencias de Python
  setup      - Configuración inicial completa (dependencias, base de datos y migraciones)
  dev        - Iniciar el servidor de desarrollo en 0.0.0.0:8000
  db-up      - Levantar la base de datos con Docker
  migrate    - Aplicar migraciones
  superuser  - Crear un superusuario";

/// The usage listing shown for any unrecognized token.
pub fn help_text() -> &'static str {
    HELP
}
