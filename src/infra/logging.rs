use tracing_subscriber::EnvFilter;

/// Инициализация логов для CLI. `RUST_LOG` имеет приоритет над `verbose`.
///
/// Повествование игры идёт на уровне info, розданные руки и колода – debug.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: повторная инициализация (например, из тестов) не паникует.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
