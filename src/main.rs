use circuit_trainer::config::AppConfig;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = circuit_trainer::boot(&config) {
        log::error!("[{}] startup failed: {err}", err.error_code());
    }
}
