use rover_core::RoverConfig;

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> RoverConfig {
    let Some(path) = std::env::args().nth(1) else {
        return RoverConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|json| RoverConfig::from_json_str(&json).map_err(|err| err.to_string()));
    match loaded {
        Ok(config) => {
            rover_web_lib::log_ui_action(&format!("loaded rover config from {}", path));
            config
        }
        Err(err) => {
            rover_web_lib::log_ui_action(&format!("failed to load {}: {}", path, err));
            RoverConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> RoverConfig {
    RoverConfig::default()
}

#[macroquad::main("Rover Simulator")]
async fn main() {
    rover_web_lib::run(load_config()).await;
}
