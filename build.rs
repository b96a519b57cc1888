use std::fs;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The bundled default must name a level `log::LevelFilter` accepts
    let level = table
        .get("log")
        .and_then(|log| log.get("level"))
        .and_then(|level| level.as_str())
        .expect("default_config.toml must set [log] level");

    if !LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
        panic!(
            "default_config.toml: unknown [log] level {:?}, expected one of {:?}",
            level, LOG_LEVELS
        );
    }
}
