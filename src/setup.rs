use serde::Deserialize;
use std::{env, fs, process};

/// Порт по умолчанию, как в эталонной реализации.
const DEFAULT_PORT: u16 = 8080;

/// Данные приложения.
#[derive(Clone, Deserialize)]
pub struct AppConfig {
  /// Порт прослушивания сервера.
  pub port: u16,
}

/// Считывает конфигурацию из данного файла.
fn parse_cfg_file(filepath: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
  let buffer = fs::read_to_string(filepath)?;
  let conf: AppConfig = serde_json::from_str(&buffer)?;
  Ok(conf)
}

/// Возвращает конфигурацию для запуска сервера.
///
/// Без аргументов сервер слушает порт 8080; первым аргументом можно передать путь к JSON-файлу конфигурации вида `{"port": 8081}`.
pub fn get_config() -> AppConfig {
  let args: Vec<String> = env::args().collect();
  match args.get(1) {
    None => AppConfig { port: DEFAULT_PORT },
    Some(filepath) => match parse_cfg_file(filepath) {
      Ok(conf) => conf,
      Err(e) => {
        eprintln!("Не удалось прочитать файл конфигурации: {}", e);
        process::exit(1);
      },
    },
  }
}
