//! Отвечает за проверку списка цветов, полученного от клиента.

use custom_error::custom_error;

custom_error!{ pub ColorsError
  EmptyColorList = "No colors provided",
  IncompatibleColorFormat{color: String} = "Invalid color format",
  IncompatibleHexCode{color: String} = "Invalid hex color code"
}

/// Проверяет список цветов на соответствие требованиям.
///
/// Проверки выполняются по порядку, возвращается первая найденная ошибка:
/// 1. список непуст;
/// 2. каждый элемент состоит ровно из 7 символов и начинается с `#`;
/// 3. остальные 6 символов каждого элемента - шестнадцатеричные цифры
///    (знаки `+`/`-` и любые другие символы отвергаются).
pub fn validate_colors(colors: &[String]) -> Result<(), ColorsError> {
  if colors.is_empty() {
    return Err(ColorsError::EmptyColorList);
  };
  for color in colors {
    if color.len() != 7 || !color.starts_with('#') {
      return Err(ColorsError::IncompatibleColorFormat { color: color.clone() });
    };
    if !color[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(ColorsError::IncompatibleHexCode { color: color.clone() });
    };
  }
  Ok(())
}
