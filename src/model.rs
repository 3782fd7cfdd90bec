//! Модель данных приложения.

use custom_error::custom_error;
use hyper::Body;
use hyper::body::to_bytes;
use hyper::http::Request;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// Набор цветов для смешивания.
#[derive(Deserialize, Serialize)]
pub struct ColorsRequest {
  /// Цвета в виде #RRGGBB.
  pub colors: Vec<String>,
}

/// Результат смешивания.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedColor {
  /// Усреднённый цвет в виде #RRGGBB.
  pub combined_color: String,
  /// Имя ближайшего цвета палитры.
  pub color_name: String,
}

/// Возможные ошибки при извлечении данных из тела HTTP-запроса.
custom_error!{ pub ExtractionError
  FromBody = "Не удалось получить данные из тела запроса.",
  FromBytes = "Не удалось создать строку из набора байт тела запроса.",
  FromJson = "Не удалось десериализовать JSON."
}

/// Извлекает данные из тела HTTP-запроса.
///
/// Преобразует тело запроса в строку, парсит результат в тип T и возвращает.
pub async fn extract<T>(req: Request<Body>) -> Result<T, ExtractionError>
  where
    T: DeserializeOwned,
{
  let body = req.into_body();
  let body = match to_bytes(body).await {
    Err(_) => return Err(ExtractionError::FromBody),
    Ok(v) => v,
  };
  let body = match String::from_utf8(body.to_vec()) {
    Err(_) => return Err(ExtractionError::FromBytes),
    Ok(v) => v,
  };
  match serde_json::from_str::<T>(&body) {
    Err(_) => Err(ExtractionError::FromJson),
    Ok(v) => Ok(v),
  }
}
