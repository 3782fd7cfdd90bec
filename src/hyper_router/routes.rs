//! Отвечает за отдачу методов сервиса, в том числе статус-коды и текст ошибок.

use hyper::Body;
use hyper::http::{Request, Response};

use crate::color;
use crate::color::validate::validate_colors;
use crate::hyper_router::resp;
use crate::model::{extract, ColorsRequest, CombinedColor};

/// Отвечает за смешивание цветов.
///
/// Принимает JSON вида `{"colors": ["#RRGGBB", ...]}`, проверяет список, усредняет цвета и возвращает усреднённый цвет вместе с именем ближайшего цвета палитры.
pub async fn combine_colors(req: Request<Body>) -> Response<Body> {
  let colors_req = match extract::<ColorsRequest>(req).await {
    Ok(v) => v,
    _ => return resp::from_code_and_msg(400, Some("Invalid request body")),
  };
  if let Err(e) = validate_colors(&colors_req.colors) {
    return resp::from_code_and_msg(400, Some(&e.to_string()));
  };
  // После валидации разбор цветов не может завершиться ошибкой.
  let (combined_color, color_name) = match color::combine(&colors_req.colors) {
    Ok(v) => v,
    _ => return resp::from_code_and_msg(500, None),
  };
  let result = CombinedColor {
    combined_color,
    color_name: color_name.to_string(),
  };
  match serde_json::to_string(&result) {
    Ok(body) => resp::from_json(body),
    _ => resp::from_code_and_msg(500, None),
  }
}
