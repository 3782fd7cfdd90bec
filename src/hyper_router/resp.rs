use hyper::Body;
use hyper::http::{Response, StatusCode};

/// Формирует ответ из кода HTTP и необязательного текста.
pub fn from_code_and_msg(code: u16, msg: Option<&str>) -> Response<Body> {
  match msg {
    None => Response::builder().status(code).body(Body::empty()).unwrap(),
    Some(msg) => Response::builder()
      .header("Content-Type", "text/plain; charset=utf-8")
      .status(code)
      .body(Body::from(msg.to_owned()))
      .unwrap(),
  }
}

/// Формирует ответ 200 OK с телом JSON.
pub fn from_json(body: String) -> Response<Body> {
  Response::builder()
    .header("Content-Type", "application/json")
    .status(StatusCode::OK)
    .body(Body::from(body))
    .unwrap()
}

/// Выдаёт ошибку 404 NOT FOUND.
pub fn route_404() -> Response<Body> {
  Response::builder()
    .status(StatusCode::NOT_FOUND)
    .body(Body::empty())
    .unwrap()
}
