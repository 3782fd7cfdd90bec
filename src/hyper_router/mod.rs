//! Модуль hyper_router отвечает за маршрутизацию запросов клиентов к сервису смешивания цветов.

use std::convert::Infallible;
use hyper::{Body, Method};
use hyper::http::{Request, Response};

pub mod resp;
mod routes;

/// Обрабатывает сигнал завершения работы сервера.
pub async fn shutdown() {
  tokio::signal::ctrl_c()
    .await
    .expect("Не удалось установить комбинацию Ctrl+C как завершающую работу.");
}

/// Обрабатывает запросы клиентов.
pub async fn router(req: Request<Body>) -> Result<Response<Body>, Infallible> {
  Ok(match (req.method(), req.uri().path()) {
    (&Method::POST, "/colors") => routes::combine_colors(req).await,
    _ => resp::route_404(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn unknown_path_is_404() {
    let req = Request::builder()
      .method(Method::POST)
      .uri("/muffins")
      .body(Body::empty())
      .unwrap();
    let resp = router(req).await.unwrap();
    assert_eq!(resp.status(), 404);
  }

  #[tokio::test]
  async fn wrong_method_is_404() {
    let req = Request::builder()
      .method(Method::GET)
      .uri("/colors")
      .body(Body::empty())
      .unwrap();
    let resp = router(req).await.unwrap();
    assert_eq!(resp.status(), 404);
  }
}
