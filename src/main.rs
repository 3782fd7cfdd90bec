use std::convert::Infallible;
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;

mod color;
mod hyper_router;
mod model;
mod setup;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  let cnf = setup::get_config();
  let make_svc = make_service_fn(|_conn| {
    async { Ok::<_, Infallible>(service_fn(hyper_router::router)) }
  });
  let addr = ([0, 0, 0, 0], cnf.port).into();
  let server = Server::bind(&addr).serve(make_svc);
  println!("Сервер слушает по адресу http://{}", addr);
  let graceful = server.with_graceful_shutdown(hyper_router::shutdown());
  if let Err(e) = graceful.await {
    eprintln!("Ошибка сервера: {}", e);
  }
  Ok(())
}
