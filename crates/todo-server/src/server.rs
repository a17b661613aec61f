use actix_web::{web, App, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::handlers::{self, lists, todos};
use crate::middleware::RequestTracing;
use crate::state::AppState;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::to_lists))
        .service(
            web::scope("/lists")
                .route("", web::get().to(lists::index))
                .route("", web::post().to(lists::create))
                .route("/new", web::get().to(lists::new_form))
                .route("/{list}", web::get().to(lists::show))
                .route("/{list}", web::post().to(lists::update))
                .route("/{list}/edit", web::get().to(lists::edit_form))
                .route("/{list}/delete", web::post().to(lists::delete))
                .route("/{list}/complete_all", web::post().to(lists::complete_all))
                .route("/{list}/todos", web::post().to(todos::create))
                .route("/{list}/todos/{todo}", web::post().to(todos::update))
                .route("/{list}/todos/{todo}/delete", web::post().to(todos::delete)),
        )
        .default_service(web::to(handlers::to_lists));
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let bind_address = config.bind_address();
    log::info!("Initializing server on {}", bind_address);

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestTracing)
            .configure(app_config)
    })
    .bind(bind_address)?
    .run()
    .await
}
