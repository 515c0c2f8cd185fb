use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restaurant_manager::config::Config;
use restaurant_manager::modules::boards::repositories::BoardRepository;
use restaurant_manager::modules::boards::services::BoardService;
use restaurant_manager::modules::bookings::repositories::BookingRepository;
use restaurant_manager::modules::bookings::services::BookingService;
use restaurant_manager::modules::employees::repositories::EmployeeRepository;
use restaurant_manager::modules::employees::services::EmployeeService;
use restaurant_manager::modules::products::repositories::ProductRepository;
use restaurant_manager::modules::products::services::ProductService;
use restaurant_manager::modules::{boards, bookings, employees, products};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restaurant_manager=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting restaurant manager back office");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config.database.create_pool().await?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database ready at {}", config.database.url);

    let board_service = web::Data::new(BoardService::new(BoardRepository::new(db_pool.clone())));
    let booking_service =
        web::Data::new(BookingService::new(BookingRepository::new(db_pool.clone())));
    let employee_service =
        web::Data::new(EmployeeService::new(EmployeeRepository::new(db_pool.clone())));
    let product_service =
        web::Data::new(ProductService::new(ProductRepository::new(db_pool.clone())));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(board_service.clone())
            .app_data(booking_service.clone())
            .app_data(employee_service.clone())
            .app_data(product_service.clone())
            .configure(boards::controllers::configure)
            .configure(bookings::controllers::configure)
            .configure(employees::controllers::configure)
            .configure(products::controllers::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "restaurant-manager"
    }))
}
