mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use doc::ApiDoc;
use log::info;
use migration::{Migrator, MigratorTrait};
use routes::{
    announcements, attendance, attendance_requests, faqs, fees, grades, health, journey, news,
    root, settings, staff, students, teachers, timetable,
};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    env_logger::init();
    dotenvy::dotenv().ok();

    let db = database::db::create_connection()
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let state = AppState { db };

    let app = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route(
            "/attendance",
            get(attendance::get_attendance).post(attendance::record_attendance),
        )
        .route(
            "/attendance-requests",
            get(attendance_requests::get_attendance_requests)
                .post(attendance_requests::create_attendance_request)
                .put(attendance_requests::decide_attendance_request),
        )
        .route(
            "/students",
            get(students::get_students)
                .post(students::create_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/students/attendance-stats",
            get(students::get_attendance_stats),
        )
        .route(
            "/teachers",
            get(teachers::get_teachers)
                .post(teachers::create_teacher)
                .put(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
        .route(
            "/grades",
            get(grades::get_grades)
                .post(grades::create_grade)
                .put(grades::update_grade),
        )
        .route("/grades/summary", get(grades::get_grade_summary))
        .route(
            "/grades/seed",
            post(grades::seed_grades).delete(grades::clear_grades),
        )
        .route(
            "/announcements",
            get(announcements::get_announcements)
                .post(announcements::create_announcement)
                .put(announcements::update_announcements)
                .delete(announcements::delete_announcement),
        )
        .route(
            "/news",
            get(news::get_news)
                .post(news::create_news_post)
                .put(news::update_news)
                .delete(news::delete_news_post),
        )
        .route(
            "/faq",
            get(faqs::get_faqs)
                .post(faqs::create_faq)
                .put(faqs::update_faqs)
                .delete(faqs::delete_faq),
        )
        .route(
            "/staff",
            get(staff::get_staff)
                .post(staff::create_staff_member)
                .put(staff::update_staff)
                .delete(staff::delete_staff_member),
        )
        .route(
            "/journey",
            get(journey::get_journey)
                .post(journey::create_journey_entry)
                .put(journey::update_journey)
                .delete(journey::delete_journey_entry),
        )
        .route(
            "/timetable",
            get(timetable::get_timetable)
                .post(timetable::create_timetable_slot)
                .put(timetable::update_timetable_slot)
                .delete(timetable::delete_timetable_slot),
        )
        .route(
            "/fees",
            get(fees::get_fees)
                .post(fees::create_fee)
                .put(fees::update_fee)
                .delete(fees::delete_fee),
        )
        .route(
            "/settings/{scope}",
            get(settings::get_settings).put(settings::put_settings),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind port");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
