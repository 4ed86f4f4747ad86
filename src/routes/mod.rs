pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register)
        .service(auth::login)
        .service(users::get_users)
        .service(tasks::create_task)
        .service(tasks::get_tasks)
        .service(tasks::update_task)
        .service(tasks::delete_task)
        .service(tasks::delete_tasks);
}
