// src/web/mod.rs
pub mod aluno_handlers;
pub mod docs_handlers;
pub mod routes;
pub mod views;
