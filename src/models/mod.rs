// src/models/mod.rs
pub mod aluno;
