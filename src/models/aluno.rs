// src/models/aluno.rs
use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::FromRow;

/// Linha da tabela `aluno`.
/// `id` e `data_cadastro` são atribuídos pelo sistema, nunca pelo cliente.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Aluno {
    pub id: i64, // SQLite INTEGER -> i64
    pub nome: String,
    pub matricula: i64,
    pub classe: String,
    pub turno: String,
    pub email: String,
    pub data_cadastro: NaiveDateTime,
}

// Dados do formulário de cadastro (POST /aluno)
#[derive(Debug, Clone, Deserialize)]
pub struct NovoAlunoForm {
    pub nome: String,
    pub matricula: i64,
    pub classe: String,
    pub turno: String,
    pub email: String,
}

// Query string ?nome=... usada pela busca e pela remoção
#[derive(Debug, Deserialize)]
pub struct AlunoBuscaQuery {
    pub nome: String,
}
