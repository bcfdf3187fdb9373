// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

pub const MSG_NOME_DUPLICADO: &str = "Aluno de mesmo nome já salvo na base :/";
pub const MSG_FALHA_AO_SALVAR: &str = "Não foi possível salvar novo item :/";
pub const MSG_NAO_ENCONTRADO: &str = "Aluno não encontrado na base de dados.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Configuração inválida: {0}")]
    ConfigInvalida(String),

    #[error("Erro ao renderizar template: {0}")]
    TemplateError(#[from] askama::Error),

    // Violação da constraint UNIQUE em `nome`
    #[error("Aluno '{0}' já existe")]
    NomeDuplicado(String),

    // Qualquer outra falha ao gravar um aluno (causa fica no log)
    #[error("Falha ao salvar aluno '{nome}': {source}")]
    FalhaAoSalvar {
        nome: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Aluno '{0}' não encontrado")]
    AlunoNaoEncontrado(String),

    #[error("Entrada inválida: {0}")]
    Validacao(String),
}

// Como converter AppError numa resposta HTTP (corpo JSON { "message": ... })
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, user_message) = match &self {
            AppError::NomeDuplicado(_) => {
                tracing::warn!("{}", self);
                (StatusCode::CONFLICT, MSG_NOME_DUPLICADO.to_string())
            }
            AppError::FalhaAoSalvar { .. } => {
                tracing::warn!("{}", self);
                (StatusCode::BAD_REQUEST, MSG_FALHA_AO_SALVAR.to_string())
            }
            AppError::AlunoNaoEncontrado(_) => {
                tracing::warn!("{}", self);
                (StatusCode::NOT_FOUND, MSG_NAO_ENCONTRADO.to_string())
            }
            AppError::Validacao(detalhe) => {
                tracing::debug!("{}", self);
                (StatusCode::UNPROCESSABLE_ENTITY, detalhe.clone())
            }
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao aceder aos dados.".to_string(),
                )
            }
            AppError::ConfigInvalida(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro de configuração.".to_string(),
                )
            }
            AppError::TemplateError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
