// src/web/aluno_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{AlunoBuscaQuery, NovoAlunoForm},
    services::aluno_service,
    state::AppState,
    web::views::{AlunoRemovido, AlunoView, ListagemAlunos},
};
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Form, Query, State,
    },
    Json,
};

// --- Handlers ---

/// POST /aluno - Adiciona um novo aluno à base
pub async fn handle_criar_aluno(
    State(state): State<AppState>,
    form: Result<Form<NovoAlunoForm>, FormRejection>, // Body: tem de ser o último extrator
) -> AppResult<Json<AlunoView>> {
    let Form(novo) = form.map_err(|e| AppError::Validacao(e.body_text()))?;
    tracing::debug!("POST /aluno: nome '{}'", novo.nome);

    let aluno = aluno_service::criar_aluno(&state.db_pool, &novo).await?;
    Ok(Json(AlunoView::from(&aluno)))
}

/// GET /alunos - Lista todos os alunos (lista vazia não é erro)
pub async fn handle_listar_alunos(State(state): State<AppState>) -> AppResult<Json<ListagemAlunos>> {
    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    Ok(Json(ListagemAlunos::from_alunos(&alunos)))
}

/// GET /aluno?nome=... - Busca um aluno pelo nome exato
pub async fn handle_buscar_aluno(
    State(state): State<AppState>,
    query: Result<Query<AlunoBuscaQuery>, QueryRejection>,
) -> AppResult<Json<AlunoView>> {
    let Query(params) = query.map_err(|e| AppError::Validacao(e.body_text()))?;

    let aluno = aluno_service::buscar_aluno_por_nome(&state.db_pool, &params.nome)
        .await?
        .ok_or(AppError::AlunoNaoEncontrado(params.nome))?;

    Ok(Json(AlunoView::from(&aluno)))
}

/// DELETE /aluno?nome=... - Remove todos os alunos com esse nome
pub async fn handle_remover_aluno(
    State(state): State<AppState>,
    query: Result<Query<AlunoBuscaQuery>, QueryRejection>,
) -> AppResult<Json<AlunoRemovido>> {
    let Query(params) = query.map_err(|e| AppError::Validacao(e.body_text()))?;
    let nome = decodificar_nome(params.nome, state.config.delete_double_decode);

    let removidos = aluno_service::remover_aluno_por_nome(&state.db_pool, &nome).await?;
    if removidos == 0 {
        return Err(AppError::AlunoNaoEncontrado(nome));
    }

    Ok(Json(AlunoRemovido::new(&nome)))
}

// --- Auxiliares ---

/// O extrator `Query` já decodifica uma vez. Em modo de compatibilidade
/// aplica mais duas decodificações, como os clientes antigos esperam.
fn decodificar_nome(nome: String, compat_dupla: bool) -> String {
    if !compat_dupla {
        return nome;
    }
    let uma_vez = percent_decode_lossy(&nome);
    percent_decode_lossy(&uma_vez)
}

// '+' não vira espaço; bytes UTF-8 inválidos viram U+FFFD
fn percent_decode_lossy(valor: &str) -> String {
    let bytes = urlencoding::decode_binary(valor.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
