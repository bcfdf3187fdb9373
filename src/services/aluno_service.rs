// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{Aluno, NovoAlunoForm},
};
use chrono::{Local, NaiveDateTime, Timelike};
use sqlx::SqlitePool;

const SELECT_ALUNO: &str = r#"
    SELECT id, nome, matricula, classe, turno, email, data_cadastro
    FROM aluno
"#;

/// Insere um novo aluno e devolve a linha gravada (com `id` e `data_cadastro`).
///
/// Distingue a violação de UNIQUE em `nome` (`NomeDuplicado`) de qualquer
/// outra falha da base (`FalhaAoSalvar`).
pub async fn criar_aluno(db_pool: &SqlitePool, novo: &NovoAlunoForm) -> AppResult<Aluno> {
    tracing::debug!("Adicionando aluno de nome: '{}'", novo.nome);

    // Precisão de segundos: é o que a representação expõe
    let data_cadastro: NaiveDateTime = Local::now()
        .naive_local()
        .with_nanosecond(0)
        .unwrap_or_else(|| Local::now().naive_local());

    let insert_result = sqlx::query(
        r#"
        INSERT INTO aluno (nome, matricula, classe, turno, email, data_cadastro)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&novo.nome)
    .bind(novo.matricula)
    .bind(&novo.classe)
    .bind(&novo.turno)
    .bind(&novo.email)
    .bind(data_cadastro)
    .execute(db_pool)
    .await;

    let id = match insert_result {
        Ok(done) => done.last_insert_rowid(),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(AppError::NomeDuplicado(novo.nome.clone()));
        }
        Err(source) => {
            return Err(AppError::FalhaAoSalvar {
                nome: novo.nome.clone(),
                source,
            });
        }
    };

    tracing::debug!("Adicionado aluno de nome: '{}' (id {})", novo.nome, id);

    Ok(Aluno {
        id,
        nome: novo.nome.clone(),
        matricula: novo.matricula,
        classe: novo.classe.clone(),
        turno: novo.turno.clone(),
        email: novo.email.clone(),
        data_cadastro,
    })
}

/// Busca todos os alunos, na ordem padrão da base.
pub async fn listar_alunos(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Coletando alunos");
    let alunos = sqlx::query_as::<_, Aluno>(SELECT_ALUNO)
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("{} alunos encontrados", alunos.len());
    Ok(alunos)
}

/// Primeiro aluno cujo nome é exatamente `nome`.
pub async fn buscar_aluno_por_nome(db_pool: &SqlitePool, nome: &str) -> AppResult<Option<Aluno>> {
    tracing::debug!("Coletando dados sobre o aluno '{}'", nome);
    let sql = format!("{} WHERE nome = ?1 LIMIT 1", SELECT_ALUNO);
    let aluno = sqlx::query_as::<_, Aluno>(&sql)
        .bind(nome)
        .fetch_optional(db_pool)
        .await?;

    if aluno.is_some() {
        tracing::debug!("Aluno encontrado: '{}'", nome);
    }
    Ok(aluno)
}

/// Remove todos os alunos com o nome dado. Devolve o número de linhas apagadas.
pub async fn remover_aluno_por_nome(db_pool: &SqlitePool, nome: &str) -> AppResult<u64> {
    tracing::debug!("Deletando dados do aluno '{}'", nome);
    let rows_affected = sqlx::query("DELETE FROM aluno WHERE nome = ?1")
        .bind(nome)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected > 0 {
        tracing::debug!("Deletado aluno '{}' ({} linha(s))", nome, rows_affected);
    }
    Ok(rows_affected)
}
