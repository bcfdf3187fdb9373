// src/web/views.rs
// Representações enviadas ao cliente (JSON)
use crate::models::aluno::Aluno;
use serde::{Deserialize, Serialize};

pub const FORMATO_DATA_CADASTRO: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlunoView {
    pub id: i64,
    pub nome: String,
    pub matricula: i64,
    pub classe: String,
    pub turno: String,
    pub email: String,
    pub data_cadastro: String, // "YYYY-MM-DD HH:MM:SS"
}

impl From<&Aluno> for AlunoView {
    fn from(aluno: &Aluno) -> Self {
        Self {
            id: aluno.id,
            nome: aluno.nome.clone(),
            matricula: aluno.matricula,
            classe: aluno.classe.clone(),
            turno: aluno.turno.clone(),
            email: aluno.email.clone(),
            data_cadastro: aluno.data_cadastro.format(FORMATO_DATA_CADASTRO).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListagemAlunos {
    pub alunos: Vec<AlunoView>,
}

impl ListagemAlunos {
    pub fn from_alunos(alunos: &[Aluno]) -> Self {
        Self {
            alunos: alunos.iter().map(AlunoView::from).collect(),
        }
    }
}

/// Confirmação de remoção. `id` carrega o nome removido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlunoRemovido {
    pub message: String,
    pub id: String,
}

impl AlunoRemovido {
    pub fn new(nome: &str) -> Self {
        Self {
            message: "Aluno removido".to_string(),
            id: nome.to_string(),
        }
    }
}
