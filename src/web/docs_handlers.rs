// src/web/docs_handlers.rs
use crate::{
    error::AppResult,
    templates::{DocsPage, RotaDoc},
};
use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

pub const TITULO_API: &str = "API de Alunos";
pub const VERSAO_API: &str = "1.0.0";
pub const DOCS_PATH: &str = "/openapi";
pub const OPENAPI_JSON_PATH: &str = "/openapi/openapi.json";

const ROTAS: &[RotaDoc] = &[
    RotaDoc { metodo: "POST", caminho: "/aluno", descricao: "Adiciona um novo aluno à base" },
    RotaDoc { metodo: "GET", caminho: "/alunos", descricao: "Lista todos os alunos cadastrados" },
    RotaDoc { metodo: "GET", caminho: "/aluno?nome=", descricao: "Busca um aluno pelo nome" },
    RotaDoc { metodo: "DELETE", caminho: "/aluno?nome=", descricao: "Remove um aluno pelo nome" },
];

/// GET / - Redireciona (302) para a página de documentação
pub async fn handle_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)])
}

/// GET /openapi - Página HTML com a lista de rotas
pub async fn handle_docs_page() -> AppResult<Html<String>> {
    let template = DocsPage {
        titulo: TITULO_API,
        versao: VERSAO_API,
        rotas: ROTAS,
        spec_url: OPENAPI_JSON_PATH,
    };
    // askama::Error converte para AppError::TemplateError
    Ok(Html(template.render()?))
}

/// GET /openapi/openapi.json - Documento OpenAPI 3 da API
pub async fn handle_openapi_json() -> Json<Value> {
    Json(openapi_document())
}

fn openapi_document() -> Value {
    let erro = json!({ "$ref": "#/components/schemas/ErrorSchema" });
    let aluno_view = json!({ "$ref": "#/components/schemas/AlunoViewSchema" });
    let nome_query = json!([{
        "name": "nome", "in": "query", "required": true,
        "schema": { "type": "string", "example": "João Silva" }
    }]);

    json!({
        "openapi": "3.0.3",
        "info": { "title": TITULO_API, "version": VERSAO_API },
        "tags": [
            { "name": "Aluno", "description": "Adição, visualização e remoção de alunos à base" }
        ],
        "paths": {
            "/alunos": {
                "get": {
                    "tags": ["Aluno"],
                    "summary": "Lista todos os alunos cadastrados",
                    "responses": {
                        "200": { "description": "Listagem", "content": { "application/json": {
                            "schema": { "$ref": "#/components/schemas/ListagemAlunoSchema" } } } }
                    }
                }
            },
            "/aluno": {
                "post": {
                    "tags": ["Aluno"],
                    "summary": "Adiciona um novo aluno à base",
                    "requestBody": { "required": true, "content": {
                        "application/x-www-form-urlencoded": {
                            "schema": { "$ref": "#/components/schemas/AlunoSchema" } } } },
                    "responses": {
                        "200": { "description": "Aluno criado", "content": { "application/json": { "schema": aluno_view } } },
                        "400": { "description": "Falha ao salvar", "content": { "application/json": { "schema": erro } } },
                        "409": { "description": "Nome duplicado", "content": { "application/json": { "schema": erro } } },
                        "422": { "description": "Entrada inválida", "content": { "application/json": { "schema": erro } } }
                    }
                },
                "get": {
                    "tags": ["Aluno"],
                    "summary": "Busca um aluno pelo nome",
                    "parameters": nome_query,
                    "responses": {
                        "200": { "description": "Aluno encontrado", "content": { "application/json": { "schema": aluno_view } } },
                        "404": { "description": "Não encontrado", "content": { "application/json": { "schema": erro } } }
                    }
                },
                "delete": {
                    "tags": ["Aluno"],
                    "summary": "Remove um aluno pelo nome",
                    "parameters": nome_query,
                    "responses": {
                        "200": { "description": "Removido", "content": { "application/json": {
                            "schema": { "$ref": "#/components/schemas/AlunoDelSchema" } } } },
                        "404": { "description": "Não encontrado", "content": { "application/json": { "schema": erro } } }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "AlunoSchema": {
                    "type": "object",
                    "required": ["nome", "matricula", "classe", "turno", "email"],
                    "properties": {
                        "nome": { "type": "string", "example": "João Silva" },
                        "matricula": { "type": "integer", "example": 12345 },
                        "classe": { "type": "string", "example": "5ª Série" },
                        "turno": { "type": "string", "example": "Manhã" },
                        "email": { "type": "string", "example": "joao.silva@gmail.com" }
                    }
                },
                "AlunoViewSchema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "example": 1 },
                        "nome": { "type": "string", "example": "João Silva" },
                        "matricula": { "type": "integer", "example": 12345 },
                        "classe": { "type": "string", "example": "5ª Série" },
                        "turno": { "type": "string", "example": "Manhã" },
                        "email": { "type": "string", "example": "joao.silva@gmail.com" },
                        "data_cadastro": { "type": "string", "example": "2024-12-03 14:30:00" }
                    }
                },
                "ListagemAlunoSchema": {
                    "type": "object",
                    "properties": { "alunos": { "type": "array", "items": aluno_view } }
                },
                "AlunoDelSchema": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" },
                        "id": { "type": "string", "description": "Nome do aluno removido" }
                    }
                },
                "ErrorSchema": {
                    "type": "object",
                    "properties": { "message": { "type": "string" } }
                }
            }
        }
    })
}
