// src/templates.rs
use askama::Template; // Trait necessário para Askama

/// Uma linha da tabela de rotas na página de documentação.
#[derive(Clone, Debug)]
pub struct RotaDoc {
    pub metodo: &'static str,
    pub caminho: &'static str,
    pub descricao: &'static str,
}

// Struct para o template `openapi.html` (ficheiro na pasta templates/)
#[derive(Template)]
#[template(path = "openapi.html")]
pub struct DocsPage<'a> {
    pub titulo: &'a str,
    pub versao: &'a str,
    pub rotas: &'a [RotaDoc],
    pub spec_url: &'a str,
}
