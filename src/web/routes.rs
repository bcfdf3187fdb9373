// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, docs_handlers},
};
use axum::{routing::get, Router};

pub fn create_router(app_state: AppState) -> Router {
    // --- Documentação ---
    let docs_routes = Router::new()
        .route("/", get(docs_handlers::handle_home))
        .route(docs_handlers::DOCS_PATH, get(docs_handlers::handle_docs_page))
        .route(docs_handlers::OPENAPI_JSON_PATH, get(docs_handlers::handle_openapi_json));

    // --- Alunos ---
    // /aluno: POST cria, GET busca por nome, DELETE remove por nome
    let aluno_routes = Router::new()
        .route(
            "/aluno",
            get(aluno_handlers::handle_buscar_aluno)
                .post(aluno_handlers::handle_criar_aluno)
                .delete(aluno_handlers::handle_remover_aluno),
        )
        .route("/alunos", get(aluno_handlers::handle_listar_alunos));

    Router::new()
        .merge(docs_routes)
        .merge(aluno_routes)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db::test_pool, error::MSG_NAO_ENCONTRADO, web::views::AlunoView};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn create_test_app(delete_double_decode: bool) -> Router {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.delete_double_decode = delete_double_decode;
        create_router(AppState::new(test_pool().await, config))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn criar(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/aluno")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_aluno(nome: &str) -> String {
        format!(
            "nome={}&matricula=12345&classe=5%C2%AA+S%C3%A9rie&turno=Manh%C3%A3&email=aluno%40escola.com",
            urlencoding::encode(nome)
        )
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn home_redireciona_para_documentacao() {
        let app = create_test_app(false).await;
        let response = send(&app, get("/")).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/openapi");
    }

    #[rstest]
    #[case("/openapi")]
    #[case("/openapi/openapi.json")]
    #[tokio::test]
    async fn documentacao_responde(#[case] uri: &str) {
        let app = create_test_app(false).await;
        assert_eq!(send(&app, get(uri)).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cria_e_busca_aluno() {
        let app = create_test_app(false).await;

        let response = send(&app, criar(&form_aluno("João Silva"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let criado: AlunoView = serde_json::from_value(body_json(response).await).unwrap();
        assert!(criado.id > 0);
        assert_eq!(criado.nome, "João Silva");
        assert_eq!(criado.matricula, 12345);
        assert_eq!(criado.classe, "5ª Série");
        assert_eq!(criado.turno, "Manhã");
        assert_eq!(criado.email, "aluno@escola.com");
        assert_eq!(criado.data_cadastro.len(), "YYYY-MM-DD HH:MM:SS".len());

        let response = send(&app, get("/aluno?nome=Jo%C3%A3o%20Silva")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let encontrado: AlunoView = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(encontrado, criado);
    }

    #[tokio::test]
    async fn nome_duplicado_responde_409() {
        let app = create_test_app(false).await;
        assert_eq!(send(&app, criar(&form_aluno("Ana"))).await.status(), StatusCode::OK);

        let response = send(&app, criar(&form_aluno("Ana"))).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(body_json(response).await["message"].is_string());

        let listagem = body_json(send(&app, get("/alunos")).await).await;
        assert_eq!(listagem["alunos"].as_array().unwrap().len(), 1);
    }

    #[rstest]
    #[case("nome=Ana&matricula=1&classe=5A&turno=Tarde")]
    #[case("nome=Ana&matricula=um&classe=5A&turno=Tarde&email=a%40b.com")]
    #[tokio::test]
    async fn formulario_invalido_responde_422(#[case] body: &str) {
        let app = create_test_app(false).await;
        let response = send(&app, criar(body)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let listagem = body_json(send(&app, get("/alunos")).await).await;
        assert!(listagem["alunos"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn listagem_vazia() {
        let app = create_test_app(false).await;
        let response = send(&app, get("/alunos")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "alunos": [] }));
    }

    #[tokio::test]
    async fn listagem_com_dois_alunos() {
        let app = create_test_app(false).await;
        send(&app, criar(&form_aluno("Ana"))).await;
        send(&app, criar(&form_aluno("Bruno"))).await;

        let listagem = body_json(send(&app, get("/alunos")).await).await;
        let alunos: Vec<AlunoView> =
            serde_json::from_value(listagem["alunos"].clone()).unwrap();
        let mut nomes: Vec<&str> = alunos.iter().map(|a| a.nome.as_str()).collect();
        nomes.sort();
        assert_eq!(nomes, vec!["Ana", "Bruno"]);
        assert!(alunos.iter().all(|a| a.matricula == 12345 && a.turno == "Manhã"));
    }

    #[tokio::test]
    async fn busca_inexistente_responde_404() {
        let app = create_test_app(false).await;
        let response = send(&app, get("/aluno?nome=Ninguem")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], MSG_NAO_ENCONTRADO);
    }

    #[tokio::test]
    async fn busca_sem_nome_responde_422() {
        let app = create_test_app(false).await;
        let response = send(&app, get("/aluno")).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn remove_aluno() {
        let app = create_test_app(false).await;
        send(&app, criar(&form_aluno("Ana"))).await;

        let response = send(&app, delete("/aluno?nome=Ana")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Aluno removido", "id": "Ana" })
        );

        let response = send(&app, get("/aluno?nome=Ana")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn remocao_inexistente_responde_404() {
        let app = create_test_app(false).await;
        let response = send(&app, delete("/aluno?nome=Ana")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // "João" codificado três vezes: %25 -> %2525
    const NOME_TRIPLAMENTE_CODIFICADO: &str = "/aluno?nome=Jo%2525C3%2525A3o";

    #[rstest]
    #[case(false, StatusCode::NOT_FOUND)]
    #[case(true, StatusCode::OK)]
    #[tokio::test]
    async fn remocao_respeita_modo_de_decodificacao(
        #[case] compat: bool,
        #[case] esperado: StatusCode,
    ) {
        let app = create_test_app(compat).await;
        send(&app, criar(&form_aluno("João"))).await;

        let response = send(&app, delete(NOME_TRIPLAMENTE_CODIFICADO)).await;
        assert_eq!(response.status(), esperado);
    }
}
