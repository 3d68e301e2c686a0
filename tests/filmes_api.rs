//! Testes de integração das rotas de filmes.

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use catalogo_filmes::configurar;
use catalogo_filmes::store::Store;

#[actix_web::test]
async fn cadastrar_devolve_data_sem_hora() {
    let (data, store) = common::estado();
    let ficcao = common::categoria(&store, "Ficção científica").await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::post()
        .uri("/filmes")
        .set_json(json!({
            "titulo": "Matrix",
            "sinopse": "...",
            "data_estreia": "1999-03-31",
            "categoria": ficcao.codigo
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Filme inserido");
    let objeto = &body["objeto"];
    assert!(objeto["codigo"].as_i64().unwrap() > 0);
    assert_eq!(objeto["titulo"], "Matrix");
    assert_eq!(objeto["sinopse"], "...");
    assert_eq!(objeto["data_estreia"], "1999-03-31");
    assert_eq!(objeto["categoria"], ficcao.codigo);
    // Cadastro devolve apenas as colunas da tabela, sem o join.
    assert!(objeto.get("categoria_nome").is_none());
}

#[actix_web::test]
async fn cadastrar_com_categoria_inexistente_devolve_400() {
    let (data, store) = common::estado();
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::post()
        .uri("/filmes")
        .set_json(json!({ "titulo": "Matrix", "data_estreia": "1999-03-31", "categoria": 7 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Erro ao inserir o filme: "));
    assert!(store.listar_filmes().await.unwrap().is_empty());
}

#[actix_web::test]
async fn cadastrar_com_data_invalida_devolve_400() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::post()
        .uri("/filmes")
        .set_json(json!({ "titulo": "Central do Brasil", "data_estreia": "ontem", "categoria": drama.codigo }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Erro ao inserir o filme: sintaxe de entrada inválida para o tipo date: \"ontem\""
    );
}

#[actix_web::test]
async fn buscar_traz_nome_da_categoria() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let filme = common::filme(&store, "Central do Brasil", "1998-04-03", drama.codigo).await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/filmes/{}", filme.codigo))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "codigo": filme.codigo,
            "titulo": "Central do Brasil",
            "sinopse": "Sinopse de Central do Brasil",
            "data_estreia": "1998-04-03",
            "categoria": drama.codigo,
            "categoria_nome": "Drama"
        })
    );
}

#[actix_web::test]
async fn listar_une_categorias_e_ordena_por_codigo() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let comedia = common::categoria(&store, "Comédia").await;
    let primeiro = common::filme(&store, "O Auto da Compadecida", "2000-09-10", comedia.codigo).await;
    let segundo = common::filme(&store, "Cidade de Deus", "2002-08-30", drama.codigo).await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::get().uri("/filmes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        common::codigos(&body),
        vec![primeiro.codigo as i64, segundo.codigo as i64]
    );
    assert_eq!(body[0]["categoria_nome"], "Comédia");
    assert_eq!(body[1]["categoria_nome"], "Drama");
    assert_eq!(body[1]["data_estreia"], "2002-08-30");
}

#[actix_web::test]
async fn remover_categoria_tira_filme_das_consultas() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let comedia = common::categoria(&store, "Comédia").await;
    let orfao = common::filme(&store, "Cidade de Deus", "2002-08-30", drama.codigo).await;
    let mantido = common::filme(&store, "O Auto da Compadecida", "2000-09-10", comedia.codigo).await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/categorias/{}", drama.codigo))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/filmes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(common::codigos(&body), vec![mantido.codigo as i64]);

    let req = test::TestRequest::get()
        .uri(&format!("/filmes/{}", orfao.codigo))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("Nenhum registro encontrado com o código {}", orfao.codigo)
    );
}

#[actix_web::test]
async fn atualizar_devolve_filme_alterado() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let comedia = common::categoria(&store, "Comédia").await;
    let filme = common::filme(&store, "Cidade de Deus", "2002-08-30", drama.codigo).await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::put()
        .uri("/filmes")
        .set_json(json!({
            "codigo": filme.codigo,
            "titulo": "Cidade de Deus",
            "sinopse": "Nova sinopse",
            "data_estreia": "2002-05-18",
            "categoria": comedia.codigo
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Filme alterado");
    assert_eq!(
        body["objeto"],
        json!({
            "codigo": filme.codigo,
            "titulo": "Cidade de Deus",
            "sinopse": "Nova sinopse",
            "data_estreia": "2002-05-18",
            "categoria": comedia.codigo
        })
    );

    let detalhado = store.buscar_filme(filme.codigo).await.unwrap().unwrap();
    assert_eq!(detalhado.categoria_nome, "Comédia");
}

#[actix_web::test]
async fn atualizar_inexistente_devolve_400() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::put()
        .uri("/filmes")
        .set_json(json!({ "codigo": 321, "titulo": "Fantasma", "categoria": drama.codigo }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "status": "error",
            "message": "Nenhum registro com o código 321 para ser alterado"
        })
    );
}

#[actix_web::test]
async fn remover_filme() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let filme = common::filme(&store, "Cidade de Deus", "2002-08-30", drama.codigo).await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/filmes/{}", filme.codigo))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Filme removido com sucesso!" })
    );

    // Segunda remoção do mesmo código não encontra nada.
    let req = test::TestRequest::delete()
        .uri(&format!("/filmes/{}", filme.codigo))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("Nenhum registro com o código {} para ser removido", filme.codigo)
    );
    assert!(store.listar_filmes().await.unwrap().is_empty());
}

#[actix_web::test]
async fn cadastrar_aceita_categoria_em_texto() {
    let (data, store) = common::estado();
    let drama = common::categoria(&store, "Drama").await;
    let app = test::init_service(App::new().app_data(data.clone()).configure(configurar)).await;

    let req = test::TestRequest::post()
        .uri("/filmes")
        .set_json(json!({
            "titulo": "Cidade de Deus",
            "data_estreia": "2002-08-30",
            "categoria": drama.codigo.to_string()
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["objeto"]["categoria"], drama.codigo);
    assert_eq!(body["objeto"]["sinopse"], Value::Null);
}
