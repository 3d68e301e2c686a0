// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, Pool, Postgres};

use super::Store;
use crate::categorias::categoria_structs::{Categoria, CategoriaAlterada, NovaCategoria};
use crate::filmes::filmes_structs::{Filme, FilmeAlterado, FilmeDetalhado, NovoFilme};
use crate::shared::erros::StoreError;
use crate::shared::shared_structs::ValorInteiro;

/// Inteiros do corpo seguem como texto; o `::int` no SQL faz a conversão.
fn como_texto(valor: &Option<ValorInteiro>) -> Option<String> {
    valor.as_ref().map(ValorInteiro::texto)
}

const SELECT_FILME_DETALHADO: &str = "SELECT f.codigo AS codigo, f.titulo AS titulo, f.sinopse AS sinopse, \
     to_char(f.data_estreia, 'YYYY-MM-DD') AS data_estreia, \
     f.categoria AS categoria, c.nome AS categoria_nome \
     FROM filmes f \
     JOIN categorias c ON f.categoria = c.codigo";

const RETURNING_FILME: &str = "RETURNING codigo, titulo, sinopse, \
     to_char(data_estreia, 'YYYY-MM-DD') AS data_estreia, categoria";

/// Store sobre um pool de conexões PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgStore { pool }
    }

    /// Abre o pool de conexões com o banco.
    pub async fn conectar(database_url: &str, max_conexoes: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_conexoes)
            .connect(database_url)
            .await?;
        Ok(PgStore::new(pool))
    }

    /// Cria as tabelas `categorias` e `filmes` caso ainda não existam.
    pub async fn migrar(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn listar_categorias(&self) -> Result<Vec<Categoria>, StoreError> {
        let categorias =
            query_as::<_, Categoria>("SELECT codigo, nome FROM categorias ORDER BY codigo")
                .fetch_all(&self.pool)
                .await?;
        Ok(categorias)
    }

    async fn criar_categoria(&self, nova: &NovaCategoria) -> Result<Categoria, StoreError> {
        let categoria = query_as::<_, Categoria>(
            "INSERT INTO categorias (nome) VALUES ($1) RETURNING codigo, nome",
        )
        .bind(&nova.nome)
        .fetch_one(&self.pool)
        .await?;
        Ok(categoria)
    }

    async fn atualizar_categoria(
        &self,
        alterada: &CategoriaAlterada,
    ) -> Result<Option<Categoria>, StoreError> {
        let categoria = query_as::<_, Categoria>(
            "UPDATE categorias SET nome = $1 WHERE codigo = $2::int RETURNING codigo, nome",
        )
        .bind(&alterada.nome)
        .bind(como_texto(&alterada.codigo))
        .fetch_optional(&self.pool)
        .await?;
        Ok(categoria)
    }

    async fn remover_categoria(&self, codigo: i32) -> Result<u64, StoreError> {
        let res = query("DELETE FROM categorias WHERE codigo = $1")
            .bind(codigo)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    async fn buscar_categoria(&self, codigo: i32) -> Result<Option<Categoria>, StoreError> {
        let categoria =
            query_as::<_, Categoria>("SELECT codigo, nome FROM categorias WHERE codigo = $1")
                .bind(codigo)
                .fetch_optional(&self.pool)
                .await?;
        Ok(categoria)
    }

    async fn listar_filmes(&self) -> Result<Vec<FilmeDetalhado>, StoreError> {
        let sql = format!("{} ORDER BY f.codigo", SELECT_FILME_DETALHADO);
        let filmes = query_as::<_, FilmeDetalhado>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(filmes)
    }

    async fn criar_filme(&self, novo: &NovoFilme) -> Result<Filme, StoreError> {
        let sql = format!(
            "INSERT INTO filmes (titulo, sinopse, data_estreia, categoria) \
             VALUES ($1, $2, $3::date, $4::int) {}",
            RETURNING_FILME
        );
        let filme = query_as::<_, Filme>(&sql)
            .bind(&novo.titulo)
            .bind(&novo.sinopse)
            .bind(&novo.data_estreia)
            .bind(como_texto(&novo.categoria))
            .fetch_one(&self.pool)
            .await?;
        Ok(filme)
    }

    async fn atualizar_filme(&self, alterado: &FilmeAlterado) -> Result<Option<Filme>, StoreError> {
        let sql = format!(
            "UPDATE filmes SET titulo = $1, sinopse = $2, data_estreia = $3::date, categoria = $4::int \
             WHERE codigo = $5::int {}",
            RETURNING_FILME
        );
        let filme = query_as::<_, Filme>(&sql)
            .bind(&alterado.titulo)
            .bind(&alterado.sinopse)
            .bind(&alterado.data_estreia)
            .bind(como_texto(&alterado.categoria))
            .bind(como_texto(&alterado.codigo))
            .fetch_optional(&self.pool)
            .await?;
        Ok(filme)
    }

    async fn remover_filme(&self, codigo: i32) -> Result<u64, StoreError> {
        let res = query("DELETE FROM filmes WHERE codigo = $1")
            .bind(codigo)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    async fn buscar_filme(&self, codigo: i32) -> Result<Option<FilmeDetalhado>, StoreError> {
        let sql = format!("{} WHERE f.codigo = $1", SELECT_FILME_DETALHADO);
        let filme = query_as::<_, FilmeDetalhado>(&sql)
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await?;
        Ok(filme)
    }
}
