// src/store/memoria.rs

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Store;
use crate::categorias::categoria_structs::{Categoria, CategoriaAlterada, NovaCategoria};
use crate::filmes::filmes_structs::{Filme, FilmeAlterado, FilmeDetalhado, NovoFilme};
use crate::shared::erros::StoreError;
use crate::shared::shared_structs::ValorInteiro;

const FORMATO_DATA: &str = "%Y-%m-%d";

/// Linha de 'filmes' como o banco a guarda: data como data, não como texto.
#[derive(Clone)]
struct LinhaFilme {
    titulo: String,
    sinopse: Option<String>,
    data_estreia: Option<NaiveDate>,
    categoria: i32,
}

#[derive(Default)]
struct Tabelas {
    categorias: BTreeMap<i32, String>,
    filmes: BTreeMap<i32, LinhaFilme>,
    // Sequências: um código nunca é reutilizado, como no SERIAL
    seq_categorias: i32,
    seq_filmes: i32,
}

/// Store em memória com o mesmo comportamento relacional do esquema em `migrations/`:
/// colunas NOT NULL, chave estrangeira de filmes para categorias com ON DELETE CASCADE
/// e consultas de filmes via inner join.
#[derive(Default)]
pub struct MemoryStore {
    tabelas: RwLock<Tabelas>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ler(&self) -> Result<std::sync::RwLockReadGuard<'_, Tabelas>, StoreError> {
        self.tabelas.read().map_err(|_| StoreError::Indisponivel)
    }

    fn escrever(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tabelas>, StoreError> {
        self.tabelas.write().map_err(|_| StoreError::Indisponivel)
    }
}

fn exigir<T: Clone>(
    valor: &Option<T>,
    tabela: &'static str,
    coluna: &'static str,
) -> Result<T, StoreError> {
    valor
        .clone()
        .ok_or(StoreError::ValorNulo { tabela, coluna })
}

fn converter_data(texto: &Option<String>) -> Result<Option<NaiveDate>, StoreError> {
    match texto {
        None => Ok(None),
        Some(t) => NaiveDate::parse_from_str(t.trim(), FORMATO_DATA)
            .map(Some)
            .map_err(|_| StoreError::DataInvalida(t.clone())),
    }
}

/// Cast `::int` de um parâmetro opcional.
fn converter_inteiro(valor: &Option<ValorInteiro>) -> Result<Option<i32>, StoreError> {
    valor.as_ref().map(ValorInteiro::para_i32).transpose()
}

/// Valida os campos de um filme como as restrições da tabela fariam.
fn linha_filme(
    tabelas: &Tabelas,
    titulo: &Option<String>,
    sinopse: &Option<String>,
    data_estreia: &Option<String>,
    categoria: &Option<ValorInteiro>,
) -> Result<LinhaFilme, StoreError> {
    // Os parâmetros são convertidos antes de qualquer restrição ser verificada
    let data_estreia = converter_data(data_estreia)?;
    let categoria = converter_inteiro(categoria)?;
    let titulo = exigir(titulo, "filmes", "titulo")?;
    let categoria = exigir(&categoria, "filmes", "categoria")?;
    if !tabelas.categorias.contains_key(&categoria) {
        return Err(StoreError::ChaveEstrangeira(categoria));
    }
    Ok(LinhaFilme {
        titulo,
        sinopse: sinopse.clone(),
        data_estreia,
        categoria,
    })
}

fn para_filme(codigo: i32, linha: &LinhaFilme) -> Filme {
    Filme {
        codigo,
        titulo: linha.titulo.clone(),
        sinopse: linha.sinopse.clone(),
        data_estreia: linha
            .data_estreia
            .map(|d| d.format(FORMATO_DATA).to_string()),
        categoria: linha.categoria,
    }
}

fn detalhar(tabelas: &Tabelas, codigo: i32, linha: &LinhaFilme) -> Option<FilmeDetalhado> {
    let categoria_nome = tabelas.categorias.get(&linha.categoria)?;
    let filme = para_filme(codigo, linha);
    Some(FilmeDetalhado {
        codigo: filme.codigo,
        titulo: filme.titulo,
        sinopse: filme.sinopse,
        data_estreia: filme.data_estreia,
        categoria: filme.categoria,
        categoria_nome: categoria_nome.clone(),
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn listar_categorias(&self) -> Result<Vec<Categoria>, StoreError> {
        let tabelas = self.ler()?;
        Ok(tabelas
            .categorias
            .iter()
            .map(|(codigo, nome)| Categoria {
                codigo: *codigo,
                nome: nome.clone(),
            })
            .collect())
    }

    async fn criar_categoria(&self, nova: &NovaCategoria) -> Result<Categoria, StoreError> {
        let nome = exigir(&nova.nome, "categorias", "nome")?;
        let mut tabelas = self.escrever()?;
        tabelas.seq_categorias += 1;
        let codigo = tabelas.seq_categorias;
        tabelas.categorias.insert(codigo, nome.clone());
        Ok(Categoria { codigo, nome })
    }

    async fn atualizar_categoria(
        &self,
        alterada: &CategoriaAlterada,
    ) -> Result<Option<Categoria>, StoreError> {
        let mut tabelas = self.escrever()?;
        let Some(codigo) = converter_inteiro(&alterada.codigo)? else {
            return Ok(None);
        };
        if !tabelas.categorias.contains_key(&codigo) {
            return Ok(None);
        }
        let nome = exigir(&alterada.nome, "categorias", "nome")?;
        tabelas.categorias.insert(codigo, nome.clone());
        Ok(Some(Categoria { codigo, nome }))
    }

    async fn remover_categoria(&self, codigo: i32) -> Result<u64, StoreError> {
        let mut tabelas = self.escrever()?;
        if tabelas.categorias.remove(&codigo).is_none() {
            return Ok(0);
        }
        // ON DELETE CASCADE
        tabelas.filmes.retain(|_, filme| filme.categoria != codigo);
        Ok(1)
    }

    async fn buscar_categoria(&self, codigo: i32) -> Result<Option<Categoria>, StoreError> {
        let tabelas = self.ler()?;
        Ok(tabelas.categorias.get(&codigo).map(|nome| Categoria {
            codigo,
            nome: nome.clone(),
        }))
    }

    async fn listar_filmes(&self) -> Result<Vec<FilmeDetalhado>, StoreError> {
        let tabelas = self.ler()?;
        Ok(tabelas
            .filmes
            .iter()
            .filter_map(|(codigo, linha)| detalhar(&tabelas, *codigo, linha))
            .collect())
    }

    async fn criar_filme(&self, novo: &NovoFilme) -> Result<Filme, StoreError> {
        let mut tabelas = self.escrever()?;
        let linha = linha_filme(
            &tabelas,
            &novo.titulo,
            &novo.sinopse,
            &novo.data_estreia,
            &novo.categoria,
        )?;
        tabelas.seq_filmes += 1;
        let codigo = tabelas.seq_filmes;
        let filme = para_filme(codigo, &linha);
        tabelas.filmes.insert(codigo, linha);
        Ok(filme)
    }

    async fn atualizar_filme(&self, alterado: &FilmeAlterado) -> Result<Option<Filme>, StoreError> {
        let mut tabelas = self.escrever()?;
        let Some(codigo) = converter_inteiro(&alterado.codigo)? else {
            return Ok(None);
        };
        if !tabelas.filmes.contains_key(&codigo) {
            return Ok(None);
        }
        let linha = linha_filme(
            &tabelas,
            &alterado.titulo,
            &alterado.sinopse,
            &alterado.data_estreia,
            &alterado.categoria,
        )?;
        let filme = para_filme(codigo, &linha);
        tabelas.filmes.insert(codigo, linha);
        Ok(Some(filme))
    }

    async fn remover_filme(&self, codigo: i32) -> Result<u64, StoreError> {
        let mut tabelas = self.escrever()?;
        Ok(tabelas.filmes.remove(&codigo).map_or(0, |_| 1))
    }

    async fn buscar_filme(&self, codigo: i32) -> Result<Option<FilmeDetalhado>, StoreError> {
        let tabelas = self.ler()?;
        Ok(tabelas
            .filmes
            .get(&codigo)
            .and_then(|linha| detalhar(&tabelas, codigo, linha)))
    }
}
