use camara_api::{
    DeputadoQuery, DeputadoSortBy, DespesaQuery, DespesaSortBy, Ordem, Query,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/deputados").unwrap()
}

#[test]
fn deputado_query_defaults() {
    let url = DeputadoQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("pagina=1"));
    assert!(query.contains("itens=100"));
    assert!(query.contains("ordem=ASC"));
    assert!(query.contains("ordenarPor=nome"));
}

#[test]
fn deputado_query_with_filters() {
    let url = DeputadoQuery::default()
        .with_sigla_uf("SP")
        .with_sigla_partido("PSB")
        .with_nome("Tabata")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("siglaUf=SP"));
    assert!(query.contains("siglaPartido=PSB"));
    assert!(query.contains("nome=Tabata"));
}

#[test]
fn deputado_query_sort_variants() {
    let url = DeputadoQuery::default()
        .with_ordenar_por(DeputadoSortBy::SiglaUf)
        .with_ordem(Ordem::Desc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("ordenarPor=siglaUf"));
    assert!(query.contains("ordem=DESC"));
}

#[test]
fn deputado_query_paging_overrides() {
    let url = DeputadoQuery::default()
        .with_pagina(3)
        .with_itens(25)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("pagina=3"));
    assert!(query.contains("itens=25"));
}

#[test]
fn despesa_query_defaults() {
    let url = DespesaQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("pagina=1"));
    assert!(query.contains("ordenarPor=ano"));
    assert!(!query.contains("ano="), "no year filter unless requested");
}

#[test]
fn despesa_query_with_period() {
    let url = DespesaQuery::default()
        .with_ano(2024)
        .with_mes(5)
        .with_ordenar_por(DespesaSortBy::ValorDocumento)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("ano=2024"));
    assert!(query.contains("mes=5"));
    assert!(query.contains("ordenarPor=valorDocumento"));
}
