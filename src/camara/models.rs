use serde::Deserialize;

/// Fixed page size requested from the API.
pub const PAGE_SIZE: u32 = 25;

/// User-supplied search filters. All fields are free text and optional;
/// blank values are omitted from the outgoing query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub nome: String,
    pub sigla_uf: String,
    pub sigla_partido: String,
}

impl FilterCriteria {
    /// Build the ordered query parameters for `/deputados`: each non-blank
    /// filter field, then the fixed sort order and page size.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("nome", &self.nome),
            ("siglaUf", &self.sigla_uf),
            ("siglaPartido", &self.sigla_partido),
        ];

        let mut params: Vec<(&'static str, String)> = fields
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| (key, value.to_string()))
            })
            .collect();

        params.push(("ordem", "asc".to_string()));
        params.push(("itens", PAGE_SIZE.to_string()));
        params
    }
}

/// One deputy record as returned by the open-data API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deputado {
    pub id: u32,
    pub nome: String,
    // The API returns null for deputies without a published address
    #[serde(default)]
    pub email: Option<String>,
    pub sigla_partido: String,
    pub sigla_uf: String,
    pub url_foto: String,
}

/// Response envelope: the API wraps the result collection in `dados`.
#[derive(Debug, Deserialize)]
pub struct DeputadosResponse {
    pub dados: Vec<Deputado>,
}
