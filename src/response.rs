//! JSON bodies returned by the API.

use serde::Serialize;

/// One row of a price history. `valor` keeps the field name the front end reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceEntry {
    pub label: String,
    pub valor: f64,
}

/// A vehicle whose current price is close to the requested average.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub combustivel: String,
    pub preco: f64,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

#[derive(Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}
