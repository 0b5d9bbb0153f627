//! Domain types read from `d_carro` and `f_carrovariacao`.

use chrono::NaiveDate;

use crate::response::Suggestion;

/// Natural key of a vehicle record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleKey {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub combustivel: String,
}

/// One row of `f_carrovariacao`.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PriceObservation {
    pub data_referencia: NaiveDate,
    pub preco: f64,
}

/// A vehicle together with its price at the latest reference date of the dataset.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct CurrentPrice {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub combustivel: String,
    pub preco: f64,
}

impl From<CurrentPrice> for Suggestion {
    fn from(p: CurrentPrice) -> Self {
        Suggestion {
            marca: p.marca,
            modelo: p.modelo,
            ano: p.ano,
            combustivel: p.combustivel,
            preco: p.preco,
        }
    }
}
