//! Query text. Identifiers are fixed, values are always bound as parameters.
//!
//! `ano` is read as `int4` and `preco` as `float8` so decoding does not depend on the
//! exact column types of the externally managed schema.

pub const SELECT_BRANDS: &str = "SELECT DISTINCT marca FROM d_carro ORDER BY marca";

pub const SELECT_MODELS_BY_BRAND: &str =
    "SELECT DISTINCT modelo FROM d_carro WHERE marca = $1 ORDER BY modelo";

pub const SELECT_YEARS_BY_BRAND: &str =
    "SELECT DISTINCT ano::int4 AS ano FROM d_carro WHERE marca = $1 ORDER BY ano DESC";

pub const SELECT_MODELS_BY_BRAND_YEAR: &str =
    "SELECT DISTINCT modelo FROM d_carro WHERE marca = $1 AND ano = $2 ORDER BY modelo";

pub const SELECT_YEARS_BY_BRAND_MODEL: &str =
    "SELECT DISTINCT ano::int4 AS ano FROM d_carro WHERE marca = $1 AND modelo = $2 ORDER BY ano DESC";

pub const SELECT_FUELS: &str = "SELECT DISTINCT combustivel FROM d_carro \
     WHERE marca = $1 AND modelo = $2 AND ano = $3 ORDER BY combustivel";

/// At most two rows so an ambiguous key can be detected without scanning every match.
pub const SELECT_VEHICLE_IDS: &str = "SELECT id::int8 AS id FROM d_carro \
     WHERE marca = $1 AND modelo = $2 AND ano = $3 AND combustivel = $4 \
     ORDER BY id LIMIT 2";

pub const SELECT_PRICE_HISTORY: &str = "SELECT data_referencia::date AS data_referencia, preco::float8 AS preco \
     FROM f_carrovariacao WHERE id = $1 ORDER BY data_referencia DESC";

/// $1 = target price, $2 = rows per side. Below-target rows come first, closest first,
/// then at-or-above rows, closest first.
pub const SELECT_NEAREST_CURRENT_PRICES: &str = r#"
WITH latest AS (
    SELECT MAX(data_referencia) AS data_referencia FROM f_carrovariacao
),
current_prices AS (
    SELECT DISTINCT ON (c.id)
        c.marca,
        c.modelo,
        c.ano::int4 AS ano,
        c.combustivel,
        cv.preco::float8 AS preco
    FROM d_carro c
    JOIN f_carrovariacao cv ON c.id = cv.id
    JOIN latest l ON cv.data_referencia = l.data_referencia
    ORDER BY c.id
),
banded AS (
    (
        SELECT 0 AS side, *
        FROM current_prices
        WHERE preco < $1
        ORDER BY preco DESC, marca, modelo, ano
        LIMIT $2
    )
    UNION ALL
    (
        SELECT 1 AS side, *
        FROM current_prices
        WHERE preco >= $1
        ORDER BY preco ASC, marca, modelo, ano
        LIMIT $2
    )
)
SELECT marca, modelo, ano, combustivel, preco
FROM banded
ORDER BY side, CASE WHEN side = 0 THEN -preco ELSE preco END, marca, modelo, ano
"#;

pub const PING: &str = "SELECT 1";
