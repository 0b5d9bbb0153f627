//! Turn price observations into labelled history rows.

use chrono::{Locale, NaiveDate};

use crate::config::LabelConfig;
use crate::model::PriceObservation;
use crate::response::PriceEntry;

#[derive(Clone, Debug)]
pub struct PriceLabeler {
    locale: Locale,
    current_label: String,
}

impl PriceLabeler {
    pub fn new(config: &LabelConfig) -> Self {
        PriceLabeler {
            locale: config.locale,
            current_label: config.current_label.clone(),
        }
    }

    /// Label observations that are already ordered newest first. The first row always gets
    /// the current label, whatever its date.
    pub fn label(&self, history: Vec<PriceObservation>) -> Vec<PriceEntry> {
        history
            .into_iter()
            .enumerate()
            .map(|(i, obs)| PriceEntry {
                label: if i == 0 {
                    self.current_label.clone()
                } else {
                    self.month_year(obs.data_referencia)
                },
                valor: obs.preco,
            })
            .collect()
    }

    /// "March/2024", with the month name in the configured locale and capitalised.
    pub fn month_year(&self, date: NaiveDate) -> String {
        let formatted = date
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .format_localized("%B/%Y", self.locale)
            .to_string();
        capitalize(&formatted)
    }
}

impl Default for PriceLabeler {
    fn default() -> Self {
        PriceLabeler::new(&LabelConfig::default())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
