//! # Query Parameter Parser
//!
//! Collects the `GET /movies` query parameters. Values stay raw here;
//! each precedence rule decides for itself whether a value parses.

use std::collections::HashMap;

/// Raw `GET /movies` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub genre: Option<String>,
    pub page: Option<String>,
    pub quantity: Option<String>,
    pub ratemin: Option<String>,
    pub ratemax: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    /// Picks the known keys out of a query map; other keys are ignored
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let take = |key: &str| params.get(key).cloned();
        Self {
            genre: take("genre"),
            page: take("page"),
            quantity: take("quantity"),
            ratemin: take("ratemin"),
            ratemax: take("ratemax"),
            order: take("order"),
        }
    }

    /// Genre term, when present and non-empty
    pub fn genre(&self) -> Option<&str> {
        non_empty(&self.genre)
    }

    /// Raw page value, when present and non-empty
    pub fn raw_page(&self) -> Option<&str> {
        non_empty(&self.page)
    }

    pub fn page(&self) -> Option<i64> {
        parse_int(&self.page)
    }

    pub fn quantity(&self) -> Option<i64> {
        parse_int(&self.quantity)
    }

    pub fn ratemin(&self) -> Option<f64> {
        parse_float(&self.ratemin)
    }

    pub fn ratemax(&self) -> Option<f64> {
        parse_float(&self.ratemax)
    }

    /// Numeric `order`; `"1"`, `" 1 "` and `"1.0"` all read as 1
    pub fn order(&self) -> Option<f64> {
        parse_float(&self.order)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse an integer parameter; the whole trimmed value must be an integer
fn parse_int(value: &Option<String>) -> Option<i64> {
    value.as_deref()?.trim().parse().ok()
}

/// Parse a float parameter; NaN never counts as a value
fn parse_float(value: &Option<String>) -> Option<f64> {
    value
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}
