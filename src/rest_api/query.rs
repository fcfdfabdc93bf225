//! # Query Engine
//!
//! Maps `GET /movies` parameters to exactly one view of the store.
//!
//! Rules are tried in a fixed order and the first one that applies wins:
//!
//! 1. `genre`: records tagged with the genre, case-insensitive
//! 2. `page` + `quantity`: one page of `quantity` records plus paging info
//! 3. `order=1`: whole store sorted by rate, ascending
//! 4. `order=2`: whole store sorted by rate, descending
//! 5. `ratemin` + `ratemax`: records with a rate inside the closed range
//! 6. `page`: one page of `DEFAULT_PAGE_SIZE` records
//! 7. otherwise the whole store
//!
//! Parameters are never combined. Sorting reorders the store itself, so a
//! later request sees the sorted order.

use crate::schema::Movie;
use crate::store::{MovieStore, SortDirection};

use super::errors::{RestError, RestResult};
use super::parser::ListParams;
use super::response::{ListResponse, PageResponse};

/// Page size when only `page` is given
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// The single operation selected for a request
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    ByGenre(String),
    Paginate { page: i64, quantity: i64 },
    SortByRate(SortDirection),
    RateRange { min: f64, max: f64 },
    FixedPage { page: i64 },
    All,
}

/// A rule either declines (`None`) or selects a plan
type Rule = fn(&ListParams) -> Option<RestResult<QueryPlan>>;

/// Precedence table, highest first
const RULES: [Rule; 6] = [
    genre_rule,
    pagination_rule,
    ascending_rule,
    descending_rule,
    rate_range_rule,
    fixed_page_rule,
];

impl QueryPlan {
    /// Picks the plan for `params`
    pub fn resolve(params: &ListParams) -> RestResult<QueryPlan> {
        RULES
            .iter()
            .find_map(|rule| rule(params))
            .unwrap_or(Ok(QueryPlan::All))
    }

    /// True if running the plan reorders the store
    pub fn mutates_store(&self) -> bool {
        matches!(self, QueryPlan::SortByRate(_))
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            QueryPlan::ByGenre(_) => "genre",
            QueryPlan::Paginate { .. } => "paginate",
            QueryPlan::SortByRate(SortDirection::Ascending) => "sort_asc",
            QueryPlan::SortByRate(SortDirection::Descending) => "sort_desc",
            QueryPlan::RateRange { .. } => "rate_range",
            QueryPlan::FixedPage { .. } => "fixed_page",
            QueryPlan::All => "all",
        }
    }

    /// Runs the plan, sorting the store first when the plan asks for it
    pub fn execute(&self, store: &mut MovieStore) -> ListResponse {
        if let QueryPlan::SortByRate(direction) = self {
            store.sort_by_rate(*direction);
        }
        self.view(store.list())
    }

    /// Derives the response from a snapshot; never reorders anything.
    ///
    /// For `SortByRate` this is the snapshot as-is, so callers sort first.
    pub fn view(&self, movies: &[Movie]) -> ListResponse {
        match self {
            QueryPlan::ByGenre(genre) => ListResponse::Movies(filter_by_genre(movies, genre)),
            QueryPlan::Paginate { page, quantity } => {
                ListResponse::Page(paginate(movies, *page, *quantity))
            }
            QueryPlan::RateRange { min, max } => {
                ListResponse::Movies(filter_by_rate(movies, *min, *max))
            }
            QueryPlan::FixedPage { page } => {
                ListResponse::Movies(page_slice(movies, *page, DEFAULT_PAGE_SIZE))
            }
            QueryPlan::SortByRate(_) | QueryPlan::All => ListResponse::Movies(movies.to_vec()),
        }
    }
}

fn genre_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    let genre = params.genre()?;
    Some(Ok(QueryPlan::ByGenre(genre.to_string())))
}

fn pagination_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    let (page, quantity) = (params.page()?, params.quantity()?);
    if page < 1 {
        return Some(Err(invalid("page", "must be a positive integer")));
    }
    if quantity < 1 {
        return Some(Err(invalid("quantity", "must be a positive integer")));
    }
    Some(Ok(QueryPlan::Paginate { page, quantity }))
}

fn ascending_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    (params.order()? == 1.0).then_some(Ok(QueryPlan::SortByRate(SortDirection::Ascending)))
}

fn descending_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    (params.order()? == 2.0).then_some(Ok(QueryPlan::SortByRate(SortDirection::Descending)))
}

fn rate_range_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    let (min, max) = (params.ratemin()?, params.ratemax()?);
    Some(Ok(QueryPlan::RateRange { min, max }))
}

fn fixed_page_rule(params: &ListParams) -> Option<RestResult<QueryPlan>> {
    let raw = params.raw_page()?;
    match params.page() {
        Some(page) if page >= 1 => Some(Ok(QueryPlan::FixedPage { page })),
        _ => Some(Err(invalid(
            "page",
            &format!("'{}' is not a positive integer", raw),
        ))),
    }
}

fn invalid(param: &str, reason: &str) -> RestError {
    RestError::InvalidQueryParam(format!("{} {}", param, reason))
}

/// Records tagged with `genre`, compared case-insensitively
pub fn filter_by_genre(movies: &[Movie], genre: &str) -> Vec<Movie> {
    movies.iter().filter(|m| m.has_genre(genre)).cloned().collect()
}

/// Records with `min <= rate <= max`
pub fn filter_by_rate(movies: &[Movie], min: f64, max: f64) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| m.rate >= min && m.rate <= max)
        .cloned()
        .collect()
}

/// Records at store indices `[(page-1)*size, page*size)`.
///
/// Pages past the end are empty.
pub fn page_slice(movies: &[Movie], page: i64, size: i64) -> Vec<Movie> {
    let start = (page - 1).saturating_mul(size);
    let (Ok(start), Ok(size)) = (usize::try_from(start), usize::try_from(size)) else {
        return Vec::new();
    };
    movies.iter().skip(start).take(size).cloned().collect()
}

/// One page plus `ceil(total / quantity)` and the totals
pub fn paginate(movies: &[Movie], page: i64, quantity: i64) -> PageResponse {
    let total = movies.len();
    let total_pages = u64::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .map(|q| (total as u64).div_ceil(q))
        .unwrap_or(0);

    PageResponse {
        movies: page_slice(movies, page, quantity),
        total_pages,
        current_page: page,
        total_movies: total,
    }
}
