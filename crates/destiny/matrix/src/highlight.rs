//! Highlight selector

use destiny_types::{Highlight, Locale, MatchedCell};
use std::cmp::Ordering;

/// Ordering applied to a highlight pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Highest score first
    Strongest,
    /// Lowest score first
    MostSevere,
}

impl RankOrder {
    fn compare(self, a: &MatchedCell, b: &MatchedCell) -> Ordering {
        let by_score = match self {
            RankOrder::Strongest => b.score().cmp(&a.score()),
            RankOrder::MostSevere => a.score().cmp(&b.score()),
        };
        by_score
            .then_with(|| a.layer.cmp(&b.layer))
            .then_with(|| a.key.cmp(&b.key))
    }
}

/// Rank a pool and keep the first `limit` cells
pub fn rank<'a>(
    pool: impl IntoIterator<Item = &'a MatchedCell>,
    order: RankOrder,
    limit: usize,
) -> Vec<&'a MatchedCell> {
    let mut ranked: Vec<&MatchedCell> = pool.into_iter().collect();
    ranked.sort_by(|a, b| order.compare(a, b));
    ranked.truncate(limit);
    ranked
}

/// Rank a pool and resolve keywords for `locale`
pub fn select<'a>(
    pool: impl IntoIterator<Item = &'a MatchedCell>,
    order: RankOrder,
    limit: usize,
    locale: Locale,
) -> Vec<Highlight> {
    rank(pool, order, limit)
        .into_iter()
        .map(|cell| Highlight {
            layer: cell.layer,
            key: cell.key.clone(),
            keyword: cell.record.keyword.resolve(locale).to_string(),
            score: cell.score(),
        })
        .collect()
}
