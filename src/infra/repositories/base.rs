//! Query helpers shared by the repositories.

use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, ConnectionTrait, Condition, DbBackend, PaginatorTrait, SelectorTrait,
};

use common::AppResult;
use domain::SearchFilter;

use crate::types::{Paginated, PaginationParams};

/// Case-insensitive "contains" predicate, or `None` when the filter is inactive.
///
/// Postgres gets `column ILIKE '%q%'`. Elsewhere `LOWER` folds ASCII only, so
/// the pattern is folded the same way: `LOWER(column) LIKE '%q%'`.
pub(crate) fn contains<C: ColumnTrait>(
    backend: DbBackend,
    column: C,
    filter: &SearchFilter,
) -> Option<SimpleExpr> {
    let pattern = filter.like_pattern()?;
    let column_ref = Expr::col((column.entity_name(), column));

    Some(match backend {
        DbBackend::Postgres => column_ref.ilike(LikeExpr::new(pattern).escape('\\')),
        _ => Expr::expr(Func::lower(column_ref))
            .like(LikeExpr::new(pattern.to_ascii_lowercase()).escape('\\')),
    })
}

/// AND together every active filter. An empty condition matches all rows.
pub(crate) fn all_of<I>(exprs: I) -> Condition
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    exprs
        .into_iter()
        .flatten()
        .fold(Condition::all(), |cond, expr| cond.add(expr))
}

/// OR together the active filters, `None` if none are active.
pub(crate) fn any_of<I>(exprs: I) -> Option<Condition>
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    let exprs: Vec<SimpleExpr> = exprs.into_iter().flatten().collect();
    if exprs.is_empty() {
        return None;
    }
    Some(
        exprs
            .into_iter()
            .fold(Condition::any(), |cond, expr| cond.add(expr)),
    )
}

/// Fetch one page of `select` plus the total row count.
///
/// Pages past the end, including ones whose offset SQL cannot express, come
/// back empty without querying rows.
pub(crate) async fn fetch_page<'db, C, S>(
    select: S,
    db: &'db C,
    params: PaginationParams,
) -> AppResult<Paginated<<S::Selector as SelectorTrait>::Item>>
where
    C: ConnectionTrait,
    S: PaginatorTrait<'db, C>,
{
    let paginator = select.paginate(db, params.limit());
    let total = paginator.num_items().await?;

    let items = match params.offset() {
        Some(offset) if offset < total => paginator.fetch_page(params.page() - 1).await?,
        _ => Vec::new(),
    };
    Ok(Paginated::new(items, params, total))
}
