mod get_by_id;
mod list;
mod list_by_status;
mod resolve;
mod route_intent;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use list_by_status::ListArticlesByStatusQuery;
pub use resolve::{ArticleLookup, ResolveArticleParamQuery};
pub use route_intent::RouteIntent;
pub use service::ArticleQueryService;
