use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_ARTICLE_STATUS_CHECK) {
                return DomainError::Validation(
                    "status must be Publish, Draft, or Thrash".into(),
                );
            }

            if db_err.code().as_deref() == Some("23514") {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
